use super::non_empty;
use crate::dashboard::ids::generate_item_id;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
    /// Percentage in `0..=100`.
    #[serde(default)]
    pub progress: u8,
}

impl Goal {
    /// Countdown label relative to `today`.
    pub fn days_until(&self, today: NaiveDate) -> String {
        let days = (self.target_date - today).num_days();
        match days {
            d if d < 0 => "Overdue".to_string(),
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            d => format!("{d} days"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalsData {
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl GoalsData {
    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        target_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<&Goal> {
        let title = non_empty(title)?;
        self.goals.push(Goal {
            id: generate_item_id(now),
            title,
            description: description.and_then(non_empty),
            target_date,
            completed: false,
            progress: 0,
        });
        self.goals.last()
    }

    /// Flip completion; progress jumps to 100 or back to 0 with it.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        goal.completed = !goal.completed;
        goal.progress = if goal.completed { 100 } else { 0 };
        true
    }

    pub fn set_progress(&mut self, id: &str, progress: i32) -> bool {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.progress = progress.clamp(0, 100) as u8;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn days_until_labels() {
        let mut data = GoalsData::default();
        let goal = data.add("Run 5k", None, date(20), Utc::now()).unwrap().clone();
        assert_eq!(goal.days_until(date(21)), "Overdue");
        assert_eq!(goal.days_until(date(20)), "Today");
        assert_eq!(goal.days_until(date(19)), "Tomorrow");
        assert_eq!(goal.days_until(date(10)), "10 days");
    }

    #[test]
    fn toggle_and_progress_clamp() {
        let mut data = GoalsData::default();
        assert!(data.add("  ", None, date(1), Utc::now()).is_none());
        let id = data.add("Learn Rust", Some("ownership"), date(30), Utc::now())
            .unwrap()
            .id
            .clone();
        assert!(data.set_progress(&id, 140));
        assert_eq!(data.goals[0].progress, 100);
        assert!(data.set_progress(&id, -5));
        assert_eq!(data.goals[0].progress, 0);
        assert!(data.toggle(&id));
        assert!(data.goals[0].completed);
        assert_eq!(data.goals[0].progress, 100);
        assert!(data.toggle(&id));
        assert_eq!(data.goals[0].progress, 0);
        assert!(data.remove(&id));
        assert!(!data.toggle(&id));
    }
}
