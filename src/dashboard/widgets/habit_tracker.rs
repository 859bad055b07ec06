use super::non_empty;
use crate::dashboard::ids::generate_item_id;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const HABIT_COLORS: [&str; 3] = ["sage", "dusty-pink", "pastel-teal"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub completed_days: Vec<NaiveDate>,
}

impl Habit {
    pub(crate) fn seed(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            completed_days: Vec::new(),
        }
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completed_days.contains(&date)
    }

    /// Consecutive completed days ending at `today` (or yesterday when today
    /// is still open).
    pub fn streak(&self, today: NaiveDate) -> u32 {
        let mut day = if self.completed_on(today) {
            today
        } else {
            match today.checked_sub_days(Days::new(1)) {
                Some(d) => d,
                None => return 0,
            }
        };
        let mut streak = 0;
        while self.completed_on(day) {
            streak += 1;
            match day.checked_sub_days(Days::new(1)) {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitTrackerData {
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl HabitTrackerData {
    /// Habits a newly added tracker is seeded with.
    pub fn starter() -> Self {
        Self {
            habits: vec![
                Habit::seed("1", "Drink water", "sage"),
                Habit::seed("2", "Exercise", "dusty-pink"),
                Habit::seed("3", "Read", "pastel-teal"),
            ],
        }
    }

    pub fn add(&mut self, name: &str, now: DateTime<Utc>) -> Option<&Habit> {
        let name = non_empty(name)?;
        let color = HABIT_COLORS[self.habits.len() % HABIT_COLORS.len()];
        self.habits.push(Habit {
            id: generate_item_id(now),
            name,
            color: color.to_string(),
            completed_days: Vec::new(),
        });
        self.habits.last()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        self.habits.len() != before
    }

    /// Flip completion of `id` on `date`; returns the new state, or `None`
    /// when the habit does not exist.
    pub fn toggle_day(&mut self, id: &str, date: NaiveDate) -> Option<bool> {
        let habit = self.habits.iter_mut().find(|habit| habit.id == id)?;
        if habit.completed_on(date) {
            habit.completed_days.retain(|d| *d != date);
            Some(false)
        } else {
            habit.completed_days.push(date);
            Some(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn colours_cycle_with_habit_count() {
        let mut data = HabitTrackerData::starter();
        let habit = data.add("Stretch", Utc::now()).unwrap();
        assert_eq!(habit.color, "sage");
        assert!(data.add(" ", Utc::now()).is_none());
    }

    #[test]
    fn toggle_day_flips_membership() {
        let mut data = HabitTrackerData::starter();
        assert_eq!(data.toggle_day("1", day(5)), Some(true));
        assert!(data.habits[0].completed_on(day(5)));
        assert_eq!(data.toggle_day("1", day(5)), Some(false));
        assert!(data.habits[0].completed_days.is_empty());
        assert_eq!(data.toggle_day("nope", day(5)), None);
    }

    #[test]
    fn streak_counts_back_from_today_or_yesterday() {
        let mut data = HabitTrackerData::starter();
        for d in [2, 3, 4] {
            data.toggle_day("2", day(d));
        }
        let habit = &data.habits[1];
        assert_eq!(habit.streak(day(4)), 3);
        assert_eq!(habit.streak(day(5)), 3);
        assert_eq!(habit.streak(day(6)), 0);
    }
}
