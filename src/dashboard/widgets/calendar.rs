use super::non_empty;
use crate::dashboard::ids::generate_item_id;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// `HH:MM`, local to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    fn sort_key(&self) -> (NaiveDate, Option<NaiveTime>) {
        let time = self
            .time
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok());
        (self.date, time)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarData {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl CalendarData {
    /// Add an event. The title must not be blank and `time`, when given,
    /// must be `HH:MM`.
    pub fn add(
        &mut self,
        title: &str,
        date: NaiveDate,
        time: Option<&str>,
        description: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<&CalendarEvent> {
        let title = non_empty(title)?;
        let time = match time.and_then(non_empty) {
            Some(t) => {
                NaiveTime::parse_from_str(&t, "%H:%M").ok()?;
                Some(t)
            }
            None => None,
        };
        self.events.push(CalendarEvent {
            id: generate_item_id(now),
            title,
            date,
            time,
            description: description.and_then(non_empty),
        });
        self.events.last()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        self.events.len() != before
    }

    /// Events on `date`, untimed first, then by time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        let mut events: Vec<&CalendarEvent> =
            self.events.iter().filter(|e| e.date == date).collect();
        events.sort_by_key(|e| e.sort_key());
        events
    }

    /// Up to `limit` events on or after `today`, soonest first.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<&CalendarEvent> {
        let mut events: Vec<&CalendarEvent> =
            self.events.iter().filter(|e| e.date >= today).collect();
        events.sort_by_key(|e| e.sort_key());
        events.truncate(limit);
        events
    }
}

/// Six full weeks (42 days) covering `year`-`month`, starting on the Sunday on
/// or before the first of the month. `None` for an invalid month.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = first.weekday().num_days_from_sunday() as u64;
    let start = first.checked_sub_days(Days::new(offset))?;
    Some(start.iter_days().take(42).collect())
}
