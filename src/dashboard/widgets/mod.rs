use crate::dashboard::catalog::WidgetType;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

mod calendar;
mod expense_tracker;
mod goals;
mod habit_tracker;
mod mood_tracker;
mod pomodoro;
mod quote;
mod reading_tracker;
mod sticky_notes;
mod todo;
mod water_tracker;
mod weather;
mod welcome;

pub use calendar::{month_grid, CalendarData, CalendarEvent};
pub use expense_tracker::{Expense, ExpenseTrackerData, DEFAULT_CATEGORIES};
pub use goals::{Goal, GoalsData};
pub use habit_tracker::{Habit, HabitTrackerData};
pub use mood_tracker::{Mood, MoodEntry, MoodTrackerData};
pub use pomodoro::{PomodoroData, TickOutcome, DEFAULT_POMODORO_MINUTES, MAX_POMODORO_MINUTES};
pub use quote::{Quote, QuoteData, QUOTES};
pub use reading_tracker::{ReadingEntry, ReadingTrackerData};
pub use sticky_notes::{StickyNote, StickyNotesData, NOTE_COLORS};
pub use todo::{TodoData, TodoItem, TodoStats};
pub use water_tracker::{WaterEntry, WaterTrackerData};
pub use weather::{
    normalize_city, WeatherCondition, WeatherData, WeatherError, WeatherProvider, WeatherReport,
};
pub use welcome::WelcomeData;

/// Typed payload of a widget, one variant per [`WidgetType`].
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetData {
    Welcome(WelcomeData),
    Todo(TodoData),
    Pomodoro(PomodoroData),
    Quote(QuoteData),
    StickyNotes(StickyNotesData),
    HabitTracker(HabitTrackerData),
    MoodTracker(MoodTrackerData),
    Weather(WeatherData),
    Calendar(CalendarData),
    Goals(GoalsData),
    WaterTracker(WaterTrackerData),
    ReadingTracker(ReadingTrackerData),
    ExpenseTracker(ExpenseTrackerData),
}

impl WidgetData {
    pub fn kind(&self) -> WidgetType {
        match self {
            WidgetData::Welcome(_) => WidgetType::Welcome,
            WidgetData::Todo(_) => WidgetType::Todo,
            WidgetData::Pomodoro(_) => WidgetType::Pomodoro,
            WidgetData::Quote(_) => WidgetType::Quote,
            WidgetData::StickyNotes(_) => WidgetType::StickyNotes,
            WidgetData::HabitTracker(_) => WidgetType::HabitTracker,
            WidgetData::MoodTracker(_) => WidgetType::MoodTracker,
            WidgetData::Weather(_) => WidgetType::Weather,
            WidgetData::Calendar(_) => WidgetType::Calendar,
            WidgetData::Goals(_) => WidgetType::Goals,
            WidgetData::WaterTracker(_) => WidgetType::WaterTracker,
            WidgetData::ReadingTracker(_) => WidgetType::ReadingTracker,
            WidgetData::ExpenseTracker(_) => WidgetType::ExpenseTracker,
        }
    }

    /// Payload a freshly added widget of `kind` starts with.
    pub fn default_for(kind: WidgetType) -> Self {
        match kind {
            WidgetType::Welcome => WidgetData::Welcome(WelcomeData::default()),
            WidgetType::Todo => WidgetData::Todo(TodoData::default()),
            WidgetType::Pomodoro => WidgetData::Pomodoro(PomodoroData::default()),
            WidgetType::Quote => WidgetData::Quote(QuoteData::default()),
            WidgetType::StickyNotes => WidgetData::StickyNotes(StickyNotesData::default()),
            WidgetType::HabitTracker => WidgetData::HabitTracker(HabitTrackerData::starter()),
            WidgetType::MoodTracker => WidgetData::MoodTracker(MoodTrackerData::default()),
            WidgetType::Weather => WidgetData::Weather(WeatherData::default()),
            WidgetType::Calendar => WidgetData::Calendar(CalendarData::default()),
            WidgetType::Goals => WidgetData::Goals(GoalsData::default()),
            WidgetType::WaterTracker => WidgetData::WaterTracker(WaterTrackerData::default()),
            WidgetType::ReadingTracker => {
                WidgetData::ReadingTracker(ReadingTrackerData::default())
            }
            WidgetType::ExpenseTracker => {
                WidgetData::ExpenseTracker(ExpenseTrackerData::default())
            }
        }
    }

    /// Decode the untyped `data` object stored next to a `type` tag.
    pub fn from_value(kind: WidgetType, value: Value) -> Result<Self, serde_json::Error> {
        let value = if value.is_null() { json!({}) } else { value };
        Ok(match kind {
            WidgetType::Welcome => WidgetData::Welcome(serde_json::from_value(value)?),
            WidgetType::Todo => WidgetData::Todo(serde_json::from_value(value)?),
            WidgetType::Pomodoro => WidgetData::Pomodoro(serde_json::from_value(value)?),
            WidgetType::Quote => WidgetData::Quote(serde_json::from_value(value)?),
            WidgetType::StickyNotes => WidgetData::StickyNotes(serde_json::from_value(value)?),
            WidgetType::HabitTracker => WidgetData::HabitTracker(serde_json::from_value(value)?),
            WidgetType::MoodTracker => WidgetData::MoodTracker(serde_json::from_value(value)?),
            WidgetType::Weather => WidgetData::Weather(serde_json::from_value(value)?),
            WidgetType::Calendar => WidgetData::Calendar(serde_json::from_value(value)?),
            WidgetType::Goals => WidgetData::Goals(serde_json::from_value(value)?),
            WidgetType::WaterTracker => WidgetData::WaterTracker(serde_json::from_value(value)?),
            WidgetType::ReadingTracker => {
                WidgetData::ReadingTracker(serde_json::from_value(value)?)
            }
            WidgetType::ExpenseTracker => {
                WidgetData::ExpenseTracker(serde_json::from_value(value)?)
            }
        })
    }

    pub fn to_value(&self) -> Value {
        let value = match self {
            WidgetData::Welcome(d) => serde_json::to_value(d),
            WidgetData::Todo(d) => serde_json::to_value(d),
            WidgetData::Pomodoro(d) => serde_json::to_value(d),
            WidgetData::Quote(d) => serde_json::to_value(d),
            WidgetData::StickyNotes(d) => serde_json::to_value(d),
            WidgetData::HabitTracker(d) => serde_json::to_value(d),
            WidgetData::MoodTracker(d) => serde_json::to_value(d),
            WidgetData::Weather(d) => serde_json::to_value(d),
            WidgetData::Calendar(d) => serde_json::to_value(d),
            WidgetData::Goals(d) => serde_json::to_value(d),
            WidgetData::WaterTracker(d) => serde_json::to_value(d),
            WidgetData::ReadingTracker(d) => serde_json::to_value(d),
            WidgetData::ExpenseTracker(d) => serde_json::to_value(d),
        };
        value.unwrap_or_else(|_| json!({}))
    }

    /// Shallow-merge `patch` over the current payload and decode the result
    /// as the same widget type. `self` is left untouched on error.
    pub fn merged_with(&self, patch: &Value) -> anyhow::Result<Self> {
        if !patch.is_object() {
            anyhow::bail!("widget data patch must be a JSON object");
        }
        let merged = merge_json(&self.to_value(), patch);
        let kind = self.kind();
        let mut data = WidgetData::from_value(kind, merged)
            .map_err(|e| anyhow::anyhow!("patch does not fit {kind} data: {e}"))?;
        if let WidgetData::Pomodoro(pomodoro) = &mut data {
            pomodoro.clamp_to_limits();
        }
        Ok(data)
    }
}

/// Typed access to one variant of [`WidgetData`].
pub trait WidgetPayload: Serialize + DeserializeOwned + Sized {
    const KIND: WidgetType;

    fn from_data(data: &WidgetData) -> Option<&Self>;
    fn from_data_mut(data: &mut WidgetData) -> Option<&mut Self>;
}

macro_rules! widget_payload {
    ($ty:ty, $variant:ident) => {
        impl WidgetPayload for $ty {
            const KIND: WidgetType = WidgetType::$variant;

            fn from_data(data: &WidgetData) -> Option<&Self> {
                match data {
                    WidgetData::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_data_mut(data: &mut WidgetData) -> Option<&mut Self> {
                match data {
                    WidgetData::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for WidgetData {
            fn from(inner: $ty) -> Self {
                WidgetData::$variant(inner)
            }
        }
    };
}

widget_payload!(WelcomeData, Welcome);
widget_payload!(TodoData, Todo);
widget_payload!(PomodoroData, Pomodoro);
widget_payload!(QuoteData, Quote);
widget_payload!(StickyNotesData, StickyNotes);
widget_payload!(HabitTrackerData, HabitTracker);
widget_payload!(MoodTrackerData, MoodTracker);
widget_payload!(WeatherData, Weather);
widget_payload!(CalendarData, Calendar);
widget_payload!(GoalsData, Goals);
widget_payload!(WaterTrackerData, WaterTracker);
widget_payload!(ReadingTrackerData, ReadingTracker);
widget_payload!(ExpenseTrackerData, ExpenseTracker);

pub(crate) fn merge_json(base: &Value, updates: &Value) -> Value {
    match (base, updates) {
        (Value::Object(a), Value::Object(b)) => {
            let mut merged = a.clone();
            for (k, v) in b {
                merged.insert(k.clone(), v.clone());
            }
            Value::Object(merged)
        }
        _ => updates.clone(),
    }
}

/// Trimmed text, or `None` when nothing but whitespace was entered.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_json_preserves_unknown_fields() {
        let base = json!({"known": 1, "extra": {"keep": true}});
        let updates = json!({"known": 2});
        let merged = merge_json(&base, &updates);
        assert_eq!(merged["known"], json!(2));
        assert_eq!(merged["extra"], json!({"keep": true}));
    }

    #[test]
    fn every_type_has_a_matching_default() {
        for kind in WidgetType::ALL {
            let data = WidgetData::default_for(kind);
            assert_eq!(data.kind(), kind);
            let decoded = WidgetData::from_value(kind, data.to_value()).unwrap();
            assert_eq!(decoded, data);
        }
    }

    #[test]
    fn merge_is_shallow_and_typed() {
        let data = WidgetData::default_for(WidgetType::WaterTracker);
        let merged = data.merged_with(&json!({"todayAmount": 3})).unwrap();
        let water = WaterTrackerData::from_data(&merged).unwrap();
        assert_eq!(water.today_amount, 3);
        assert_eq!(water.daily_target, 8);
    }

    #[test]
    fn ill_typed_patch_is_rejected() {
        let data = WidgetData::default_for(WidgetType::Todo);
        assert!(data.merged_with(&json!({"items": "nope"})).is_err());
        assert!(data.merged_with(&json!([1, 2])).is_err());
    }

    #[test]
    fn payload_access_checks_variant() {
        let mut data = WidgetData::default_for(WidgetType::Todo);
        assert!(TodoData::from_data_mut(&mut data).is_some());
        assert!(PomodoroData::from_data(&data).is_none());
        assert_eq!(<TodoData as WidgetPayload>::KIND, WidgetType::Todo);
    }
}
