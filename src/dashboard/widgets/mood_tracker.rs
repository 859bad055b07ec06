use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five moods on offer, stored as their emoji.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    #[serde(rename = "😊")]
    Happy,
    #[serde(rename = "😌")]
    Calm,
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "😔")]
    Tired,
    #[serde(rename = "😞")]
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Happy, Mood::Calm, Mood::Neutral, Mood::Tired, Mood::Sad];

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Neutral => "😐",
            Mood::Tired => "😔",
            Mood::Sad => "😞",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy & Energetic",
            Mood::Calm => "Calm & Content",
            Mood::Neutral => "Neutral",
            Mood::Tired => "Tired",
            Mood::Sad => "Sad",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub mood_label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodTrackerData {
    #[serde(default)]
    pub entries: Vec<MoodEntry>,
    #[serde(default)]
    pub current_mood: Option<Mood>,
}

impl MoodTrackerData {
    /// Record `mood` for `today`, replacing an earlier pick from the same day.
    pub fn select(&mut self, mood: Mood, today: NaiveDate) {
        self.entries.retain(|entry| entry.date != today);
        self.entries.push(MoodEntry {
            date: today,
            mood,
            mood_label: mood.label().to_string(),
        });
        self.current_mood = Some(mood);
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }
}
