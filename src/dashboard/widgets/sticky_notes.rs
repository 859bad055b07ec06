use super::non_empty;
use crate::dashboard::ids::generate_item_id;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Paper colours a new note is drawn from.
pub const NOTE_COLORS: [&str; 4] = ["dusty-pink", "sage", "pastel-teal", "ivory"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StickyNote {
    pub id: String,
    pub text: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StickyNotesData {
    #[serde(default)]
    pub notes: Vec<StickyNote>,
}

impl StickyNotesData {
    pub fn add<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<&StickyNote> {
        let text = non_empty(text)?;
        let color = NOTE_COLORS.choose(rng).copied().unwrap_or(NOTE_COLORS[0]);
        self.notes.push(StickyNote {
            id: generate_item_id(now),
            text,
            color: color.to_string(),
            created_at: now,
        });
        self.notes.last()
    }

    /// Replace a note's text. Blank edits are discarded.
    pub fn edit(&mut self, id: &str, text: &str) -> bool {
        let Some(text) = non_empty(text) else {
            return false;
        };
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.text = text;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_picks_a_paper_colour() {
        let mut data = StickyNotesData::default();
        let mut rng = rand::thread_rng();
        let note = data.add(" call the vet ", &mut rng, Utc::now()).unwrap();
        assert_eq!(note.text, "call the vet");
        assert!(NOTE_COLORS.contains(&note.color.as_str()));
        assert!(data.add("", &mut rng, Utc::now()).is_none());
    }

    #[test]
    fn blank_edit_keeps_old_text() {
        let mut data = StickyNotesData::default();
        let mut rng = rand::thread_rng();
        let id = data.add("old", &mut rng, Utc::now()).unwrap().id.clone();
        assert!(!data.edit(&id, "  "));
        assert!(data.edit(&id, " new "));
        assert_eq!(data.notes[0].text, "new");
        assert!(data.remove(&id));
        assert!(data.notes.is_empty());
    }
}
