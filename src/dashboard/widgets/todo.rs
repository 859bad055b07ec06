use super::non_empty;
use crate::dashboard::ids::generate_item_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoData {
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub completed: usize,
    pub total: usize,
    /// Rounded completion percentage, `0` for an empty list.
    pub percent: u32,
}

impl TodoData {
    /// Append a task. Blank input is ignored.
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Option<&TodoItem> {
        let text = non_empty(text)?;
        self.items.push(TodoItem {
            id: generate_item_id(now),
            text,
            completed: false,
            created_at: now,
        });
        self.items.last()
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Drop every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    pub fn stats(&self) -> TodoStats {
        let total = self.items.len();
        let completed = self.items.iter().filter(|item| item.completed).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        TodoStats {
            completed,
            total,
            percent,
        }
    }
}
