use super::non_empty;
use crate::dashboard::ids::generate_item_id;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingEntry {
    pub id: String,
    pub book_title: String,
    pub author: String,
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: u32,
    pub started_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_date: Option<NaiveDate>,
}

impl ReadingEntry {
    pub fn progress(&self) -> u32 {
        if self.total_pages == 0 {
            return 0;
        }
        (self.current_page as f64 / self.total_pages as f64 * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingTrackerData {
    #[serde(default)]
    pub current_books: Vec<ReadingEntry>,
    #[serde(default)]
    pub books_read: u32,
    #[serde(default)]
    pub pages_read: u32,
}

impl ReadingTrackerData {
    /// Start a book. Title and author must be non-blank and the page count
    /// positive.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        total_pages: u32,
        now: DateTime<Utc>,
    ) -> Option<&ReadingEntry> {
        let book_title = non_empty(title)?;
        let author = non_empty(author)?;
        if total_pages == 0 {
            return None;
        }
        self.current_books.push(ReadingEntry {
            id: generate_item_id(now),
            book_title,
            author,
            total_pages,
            current_page: 0,
            started_date: now.date_naive(),
            finished_date: None,
        });
        self.current_books.last()
    }

    pub fn update_progress(&mut self, id: &str, page: i64) -> bool {
        match self.current_books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.current_page = page.clamp(0, book.total_pages as i64) as u32;
                true
            }
            None => false,
        }
    }

    /// Move a book off the shelf, crediting its full page count.
    pub fn finish_book(&mut self, id: &str) -> Option<ReadingEntry> {
        let index = self.current_books.iter().position(|b| b.id == id)?;
        let book = self.current_books.remove(index);
        self.books_read = self.books_read.saturating_add(1);
        self.pages_read = self.pages_read.saturating_add(book.total_pages);
        Some(book)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.current_books.len();
        self.current_books.retain(|b| b.id != id);
        self.current_books.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_and_finish_moves_totals() {
        let mut reading = ReadingTrackerData::default();
        let now = Utc::now();
        assert!(reading.add_book("Dune", " ", 400, now).is_none());
        assert!(reading.add_book("Dune", "Herbert", 0, now).is_none());
        let id = reading.add_book("Dune", "Herbert", 400, now).unwrap().id.clone();
        assert!(reading.update_progress(&id, 1000));
        assert_eq!(reading.current_books[0].current_page, 400);
        assert!(reading.update_progress(&id, -3));
        assert_eq!(reading.current_books[0].progress(), 0);
        assert!(reading.update_progress(&id, 100));
        assert_eq!(reading.current_books[0].progress(), 25);

        let finished = reading.finish_book(&id).unwrap();
        assert_eq!(finished.book_title, "Dune");
        assert_eq!((reading.books_read, reading.pages_read), (1, 400));
        assert!(reading.current_books.is_empty());
        assert!(reading.finish_book(&id).is_none());
    }
}
