use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: &str, author: &str) -> Self {
        Self {
            text: text.to_string(),
            author: author.to_string(),
        }
    }
}

/// Built-in rotation as `(text, author)`.
pub const QUOTES: &[(&str, &str)] = &[
    (
        "The way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who prepare for it today.",
        "Malcolm X",
    ),
];

fn default_quote() -> Quote {
    let (text, author) = QUOTES[0];
    Quote::new(text, author)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteData {
    #[serde(default = "default_quote")]
    pub current_quote: Quote,
}

impl Default for QuoteData {
    fn default() -> Self {
        Self {
            current_quote: default_quote(),
        }
    }
}

impl QuoteData {
    /// Swap in a random built-in quote other than the current one.
    pub fn next_quote<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Quote {
        let candidates: Vec<&(&str, &str)> = QUOTES
            .iter()
            .filter(|(text, _)| *text != self.current_quote.text)
            .collect();
        if let Some((text, author)) = candidates.choose(rng) {
            self.current_quote = Quote::new(text, author);
        }
        &self.current_quote
    }
}
