use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Circulation state of a book. Serialized as `"available"` / `"issued"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "issued" => Ok(BookStatus::Issued),
            other => Err(format!("Unknown book status: {}", other)),
        }
    }
}

/// A single book record. The ISBN is the unique key within an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Marks the book as issued. Returns `false` (and changes nothing) when
    /// the book is already out.
    pub fn issue(&mut self) -> bool {
        match self.status {
            BookStatus::Available => {
                self.status = BookStatus::Issued;
                true
            }
            BookStatus::Issued => false,
        }
    }

    pub fn return_book(&mut self) {
        self.status = BookStatus::Available;
    }
}

/// `[AVAILABLE] Harry Potter by J.K. Rowling (ISBN: 123)`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} by {} (ISBN: {})",
            self.status.as_str().to_uppercase(),
            self.title,
            self.author,
            self.isbn
        )
    }
}
