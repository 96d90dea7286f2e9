use crate::error::LibraryError;
use crate::inventory::Persisted;
use crate::model::Book;

pub mod add;
pub mod circulation;
pub mod load;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// Records a finished mutation: the success message, then a save error if
    /// persisting it failed.
    fn from_persisted(persisted: Persisted<Book>, success: impl Into<String>) -> Self {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(success));
        if let Some(err) = persisted.write_error {
            result.add_message(save_error_message(&err));
        }
        result.affected_books.push(persisted.value);
        result
    }
}

fn save_error_message(err: &LibraryError) -> CmdMessage {
    let cause = match err {
        LibraryError::WriteFailure { source, .. } => source.to_string(),
        other => other.to_string(),
    };
    CmdMessage::error(format!("Error saving data: {}", cause))
}
