use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::LibraryInventory;
use crate::store::BookStore;

pub fn run<S: BookStore>(
    inventory: &mut LibraryInventory<S>,
    title: &str,
    author: &str,
    isbn: &str,
) -> Result<CmdResult> {
    let added = inventory.add_book(title, author, isbn)?;
    Ok(CmdResult::from_persisted(
        added,
        format!("Success: Added '{}'", title),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::LibraryError;
    use crate::store::memory::InMemoryStore;

    fn inventory(store: InMemoryStore) -> LibraryInventory<InMemoryStore> {
        LibraryInventory::open(store).unwrap().0
    }

    #[test]
    fn reports_added_title() {
        let mut inv = inventory(InMemoryStore::new());
        let result = run(&mut inv, "Harry Potter", "J.K. Rowling", "123").unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Success: Added 'Harry Potter'");
        assert_eq!(
            result.affected_books[0].to_string(),
            "[AVAILABLE] Harry Potter by J.K. Rowling (ISBN: 123)"
        );
    }

    #[test]
    fn duplicate_is_an_error() {
        let mut inv = inventory(InMemoryStore::new());
        run(&mut inv, "A", "x", "1").unwrap();

        let err = run(&mut inv, "B", "y", "1").unwrap_err();
        assert_eq!(err.to_string(), "Book with ISBN 1 already exists.");
        assert!(matches!(err, LibraryError::DuplicateIsbn(_)));
    }

    #[test]
    fn save_failure_is_reported_after_success() {
        let mut inv = inventory(InMemoryStore::new().failing_writes());
        let result = run(&mut inv, "A", "x", "1").unwrap();

        assert!(result.has_errors());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[1].content,
            "Error saving data: simulated write failure"
        );
        assert_eq!(inv.len(), 1);
    }
}
