use super::{decode_books, encode_books, BookStore};
use crate::error::{LibraryError, Result};
use crate::model::Book;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Holds the encoded bytes a file store would have written, nothing touches disk.
pub struct InMemoryStore {
    path: PathBuf,
    contents: Option<Vec<u8>>,
    fail_writes: bool,
    saves: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            path: PathBuf::from("library.json"),
            contents: None,
            fail_writes: false,
            saves: 0,
        }
    }
}

impl InMemoryStore {
    /// A store with nothing written yet; loading it reports a missing file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: &[Book]) -> Self {
        let mut store = Self::new();
        store.contents = encode_books(books).ok();
        store
    }

    /// A store whose "file" holds `raw` verbatim, valid or not.
    pub fn with_raw(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Some(raw.into()),
            ..Self::default()
        }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The last successfully saved bytes.
    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        match &self.contents {
            Some(raw) => decode_books(&self.path, raw),
            None => Err(LibraryError::FileMissing(self.path.clone())),
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_writes {
            return Err(LibraryError::WriteFailure {
                path: self.path.clone(),
                source: io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "simulated write failure",
                ),
            });
        }
        let encoded = encode_books(books).map_err(|source| LibraryError::WriteFailure {
            path: self.path.clone(),
            source,
        })?;
        self.contents = Some(encoded);
        self.saves += 1;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        books: Vec<Book>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                books: Vec::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.books.push(Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    format!("{}", 1000 + i),
                ));
            }
            self.sync()
        }

        pub fn with_available_book(mut self, title: &str, isbn: &str) -> Self {
            self.books.push(Book::new(title, "Some Author", isbn));
            self.sync()
        }

        pub fn with_issued_book(mut self, title: &str, isbn: &str) -> Self {
            let mut book = Book::new(title, "Some Author", isbn);
            book.issue();
            self.books.push(book);
            self.sync()
        }

        fn sync(mut self) -> Self {
            self.store = InMemoryStore::with_books(&self.books);
            self
        }
    }
}
