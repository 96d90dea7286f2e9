//! # Inventory
//!
//! [`LibraryInventory`] owns the ordered list of books and mirrors it to a
//! [`BookStore`] after every mutation.
//!
//! Mutations follow a mutate-then-persist contract: memory changes first, then
//! the whole list is saved. A failed save does not undo the change; it rides
//! along on the returned [`Persisted`] so the caller can report it. The next
//! successful save writes the current state, so the last writer wins.

use crate::error::{LibraryError, Result};
use crate::model::Book;
use crate::store::BookStore;
use log::{debug, info, warn};
use std::io::{self, Write};

pub const EMPTY_NOTICE: &str = " -- Inventory is empty --";

/// How the inventory came to life at startup.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(usize),
    /// No backing file yet; started empty.
    Missing,
    /// Backing file could not be decoded; started empty.
    Corrupt(LibraryError),
}

/// A completed mutation plus the result of persisting it.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub write_error: Option<LibraryError>,
}

impl<T> Persisted<T> {
    pub fn is_saved(&self) -> bool {
        self.write_error.is_none()
    }
}

pub struct LibraryInventory<S: BookStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: BookStore> LibraryInventory<S> {
    /// Loads the inventory from `store`.
    ///
    /// A missing or corrupt backing file yields an empty inventory and the
    /// matching [`LoadOutcome`]. Any other error is returned.
    pub fn open(store: S) -> Result<(Self, LoadOutcome)> {
        let (books, outcome) = match store.load() {
            Ok(books) => {
                let count = books.len();
                (books, LoadOutcome::Loaded(count))
            }
            Err(LibraryError::FileMissing(path)) => {
                warn!(
                    "event=inventory_load module=inventory status=missing path={}",
                    path.display()
                );
                (Vec::new(), LoadOutcome::Missing)
            }
            Err(e @ LibraryError::FileCorrupt { .. }) => {
                warn!("event=inventory_load module=inventory status=corrupt error={}", e);
                (Vec::new(), LoadOutcome::Corrupt(e))
            }
            Err(e) => return Err(e),
        };

        info!(
            "event=inventory_load module=inventory status=ok books={} path={}",
            books.len(),
            store.path().display()
        );
        Ok((Self { store, books }, outcome))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Result<Persisted<Book>> {
        let isbn = isbn.into();
        if self.get_by_isbn(&isbn).is_some() {
            return Err(LibraryError::DuplicateIsbn(isbn));
        }

        let book = Book::new(title, author, isbn);
        debug!("event=book_add module=inventory isbn={}", book.isbn);
        self.books.push(book.clone());
        Ok(self.persist(book))
    }

    /// Case-insensitive substring match on titles, in inventory order.
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&query))
            .collect()
    }

    pub fn get_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    fn get_by_isbn_mut(&mut self, isbn: &str) -> Result<&mut Book> {
        self.books
            .iter_mut()
            .find(|book| book.isbn == isbn)
            .ok_or_else(|| LibraryError::NotFound(isbn.to_string()))
    }

    /// Writes one display line per book, or [`EMPTY_NOTICE`] when there are none.
    pub fn display_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.books.is_empty() {
            writeln!(out, "{}", EMPTY_NOTICE)?;
        }
        for book in &self.books {
            writeln!(out, "{}", book)?;
        }
        Ok(())
    }

    pub fn issue_by_isbn(&mut self, isbn: &str) -> Result<Persisted<Book>> {
        let book = self.get_by_isbn_mut(isbn)?;
        if !book.issue() {
            return Err(LibraryError::AlreadyIssued(isbn.to_string()));
        }
        let book = book.clone();
        debug!("event=book_issue module=inventory isbn={}", isbn);
        Ok(self.persist(book))
    }

    pub fn return_by_isbn(&mut self, isbn: &str) -> Result<Persisted<Book>> {
        let book = self.get_by_isbn_mut(isbn)?;
        book.return_book();
        let book = book.clone();
        debug!("event=book_return module=inventory isbn={}", isbn);
        Ok(self.persist(book))
    }

    /// Writes every book, in order, to the backing store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.books).inspect_err(|e| {
            warn!("event=inventory_save module=inventory status=error error={}", e);
        })
    }

    fn persist<T>(&mut self, value: T) -> Persisted<T> {
        Persisted {
            value,
            write_error: self.save().err(),
        }
    }
}
