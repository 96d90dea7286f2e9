//! # Storage Layer
//!
//! The [`BookStore`] trait is the seam between the inventory and whatever
//! medium holds the backing file. The inventory keeps the records in memory and
//! hands the full ordered list to the store after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, a single JSON file
//! - [`memory::InMemoryStore`]: in-memory storage for testing, can simulate
//!   missing/corrupt files and failing writes
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "title": "Harry Potter",
//!         "author": "J.K. Rowling",
//!         "isbn": "123",
//!         "status": "available"
//!     }
//! ]
//! ```
//!
//! Both backends share [`encode_books`] and [`decode_books`] so the in-memory
//! store sees exactly the bytes the file store would write.

use crate::error::{LibraryError, Result};
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use std::path::Path;

pub mod fs;
pub mod memory;

const INDENT: &[u8] = b"    ";

/// Abstract interface for the inventory's backing storage.
pub trait BookStore {
    /// Read every record, in stored order.
    ///
    /// Returns `FileMissing` when there is nothing stored yet and
    /// `FileCorrupt` when the stored data cannot be decoded.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored records with `books`.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Location of the backing file, used in user-facing notices.
    fn path(&self) -> &Path;
}

/// Serializes records as a JSON array with four-space indentation and a
/// trailing newline.
pub fn encode_books(books: &[Book]) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn decode_books(path: &Path, raw: &[u8]) -> Result<Vec<Book>> {
    serde_json::from_slice(raw).map_err(|source| LibraryError::FileCorrupt {
        path: path.to_path_buf(),
        source,
    })
}
