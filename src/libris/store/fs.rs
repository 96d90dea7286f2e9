use super::{decode_books, encode_books, BookStore};
use crate::error::{LibraryError, Result};
use crate::model::Book;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keeps the inventory in a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "library.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }

    fn write_atomic(&self, contents: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, contents)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }
        Ok(())
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Book>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LibraryError::FileMissing(self.path.clone()));
            }
            Err(e) => return Err(LibraryError::Io(e)),
        };
        decode_books(&self.path, &raw)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        encode_books(books)
            .and_then(|contents| self.write_atomic(&contents))
            .map_err(|source| LibraryError::WriteFailure {
                path: self.path.clone(),
                source,
            })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
