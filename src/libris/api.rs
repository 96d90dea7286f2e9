//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for any UI.
//! `LibraryApi<S: BookStore>` owns the one [`LibraryInventory`] of the process;
//! there is no global instance. The CLI builds it over a
//! [`JsonFileStore`](crate::store::fs::JsonFileStore), tests over an
//! [`InMemoryStore`](crate::store::memory::InMemoryStore).
//!
//! Methods return `Result<CmdResult>`: domain failures (duplicate ISBN,
//! unknown ISBN, already issued) come back as `Err`, while a failed save after
//! a successful mutation comes back as an error message inside an `Ok`.

use crate::commands;
use crate::error::Result;
use crate::inventory::LibraryInventory;
use crate::model::Book;
use crate::store::BookStore;
use std::io::{self, Write};

pub struct LibraryApi<S: BookStore> {
    inventory: LibraryInventory<S>,
}

impl<S: BookStore> LibraryApi<S> {
    /// Loads the inventory and returns the startup notice alongside the API.
    pub fn open(store: S) -> Result<(Self, commands::CmdResult)> {
        let (inventory, outcome) = LibraryInventory::open(store)?;
        let notice = commands::load::report(&outcome, inventory.store().path());
        Ok((Self { inventory }, notice))
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        isbn: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, title, author, isbn)
    }

    pub fn search_books(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.inventory, query)
    }

    pub fn book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.inventory.get_by_isbn(isbn)
    }

    pub fn issue_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::circulation::issue(&mut self.inventory, isbn)
    }

    pub fn return_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::circulation::return_book(&mut self.inventory, isbn)
    }

    pub fn display_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.inventory.display_all(out)
    }

    pub fn save(&mut self) -> Result<()> {
        self.inventory.save()
    }

    pub fn inventory(&self) -> &LibraryInventory<S> {
        &self.inventory
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
