//! The numbered text menu.
//!
//! Generic over `BufRead`/`Write` so the whole loop runs in tests against byte
//! buffers. End of input at any prompt ends the session like option 6.

use super::render::{write_books, write_error, write_messages};
use colored::Colorize;
use libris::api::{CmdResult, LibraryApi};
use libris::error::Result;
use libris::store::BookStore;
use log::debug;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

const MENU: &str = "\n=== LIBRARY MENU ===
1. Add Book
2. List All Books
3. Search by Title
4. Issue Book
5. Return Book
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Issue,
    Return,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Issue),
            "5" => Ok(MenuChoice::Return),
            "6" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid menu choice: {}", other)),
        }
    }
}

pub fn run_menu<S, R, W>(api: &mut LibraryApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(raw) = prompt(input, out, "Enter choice: ")? else {
            return goodbye(out);
        };

        let flow = match raw.parse::<MenuChoice>() {
            Ok(choice) => dispatch(api, choice, input, out)?,
            Err(e) => {
                debug!("event=menu_input module=cli status=invalid error={}", e);
                writeln!(out, "{}", "Invalid command.".red())?;
                ControlFlow::Continue(())
            }
        };

        if flow.is_break() {
            return goodbye(out);
        }
    }
}

fn dispatch<S, R, W>(
    api: &mut LibraryApi<S>,
    choice: MenuChoice,
    input: &mut R,
    out: &mut W,
) -> Result<ControlFlow<()>>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    match choice {
        MenuChoice::Add => {
            let Some(title) = prompt(input, out, "Title: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            let Some(author) = prompt(input, out, "Author: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            let Some(isbn) = prompt(input, out, "ISBN: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            report(out, api.add_book(&title, &author, &isbn))?;
        }
        MenuChoice::List => api.display_all(out)?,
        MenuChoice::Search => {
            let Some(query) = prompt(input, out, "Search Title: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            report(out, api.search_books(&query))?;
        }
        MenuChoice::Issue => {
            let Some(isbn) = prompt(input, out, "Enter ISBN to Issue: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            report(out, api.issue_book(&isbn))?;
        }
        MenuChoice::Return => {
            let Some(isbn) = prompt(input, out, "Enter ISBN to Return: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            report(out, api.return_book(&isbn))?;
        }
        MenuChoice::Exit => return Ok(ControlFlow::Break(())),
    }
    Ok(ControlFlow::Continue(()))
}

/// Prints the label and reads one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report<W: Write>(out: &mut W, result: Result<CmdResult>) -> Result<()> {
    match result {
        Ok(result) => {
            write_books(out, &result.listed_books)?;
            write_messages(out, &result.messages)?;
        }
        Err(e) => {
            debug!("event=menu_action module=cli status=rejected error={}", e);
            write_error(out, &e)?;
        }
    }
    Ok(())
}

fn goodbye<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Goodbye!")?;
    Ok(())
}
