use colored::Colorize;
use libris::api::{CmdMessage, MessageLevel};
use libris::error::LibraryError;
use libris::model::Book;
use std::io::{self, Write};

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn write_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "{}", book)?;
    }
    Ok(())
}

pub(super) fn write_error<W: Write>(out: &mut W, err: &LibraryError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", err).red())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn messages_render_one_per_line() {
        plain();
        let mut out = Vec::new();
        let messages = vec![
            CmdMessage::success("Book Returned."),
            CmdMessage::error("Error saving data: disk full"),
        ];
        write_messages(&mut out, &messages).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Book Returned.\nError saving data: disk full\n"
        );
    }

    #[test]
    fn books_render_display_strings() {
        plain();
        let mut out = Vec::new();
        write_books(&mut out, &[Book::new("Emma", "Jane Austen", "9")]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[AVAILABLE] Emma by Jane Austen (ISBN: 9)\n"
        );
    }

    #[test]
    fn errors_are_prefixed() {
        plain();
        let mut out = Vec::new();
        write_error(&mut out, &LibraryError::DuplicateIsbn("9".into())).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Book with ISBN 9 already exists.\n"
        );
    }
}
