use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::LibraryInventory;
use crate::store::BookStore;

pub fn run<S: BookStore>(inventory: &LibraryInventory<S>, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = inventory
        .search_by_title(query)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No books found matching '{}'.",
            query
        )));
    }
    Ok(result.with_listed_books(matches))
}
