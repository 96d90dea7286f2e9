use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::LibraryInventory;
use crate::store::BookStore;

pub fn issue<S: BookStore>(inventory: &mut LibraryInventory<S>, isbn: &str) -> Result<CmdResult> {
    let issued = inventory.issue_by_isbn(isbn)?;
    Ok(CmdResult::from_persisted(issued, "Book Issued Successfully."))
}

pub fn return_book<S: BookStore>(
    inventory: &mut LibraryInventory<S>,
    isbn: &str,
) -> Result<CmdResult> {
    let returned = inventory.return_by_isbn(isbn)?;
    Ok(CmdResult::from_persisted(returned, "Book Returned."))
}
