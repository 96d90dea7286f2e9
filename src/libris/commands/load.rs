use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::LoadOutcome;
use std::path::Path;

/// Turns the startup load outcome into the notice shown to the user.
pub fn report(outcome: &LoadOutcome, path: &Path) -> CmdResult {
    let message = match outcome {
        LoadOutcome::Loaded(count) => {
            CmdMessage::info(format!("Loaded {} books from storage.", count))
        }
        LoadOutcome::Missing => CmdMessage::warning(format!(
            "WARNING: '{}' not found. Starting with empty inventory.",
            path.display()
        )),
        LoadOutcome::Corrupt(_) => CmdMessage::error(format!(
            "ERROR: '{}' is corrupted. Starting empty.",
            path.display()
        )),
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    result
}
