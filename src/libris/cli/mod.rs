//! # CLI Layer
//!
//! One possible UI client for libris. This is the only place that reads stdin,
//! writes stdout/stderr, or decides on exit codes.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definition of the startup flags
//! - `commands.rs`: `run()`, which resolves config, starts logging, opens the
//!   API over the JSON file and hands control to the menu
//! - `menu.rs`: the numbered menu loop and per-choice handlers
//! - `render.rs`: turns `CmdResult` messages and books into terminal lines

mod commands;
mod menu;
mod render;
mod setup;

pub use commands::run;
