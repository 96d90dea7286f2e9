//! # libris binary
//!
//! Thin on purpose: the interactive client lives in `src/libris/cli/`, this file
//! only invokes `cli::run()` and turns a fatal error into exit code 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap startup flags, menu loop, colored rendering         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  libris library (api → commands → inventory → store)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
