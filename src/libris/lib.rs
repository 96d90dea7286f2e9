//! # Libris Architecture
//!
//! Libris is a small book inventory library with an interactive CLI client on
//! top. The library never touches the terminal; the binary does.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Startup flags, numbered menu, prompts, colored output    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the single inventory value, no global state         │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns inventory outcomes into leveled user messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory (inventory.rs) + Storage (store/)                │
//! │  - Ordered in-memory books, saved after every mutation      │
//! │  - BookStore trait: JsonFileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Contract
//!
//! Every mutation (add, issue, return) changes memory first and then writes the
//! whole list. A failed write is reported but not rolled back. At startup a
//! missing backing file or an undecodable one gives an empty inventory plus a
//! notice; nothing else about loading is forgiven.
//!
//! ## Testing Strategy
//!
//! Command, inventory and API tests run against `InMemoryStore`, which can
//! simulate missing files, corrupt files and failing writes. `JsonFileStore`
//! is tested against temp dirs, and the binary end to end with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI goes through
//! - [`commands`]: per-operation result building
//! - [`inventory`]: the ordered, file-mirrored collection
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Book` and `BookStatus`
//! - [`config`]: backing file and log level resolution
//! - [`logging`]: stderr diagnostic logging
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod store;
