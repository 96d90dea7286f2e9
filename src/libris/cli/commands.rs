use super::menu::run_menu;
use super::render::write_messages;
use super::setup::Cli;
use clap::Parser;
use libris::api::LibraryApi;
use libris::config::LibraryConfig;
use libris::error::Result;
use libris::logging::init_logging;
use libris::store::fs::JsonFileStore;
use std::io;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = LibraryConfig::resolve(cli.file, cli.verbose);

    // Logger failures are reported, not fatal.
    let _logger = match init_logging(&config.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let (mut api, notice) = LibraryApi::open(JsonFileStore::new(&config.data_file))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_messages(&mut out, &notice.messages)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu(&mut api, &mut input, &mut out)
}
