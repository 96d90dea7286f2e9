use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris", bin_name = "libris", version)]
#[command(about = "Interactive book inventory tracker", long_about = None)]
pub struct Cli {
    /// JSON file backing the inventory [env: LIBRARY_FILE] [default: library.json]
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["libris"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_file_and_verbose() {
        let cli = Cli::try_parse_from(["libris", "-f", "shelf.json", "--verbose"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("shelf.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["libris", "--global"]).is_err());
    }
}
