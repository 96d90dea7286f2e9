use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "library.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable naming the backing file.
pub const DATA_FILE_ENV: &str = "LIBRARY_FILE";
/// Environment variable holding a log spec (e.g. `info`, `libris=debug`).
pub const LOG_LEVEL_ENV: &str = "LIBRARY_LOG";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// JSON file mirroring the inventory
    pub data_file: PathBuf,
    /// flexi_logger spec string
    pub log_level: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LibraryConfig {
    /// Resolves from the process environment. Explicit flags win over the
    /// environment, which wins over defaults.
    pub fn resolve(data_file: Option<PathBuf>, verbose: bool) -> Self {
        Self::resolve_with(data_file, verbose, |key| std::env::var(key).ok())
    }

    pub fn resolve_with<F>(data_file: Option<PathBuf>, verbose: bool, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let data_file = data_file
            .or_else(|| non_empty(DATA_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let log_level = if verbose {
            "debug".to_string()
        } else {
            non_empty(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
        };

        Self {
            data_file,
            log_level,
        }
    }
}
