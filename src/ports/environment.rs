use std::path::PathBuf;

use crate::domain::AppError;

/// Port for reading process-wide configuration.
pub trait Environment {
    /// Value of an environment variable. Empty values are reported as absent.
    fn var(&self, key: &str) -> Option<String>;

    /// The current working directory.
    fn current_dir(&self) -> Result<PathBuf, AppError>;

    /// The user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Whether a user is attached who can answer prompts.
    fn is_interactive(&self) -> bool;
}
