pub mod database;

pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/beans[-dev]/` based on BEANS_ENV.
///
/// Set BEANS_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BEANS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("beans-dev")
    } else {
        base_dir.join("beans")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
