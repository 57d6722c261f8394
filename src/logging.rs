//! File logging.
//!
//! Stdout belongs to the terminal UI, so events go to
//! `<data dir>/campus-profile/campus-profile.log`.

use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fallback filter variable when `RUST_LOG` is not set.
pub const LOG_ENV: &str = "CAMPUS_PROFILE_LOG";

pub const LOG_FILE: &str = "campus-profile.log";

/// Directory holding the log file.
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(env!("CARGO_PKG_NAME"))
}

/// Filter directives: `RUST_LOG`, then `CAMPUS_PROFILE_LOG`, then
/// `campus_profile=info`.
pub fn filter_directives() -> String {
    std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Install the global subscriber. Returns the log file path.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE);
    let log_file = std::fs::File::create(&log_path)?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(filter_directives()));

    tracing_subscriber::registry().with(file_layer).try_init()?;
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_filter_precedence() {
        std::env::remove_var("RUST_LOG");
        std::env::remove_var(LOG_ENV);
        assert_eq!(filter_directives(), "campus_profile=info");

        std::env::set_var(LOG_ENV, "campus_profile=debug");
        assert_eq!(filter_directives(), "campus_profile=debug");

        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(filter_directives(), "warn");

        std::env::remove_var("RUST_LOG");
        std::env::remove_var(LOG_ENV);
    }

    #[test]
    fn test_data_dir_is_namespaced() {
        assert!(data_dir().ends_with("campus-profile"));
    }
}
