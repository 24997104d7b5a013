use std::path::PathBuf;

use anyhow::Result;

const DEFAULT_STORAGE_DIR: &str = ".resume-builder";

/// Host configuration loaded from environment variables.
///
/// Only the headless host reads this. Document semantics never depend on it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory backing the file store (one `<key>.json` per key).
    pub storage_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            storage_dir: lookup("RESUME_STORAGE_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR)),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}
