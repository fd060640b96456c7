use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Only
/// db_path has a default — the member handle is required for anything
/// beyond `init`, `add-club`, and `status`.
pub struct Config {
    /// Your member handle — the default subject of `visit`, `review`, and
    /// `badges` (RELISH_HANDLE env var).
    pub handle: String,
    pub db_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            handle: env::var("RELISH_HANDLE").unwrap_or_default(),
            db_path: env::var("RELISH_DB_PATH").unwrap_or_else(|_| "./relish.db".to_string()),
        })
    }

    /// Check that the member handle is configured.
    /// Call this before any operation that needs a default member.
    pub fn require_handle(&self) -> Result<()> {
        if self.handle.is_empty() {
            anyhow::bail!(
                "RELISH_HANDLE not set. Add it to your .env file, or pass --member.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
