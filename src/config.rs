use std::{path::PathBuf, time::Duration};

use crate::errors::AppError;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost/project-mongo";
pub const DEFAULT_DATABASE: &str = "project-mongo";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_INDEX_HTML: &str = "static/index.html";
const DEFAULT_HEALTH_CHECK_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mongo_url: String,
    pub port: u16,
    pub reset_db: bool,
    pub index_html: PathBuf,
    pub health_check_interval: Duration,
    pub allowed_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_url = lookup("MONGO_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MONGO_URL.to_string());

        let port = match lookup("PORT").filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::EnvError(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        // Any non-empty value turns reseeding on, "false" and "0" included.
        let reset_db = lookup("RESET_DB").is_some_and(|s| !s.is_empty());

        let index_html = lookup("INDEX_HTML")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_HTML));

        let interval_secs = match lookup("HEALTH_CHECK_INTERVAL_SECS").filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::EnvError(format!(
                        "HEALTH_CHECK_INTERVAL_SECS must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_HEALTH_CHECK_INTERVAL_SECS,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Ok(Config {
            mongo_url,
            port,
            reset_db,
            index_html,
            health_check_interval: Duration::from_secs(interval_secs),
            allowed_origins,
        })
    }

    /// Resolves the root page path once. A missing file is not fatal: `GET /` answers 404.
    pub fn resolve_index_html(&self) -> PathBuf {
        match std::fs::canonicalize(&self.index_html) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(
                    "Index page {} could not be resolved: {}",
                    self.index_html.display(),
                    e
                );
                self.index_html.clone()
            }
        }
    }
}
