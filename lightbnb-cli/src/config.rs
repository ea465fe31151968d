//! CLI configuration loading
//!
//! Priority order (highest to lowest):
//! 1. `--database-url` flag
//! 2. Environment (`DATABASE_URL`, `LIGHTBNB_MAX_CONNECTIONS`), including
//!    values loaded from `./.env` and `~/.lightbnb/.env`
//! 3. Config file (`--config` or `~/.lightbnb/config.toml` if present)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lightbnb_db::DbConfig;
use tracing::debug;

/// Outcome of loading one .env file.
///
/// Loading happens before tracing is initialized so `RUST_LOG` from a .env
/// file takes effect; call [`DotenvStatus::log`] once tracing is up.
#[derive(Debug)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    Skipped(String),
    Failed { path: PathBuf, error: String },
}

impl DotenvStatus {
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => debug!("Loaded .env from {}", path.display()),
            Self::Skipped(reason) => debug!("No .env loaded from current directory: {}", reason),
            Self::Failed { path, error } => debug!("Failed to load {}: {}", path.display(), error),
        }
    }
}

/// Load environment variables from .env files.
///
/// dotenvy never overwrites variables that are already set, so the current
/// directory wins over ~/.lightbnb/.env, and the real environment wins over both.
pub fn load_dotenv() -> Vec<DotenvStatus> {
    let mut loaded = vec![match dotenvy::dotenv() {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(e) => DotenvStatus::Skipped(e.to_string()),
    }];

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            loaded.push(load_env_file(&env_file));
        }
    }
    loaded
}

fn load_env_file(path: &Path) -> DotenvStatus {
    match dotenvy::from_path(path) {
        Ok(()) => DotenvStatus::Loaded(path.to_path_buf()),
        Err(e) => DotenvStatus::Failed {
            path: path.to_path_buf(),
            error: e.to_string(),
        },
    }
}

/// Get the lightbnb config directory path (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}

/// Resolve database settings from file, environment, and flag.
pub fn resolve(config_path: Option<&Path>, database_url: Option<&str>) -> Result<DbConfig> {
    let config = match config_path {
        Some(path) => DbConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => match config_dir().map(|dir| dir.join("config.toml")) {
            Some(path) if path.exists() => DbConfig::from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            _ => DbConfig::default(),
        },
    };

    let mut config = config
        .with_env()
        .context("Invalid database settings in environment")?;

    if let Some(url) = database_url {
        config.database_url = url.to_owned();
    }

    debug!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "resolved database settings"
    );
    Ok(config)
}
