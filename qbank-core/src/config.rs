//! TOML configuration and .env loading for qbank

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;

/// Environment variable that overrides the configured database path
pub const DATABASE_ENV: &str = "QBANK_DATABASE";

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.qbank/.env
///
/// dotenvy never overwrites variables that are already set.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => debug!("Loaded .env from {}", env_file.display()),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }
}

/// Get the qbank config directory path (~/.qbank)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qbank"))
}

/// qbank TOML configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QbankConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralConfig {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "qbank_core=debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file
    /// Defaults to ~/.qbank/questions.db if not specified
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl QbankConfig {
    /// Load config from TOML files
    ///
    /// Priority order (highest to lowest):
    /// 1. ./qbank.toml (project-specific)
    /// 2. ~/.qbank/config.toml (user defaults)
    /// 3. Built-in defaults
    ///
    /// The first file found wins; files are not merged.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."), config_dir().as_deref())
    }

    /// Load from `<project_dir>/qbank.toml`, then `<user_dir>/config.toml`, then defaults.
    pub fn load_from(project_dir: &Path, user_dir: Option<&Path>) -> Result<Self> {
        let candidates = [
            Some(project_dir.join("qbank.toml")),
            user_dir.map(|dir| dir.join("config.toml")),
        ];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                let config = Self::from_file(&path)?;
                info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a single TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    /// Resolve the database file: `QBANK_DATABASE`, then config, then ~/.qbank/questions.db.
    pub fn database_path(&self) -> Result<PathBuf> {
        self.resolve_database_path(std::env::var(DATABASE_ENV).ok(), config_dir().as_deref())
    }

    /// Same precedence as [`database_path`](Self::database_path) with explicit inputs.
    /// A blank override is ignored.
    pub fn resolve_database_path(
        &self,
        env_override: Option<String>,
        user_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }

        if let Some(path) = &self.database.path {
            return Ok(path.clone());
        }

        let dir = user_dir.context("Could not determine home directory")?;
        Ok(dir.join("questions.db"))
    }
}
