//! Application configuration.
//!
//! Values are resolved with priority: config.toml > environment (.env) > default.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== Defaults ====================

/// Server address to bind to
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Questions returned per listing page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Config file read from the working directory
pub const CONFIG_FILE: &str = "config.toml";

// ==================== config.toml ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
  database: Option<DatabaseSection>,
  server: Option<ServerSection>,
  quiz: Option<QuizSection>,
}

#[derive(Debug, Deserialize)]
struct DatabaseSection {
  path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
  addr: Option<String>,
  port: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct QuizSection {
  questions_per_page: Option<u32>,
}

// ==================== Resolved configuration ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub database_path: PathBuf,
  pub server_addr: String,
  pub server_port: u16,
  pub questions_per_page: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_path: PathBuf::from(paths::db_path()),
      server_addr: DEFAULT_SERVER_ADDR.to_string(),
      server_port: DEFAULT_SERVER_PORT,
      questions_per_page: QUESTIONS_PER_PAGE,
    }
  }
}

impl Config {
  /// Get the full server bind address
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.server_addr, self.server_port)
  }
}

/// Load configuration from config.toml, `.env` and the environment
pub fn load() -> Config {
  // Load .env file if present
  let _ = dotenvy::dotenv();

  let file = std::fs::read_to_string(CONFIG_FILE).unwrap_or_default();
  resolve(&file, |key| std::env::var(key).ok())
}

/// Merge config file contents and environment lookups over the defaults
fn resolve(file_contents: &str, env: impl Fn(&str) -> Option<String>) -> Config {
  let file = match toml::from_str::<FileConfig>(file_contents) {
    Ok(file) => file,
    Err(e) => {
      tracing::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e);
      FileConfig::default()
    }
  };

  let mut config = Config::default();

  // Priority 2: environment
  if let Some(path) = env("DATABASE_PATH") {
    config.database_path = PathBuf::from(path);
  }
  if let Some(port) = env("PORT").and_then(|p| p.parse().ok()) {
    config.server_port = port;
  }

  // Priority 1: config.toml
  if let Some(path) = file.database.and_then(|d| d.path) {
    config.database_path = PathBuf::from(path);
  }
  if let Some(server) = file.server {
    if let Some(addr) = server.addr {
      config.server_addr = addr;
    }
    if let Some(port) = server.port {
      config.server_port = port;
    }
  }
  if let Some(per_page) = file.quiz.and_then(|q| q.questions_per_page) {
    if per_page > 0 {
      config.questions_per_page = per_page;
    } else {
      tracing::warn!("quiz.questions_per_page must be positive, keeping {}", QUESTIONS_PER_PAGE);
    }
  }

  tracing::info!("Using database path: {}", config.database_path.display());
  config
}
