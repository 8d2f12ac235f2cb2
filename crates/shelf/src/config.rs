//! On-disk configuration.
//!
//! The configuration is a small TOML file, by default at
//! `<config dir>/shelf/config.toml`:
//!
//! ```toml
//! database_path = "/home/me/.local/share/shelf/shelf.db"
//! request_timeout_secs = 30
//! user_agent = "shelf/0.1.0"
//! ```
//!
//! Missing keys fall back to [`Config::default`].

use crate::database::Database;

use super::*;

/// Settings shared by the store and the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// SQLite file holding the shelf
  pub database_path:        PathBuf,
  /// Upper bound on a single arXiv request, in seconds
  pub request_timeout_secs: u64,
  /// `User-Agent` sent to arXiv
  pub user_agent:           String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_path:        Database::default_path(),
      request_timeout_secs: 30,
      user_agent:           concat!("shelf/", env!("CARGO_PKG_VERSION")).to_string(),
    }
  }
}

impl Config {
  /// Default location of the configuration file.
  ///
  /// - On Unix: `~/.config/shelf/config.toml`
  /// - On macOS: `~/Library/Application Support/shelf/config.toml`
  /// - On Windows: `%APPDATA%\shelf\config.toml`
  /// - Fallback: `./shelf/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("shelf").join("config.toml")
  }

  /// Reads a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config = toml::from_str(&content)?;
    debug!("Loaded configuration from {}", path.as_ref().display());
    Ok(config)
  }

  /// Reads the configuration file if there is one, defaults otherwise.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    if path.as_ref().exists() {
      Self::load(path)
    } else {
      trace!("No configuration at {}, using defaults", path.as_ref().display());
      Ok(Self::default())
    }
  }

  /// Writes the configuration, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
  }

  /// Sets the database location.
  pub fn with_database_path(mut self, database_path: impl Into<PathBuf>) -> Self {
    self.database_path = database_path.into();
    self
  }

  /// Sets the request timeout.
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout_secs = timeout.as_secs().max(1);
    self
  }

  /// The request timeout as a [`Duration`].
  pub fn request_timeout(&self) -> Duration { Duration::from_secs(self.request_timeout_secs) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config::default()
      .with_database_path(dir.path().join("papers.db"))
      .with_request_timeout(Duration::from_secs(5));
    config.save(&path).unwrap();

    assert_eq!(Config::load(&path).unwrap(), config);
  }

  #[test]
  fn test_missing_keys_use_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "request_timeout_secs = 3\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
    assert_eq!(config.database_path, Database::default_path());
  }

  #[test]
  fn test_load_or_default() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_invalid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "request_timeout_secs = \"soon\"").unwrap();
    assert!(matches!(Config::load(&path), Err(ShelfError::TomlDe(_))));
  }
}
