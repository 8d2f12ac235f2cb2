//! Error types for the shelf library.
//!
//! Every failure the extractor or the store can report is a distinct
//! [`ShelfError`] variant, so callers can tell them apart by kind:
//!
//! ```
//! use shelf::{arxiv, error::ShelfError};
//!
//! match arxiv::normalize("https://example.com/abs/2401.12345") {
//!   Err(ShelfError::InvalidSource(host)) => println!("not an arXiv link: {host}"),
//!   Err(ShelfError::IdentifierNotFound(url)) => println!("no paper id in {url}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(url) => println!("fetching {url}"),
//! }
//! ```
//!
//! Note that a duplicate insert is *not* an error; see
//! [`InsertOutcome`](crate::database::InsertOutcome).

use thiserror::Error;

/// Error type alias used for the [`shelf`](crate) crate.
pub type Result<T> = core::result::Result<T, ShelfError>;

/// Errors that can occur when working with the shelf library.
#[derive(Error, Debug)]
pub enum ShelfError {
  /// The URL does not point at arXiv.
  ///
  /// Carries the offending host (or the raw input when no host could be parsed).
  #[error("Not an arXiv URL: {0}")]
  InvalidSource(String),

  /// The URL points at arXiv but contains no `DDDD.DDDDD` paper identifier.
  #[error("No arXiv identifier found in {0}")]
  IdentifierNotFound(String),

  /// The HTTP request failed at the transport level (DNS, TLS, timeout, ...).
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The server answered, but not with a success status.
  #[error("Request to {url} failed with status {status}")]
  HttpStatus {
    /// The URL that was requested
    url:    String,
    /// The status returned by the server
    status: reqwest::StatusCode,
  },

  /// The fetched page lacked an element the extractor relies on.
  #[error("Could not extract paper metadata: {0}")]
  Extraction(String),

  /// No paper with the given id exists.
  #[error("No paper with id {0}")]
  NotFound(i64),

  /// A state, importance or filter value outside its enumerated set.
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// A SQLite operation failed.
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// An async SQLite operation failed.
  #[error(transparent)]
  AsyncSqlite(#[from] tokio_rusqlite::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Reading or writing JSON failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),
}

impl ShelfError {
  /// Whether this error came from talking to the remote server.
  ///
  /// Both transport failures and non-success statuses count.
  pub fn is_network(&self) -> bool { matches!(self, Self::Network(_) | Self::HttpStatus { .. }) }
}
