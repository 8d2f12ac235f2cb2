//! Errors surfaced by the command line front end.

use thiserror::Error;

use super::*;

/// Result alias for CLI operations.
pub type Result<T> = core::result::Result<T, ShelfdError>;

/// Everything a command can fail with.
#[derive(Error, Debug)]
pub enum ShelfdError {
  /// Failure inside the library
  #[error(transparent)]
  Shelf(#[from] ShelfError),

  /// The terminal prompt could not be shown or read
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// File system failure outside the database
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Malformed glob pattern while collecting database side files
  #[error(transparent)]
  Glob(#[from] glob::PatternError),
}
