//! A personal reading shelf for arXiv papers.
//!
//! `shelf` is a library for keeping track of papers you intend to read, providing:
//!
//! - Metadata extraction straight from arXiv abstract pages
//! - Local SQLite storage of paper records
//! - Read / unread state and an importance rating per paper
//! - Filtered, date-ordered listings and substring search
//! - JSON import and export of the whole shelf
//!
//! # Getting Started
//!
//! ```no_run
//! use shelf::{
//!   arxiv::Extractor,
//!   database::{Add, Database, InsertOutcome, List, Search},
//!   prelude::*,
//!   Config,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::default();
//!
//!   // Open (or create) the shelf database
//!   let mut db = Database::open(&config.database_path).await?;
//!
//!   // Scrape a paper from its arXiv page
//!   let extractor = Extractor::new(&config)?;
//!   let paper = extractor.fetch("https://arxiv.org/pdf/1706.03762v7").await?;
//!   println!("Title: {}", paper.title);
//!
//!   // Store it, unless a paper with the same title is already shelved
//!   match Add::new(paper).execute(&mut db).await? {
//!     InsertOutcome::Stored(id) => println!("Stored with id {id}"),
//!     InsertOutcome::Duplicate => println!("Already on the shelf"),
//!   }
//!
//!   // Everything still to be read, newest submissions first
//!   let unread = List::parse("to-be-read", "all")?.execute(&mut db).await?;
//!
//!   // Or look something up
//!   let hits = Search::new("attention").execute(&mut db).await?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`paper`]: The paper record and its state / importance enums
//! - [`arxiv`]: URL normalization and abstract-page extraction
//! - [`database`]: The SQLite-backed store and its instructions
//! - [`config`]: On-disk configuration
//! - [`error`]: The error taxonomy shared by everything above
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
  time::Duration,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod arxiv;
pub mod config;
pub mod database;
pub mod error;
pub mod paper;

pub use crate::config::Config;
use crate::{error::*, paper::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use shelf::{
///   database::{Database, ToggleState},
///   prelude::*,
/// };
///
/// async fn example() -> Result<(), ShelfError> {
///   let mut db = Database::open(Database::default_path()).await?;
///   let paper = ToggleState::new(1).execute(&mut db).await?;
///   println!("{} is now {}", paper.title, paper.state);
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{database::DatabaseInstruction, error::ShelfError};
}
