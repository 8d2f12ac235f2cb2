//! Command line interface for the shelf paper tracker.
//!
//! This crate provides a CLI for keeping a reading list of arXiv papers using
//! the `shelf` library. It supports:
//! - Adding papers straight from an arXiv link
//! - Marking papers read / unread and rating their importance
//! - Filtered listings and full-text substring search
//! - JSON import and export
//!
//! # Usage
//!
//! ```bash
//! # Set up the configuration and database
//! shelf init
//!
//! # Add a paper from any arXiv link
//! shelf add https://arxiv.org/pdf/1706.03762v7
//!
//! # Everything still to read, highest importance only
//! shelf list --state to-be-read --importance High
//!
//! # Mark paper 3 as read
//! shelf toggle 3
//!
//! # Search titles and abstracts
//! shelf search transformer
//! ```
//!
//! Destructive operations ask for confirmation unless `--accept-defaults` is
//! given. Logging verbosity is raised with `-v`, `-vv`, ...

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use shelf::{arxiv::Extractor, database::*, error::ShelfError, paper::Paper, prelude::*, Config};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Keep track of the arXiv papers you mean to read")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the database file. Overrides the path from the configuration file.
  #[arg(long, short, global = true)]
  path: Option<PathBuf>,

  /// Path to the configuration file. If not specified, uses the default platform-specific
  /// configuration directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// The configuration file in use.
  fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }

  /// Loads the configuration and applies command line overrides.
  fn resolve_config(&self) -> Result<Config> {
    let config = Config::load_or_default(self.config_path())?;
    Ok(match &self.path {
      Some(path) => config.with_database_path(path),
      None => config,
    })
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Runs the parsed command.
///
/// `init` and `clean` manage the database file themselves. Every other command
/// gets a database opened once here.
async fn run(cli: Cli) -> Result<()> {
  let config_path = cli.config_path();
  let config = cli.resolve_config()?;
  trace!("Resolved configuration: {config:?}");
  let interaction = Terminal::new(cli.accept_defaults);

  match cli.command {
    Commands::Init(init_options) => init(&interaction, config, config_path, init_options).await,
    Commands::Clean => clean(&interaction, &config.database_path),
    Commands::Add(add_args) => add(&interaction, &mut open(&config).await?, &config, add_args).await,
    Commands::Remove(id_args) => remove(&interaction, &mut open(&config).await?, id_args).await,
    Commands::Toggle(id_args) => toggle(&interaction, &mut open(&config).await?, id_args).await,
    Commands::Importance(importance_args) =>
      importance(&interaction, &mut open(&config).await?, importance_args).await,
    Commands::Show(id_args) => show(&interaction, &mut open(&config).await?, id_args).await,
    Commands::List(list_options) =>
      list(&interaction, &mut open(&config).await?, list_options).await,
    Commands::Search(search_options) =>
      search(&interaction, &mut open(&config).await?, search_options).await,
    Commands::Count => count(&interaction, &mut open(&config).await?).await,
    Commands::Import(file_args) => import(&interaction, &mut open(&config).await?, file_args).await,
    Commands::Export(file_args) => export(&interaction, &mut open(&config).await?, file_args).await,
  }
}

/// Opens the database the configuration points at.
async fn open(config: &Config) -> Result<Database> {
  let db = Database::open(&config.database_path).await?;
  debug!("Using database at {}", db.path().display());
  Ok(db)
}

/// Entry point for the shelf CLI application
///
/// Parses arguments, sets up logging and runs the requested command. Errors
/// are printed and turn into a non-zero exit status.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  if let Err(e) = run(cli).await {
    eprintln!("{} {e}", style(ERROR_PREFIX).red());
    std::process::exit(1);
  }
}
