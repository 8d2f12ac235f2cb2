use super::*;

pub mod add;
pub mod clean;
pub mod init;
pub mod query;
pub mod transfer;
pub mod update;

pub use add::*;
pub use clean::clean;
pub use init::*;
pub use query::*;
pub use transfer::*;
pub use update::*;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a configuration file and create the database
  Init(InitOptions),

  /// Fetch a paper from its arXiv link and add it to the shelf
  Add(AddArgs),

  /// Remove a paper by id
  Remove(IdArgs),

  /// Flip a paper between "To Be Read" and "Read"
  Toggle(IdArgs),

  /// Set a paper's importance
  Importance(ImportanceArgs),

  /// Display one paper in full
  Show(IdArgs),

  /// List papers, newest submission first
  List(ListOptions),

  /// Find papers whose title or abstract contains a phrase
  Search(SearchOptions),

  /// Count papers per reading state
  Count,

  /// Load papers from a JSON file
  Import(FileArgs),

  /// Write every paper to a JSON file
  Export(FileArgs),

  /// Removes the entire database after confirmation
  Clean,
}

/// A paper picked by its id.
#[derive(Args, Clone)]
pub struct IdArgs {
  /// Id of the paper, as shown by `list`
  pub id: i64,
}

/// A JSON file to read or write.
#[derive(Args, Clone)]
pub struct FileArgs {
  /// Path of the JSON file
  pub file: PathBuf,
}
