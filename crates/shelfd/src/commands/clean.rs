//! Module for abstracting the "clean" functionality to the [`shelf`] database.

use super::*;

/// Function for the [`Commands::Clean`] in the CLI.
///
/// Deletes the database file together with SQLite's side files (`-wal`,
/// `-shm`, `-journal`). Asks twice unless defaults are accepted.
pub fn clean<I: UserInteraction>(interaction: &I, path: &Path) -> Result<()> {
  if !path.exists() {
    interaction
      .reply(ResponseContent::Warning(&format!("No database found at: {}", path.display())))?;
    return Ok(());
  }

  interaction.reply(ResponseContent::Warning(&format!("Database found at: {}", path.display())))?;
  if !interaction.confirm("Are you sure you want to delete this database?")?
    || !interaction.confirm("Every paper on the shelf will be lost. Really delete?")?
  {
    interaction.reply(ResponseContent::Info("Operation cancelled"))?;
    return Ok(());
  }

  debug!("Removing database: {}", path.display());
  std::fs::remove_file(path)?;

  let pattern = format!("{}-*", glob::Pattern::escape(&path.to_string_lossy()));
  for file in glob::glob(&pattern)?.flatten() {
    trace!("Removing side file: {}", file.display());
    std::fs::remove_file(file)?;
  }
  interaction.reply(ResponseContent::Success("Database files cleaned"))
}
