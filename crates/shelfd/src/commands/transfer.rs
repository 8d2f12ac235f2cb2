//! JSON import and export of the whole shelf.

use super::*;

/// Function for the [`Commands::Import`] in the CLI.
pub async fn import<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  file_args: FileArgs,
) -> Result<()> {
  let report = Import::new(&file_args.file).execute(db).await?;
  interaction.reply(ResponseContent::Success(&format!(
    "Imported {} papers from {}",
    report.stored,
    file_args.file.display()
  )))?;
  if report.duplicates > 0 {
    interaction.reply(ResponseContent::Info(&format!(
      "{} papers were already on the shelf",
      report.duplicates
    )))?;
  }
  if report.skipped > 0 {
    interaction.reply(ResponseContent::Warning(&format!(
      "{} records were not valid papers and were skipped",
      report.skipped
    )))?;
  }
  Ok(())
}

/// Function for the [`Commands::Export`] in the CLI.
pub async fn export<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  file_args: FileArgs,
) -> Result<()> {
  let written = Export::new(&file_args.file).execute(db).await?;
  interaction.reply(ResponseContent::Success(&format!(
    "Exported {written} papers to {}",
    file_args.file.display()
  )))
}
