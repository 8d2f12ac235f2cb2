//! Module for abstracting the "add" functionality to the [`shelf`] database.

use super::*;

/// Arguments that can be used for the [`Commands::Add`]
#[derive(Args, Clone)]
pub struct AddArgs {
  /// Any arXiv link: abstract page, PDF, with or without a version suffix
  pub url: String,
}

/// Function for the [`Commands::Add`] in the CLI.
pub async fn add<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  config: &Config,
  add_args: AddArgs,
) -> Result<()> {
  let extractor = Extractor::new(config)?;
  interaction.reply(ResponseContent::Info(&format!("Fetching paper: {}", add_args.url)))?;
  let paper = extractor.fetch(&add_args.url).await?;

  match Add::new(paper.clone()).execute(db).await? {
    InsertOutcome::Stored(id) => {
      let stored = Paper { id: Some(id), ..paper };
      interaction.reply(ResponseContent::Paper(&stored))?;
      interaction.reply(ResponseContent::Success("Paper added"))?;
    },
    InsertOutcome::Duplicate => {
      interaction.reply(ResponseContent::Warning("Paper already exists in the database"))?;
    },
  }
  Ok(())
}
