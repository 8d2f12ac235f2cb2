//! Read-only commands: showing, listing, searching and counting papers.

use super::*;

/// Options for [`Commands::List`]
#[derive(Args, Clone)]
pub struct ListOptions {
  /// Reading state to keep: all, to-be-read or read
  #[arg(long, default_value = "all")]
  pub state:      String,
  /// Importance to keep: all, Low, Medium or High
  #[arg(long, default_value = "all")]
  pub importance: String,
}

/// Options for [`Commands::Search`]
#[derive(Args, Clone)]
pub struct SearchOptions {
  /// Case-insensitive phrase to look for in titles and abstracts
  pub query: String,
}

/// Function for the [`Commands::Show`] in the CLI.
pub async fn show<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  id_args: IdArgs,
) -> Result<()> {
  let paper = Get::new(id_args.id).execute(db).await?.ok_or(ShelfError::NotFound(id_args.id))?;
  interaction.reply(ResponseContent::Paper(&paper))
}

/// Function for the [`Commands::List`] in the CLI.
///
/// The listing is followed by the per-state totals of the whole shelf.
pub async fn list<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  list_options: ListOptions,
) -> Result<()> {
  let papers = List::parse(&list_options.state, &list_options.importance)?.execute(db).await?;
  interaction.reply(ResponseContent::Papers(&papers))?;
  count(interaction, db).await
}

/// Function for the [`Commands::Search`] in the CLI.
pub async fn search<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  search_options: SearchOptions,
) -> Result<()> {
  let papers = Search::new(&search_options.query).execute(db).await?;
  interaction.reply(ResponseContent::Info(&format!(
    "Found {} papers matching \"{}\"",
    papers.len(),
    search_options.query
  )))?;
  interaction.reply(ResponseContent::Papers(&papers))
}

/// Function for the [`Commands::Count`] in the CLI.
pub async fn count<I: UserInteraction>(interaction: &I, db: &mut Database) -> Result<()> {
  let (to_be_read, read) = CountByState.execute(db).await?;
  interaction.reply(ResponseContent::Counts { to_be_read, read })
}
