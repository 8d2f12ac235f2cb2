//! Commands that change or remove a single paper.

use super::*;

/// Arguments for [`Commands::Importance`]
#[derive(Args, Clone)]
pub struct ImportanceArgs {
  /// Id of the paper, as shown by `list`
  pub id:         i64,
  /// One of Low, Medium or High
  pub importance: String,
}

/// Function for the [`Commands::Remove`] in the CLI.
pub async fn remove<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  id_args: IdArgs,
) -> Result<()> {
  let IdArgs { id } = id_args;
  if !interaction.confirm(&format!("Remove paper {id} from the shelf?"))? {
    interaction.reply(ResponseContent::Info("Operation cancelled"))?;
    return Ok(());
  }

  if Remove::new(id).execute(db).await? {
    interaction.reply(ResponseContent::Success(&format!("Removed paper {id}")))?;
  } else {
    interaction.reply(ResponseContent::Warning(&format!("No paper with id {id}")))?;
  }
  Ok(())
}

/// Function for the [`Commands::Toggle`] in the CLI.
pub async fn toggle<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  id_args: IdArgs,
) -> Result<()> {
  let paper = ToggleState::new(id_args.id).execute(db).await?;
  interaction.reply(ResponseContent::Success(&format!("\"{}\" is now {}", paper.title, paper.state)))?;
  Ok(())
}

/// Function for the [`Commands::Importance`] in the CLI.
pub async fn importance<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  importance_args: ImportanceArgs,
) -> Result<()> {
  let ImportanceArgs { id, importance } = importance_args;
  let paper = SetImportance::parse(id, &importance)?.execute(db).await?;
  interaction.reply(ResponseContent::Success(&format!(
    "\"{}\" now has {} importance",
    paper.title, paper.importance
  )))?;
  Ok(())
}
