//! Module for setting up a [`shelf`] environment

use super::*;

/// Options for [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitOptions {
  /// Seconds to wait on arXiv before giving up
  #[arg(long)]
  pub timeout: Option<u64>,
}

/// Function for the [`Commands::Init`] in the CLI.
///
/// Saves `config` to `config_path` and creates the database it points to.
pub async fn init<I: UserInteraction>(
  interaction: &I,
  config: Config,
  config_path: PathBuf,
  init_options: InitOptions,
) -> Result<()> {
  let config = match init_options.timeout {
    Some(secs) => config.with_request_timeout(std::time::Duration::from_secs(secs)),
    None => config,
  };

  if config.database_path.exists()
    && !interaction.confirm(&format!(
      "A database already exists at {}. Keep using it?",
      config.database_path.display()
    ))?
  {
    interaction
      .reply(ResponseContent::Info("Choose a different database location with --path"))?;
    return Ok(());
  }

  config.save(&config_path)?;
  Database::open(&config.database_path).await?;

  interaction.reply(ResponseContent::Success(&format!(
    "Shelf initialized successfully\nConfig path: {}\nDatabase path: {}",
    config_path.display(),
    config.database_path.display(),
  )))?;
  Ok(())
}
