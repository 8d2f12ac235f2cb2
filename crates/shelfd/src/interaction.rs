//! How commands talk to the person at the terminal.
//!
//! Commands never print directly. They hand a [`ResponseContent`] to a
//! [`UserInteraction`], which decides on layout and styling, and ask it for
//! confirmation before anything destructive.

use console::style;
use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Tree branch for all but the last detail line
pub static ITEM_PREFIX: &str = "├─";
/// Tree leaf for the last detail line
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Number of abstract characters shown before truncating
pub const ABSTRACT_PREVIEW_CHARS: usize = 200;

/// Something a command wants shown.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// Full detail of a single paper
  Paper(&'a Paper),
  /// A listing, one detail block per paper
  Papers(&'a [Paper]),
  /// Paper totals per reading state
  Counts {
    /// Papers still to be read
    to_be_read: usize,
    /// Papers already read
    read:       usize,
  },
  /// A completed operation
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
  /// Something the user should notice, not fatal
  Warning(&'a str),
}

/// A channel to the user.
pub trait UserInteraction {
  /// Asks a yes/no question. Defaults to "no".
  fn confirm(&self, message: &str) -> Result<bool>;

  /// Shows `content`.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction on an attached terminal using styled output and prompts.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
  /// Answer every confirmation with "yes" without asking
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

/// Renders the detail lines of one paper.
fn paper_lines(paper: &Paper) -> Vec<String> {
  let submitted = match paper.date_submitted.as_deref() {
    Some(date) => format!("Submitted on: {date}"),
    None => "Submission date unknown".to_string(),
  };
  vec![
    format!("State: {}", style(&paper.state).cyan()),
    format!("Importance: {}", style(&paper.importance).magenta()),
    submitted,
    format!("PDF: {}", style(&paper.pdf_url).blue().underlined()),
    format!("Abstract: {}", style(paper.abstract_preview(ABSTRACT_PREVIEW_CHARS)).dim()),
  ]
}

/// Prints one paper as a small tree under its id and title.
fn print_paper(paper: &Paper) {
  let id = paper.id.map_or_else(|| "-".to_string(), |id| id.to_string());
  println!("{} {}", style(format!("[{id}]")).yellow(), style(&paper.title).white().bold());

  let lines = paper_lines(paper);
  let last = lines.len().saturating_sub(1);
  for (i, line) in lines.iter().enumerate() {
    let prefix = if i == last { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
    println!("  {} {line}", style(prefix).dim());
  }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{}{message}", style(PROMPT_PREFIX).cyan()))
        .default(false)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Paper(paper) => print_paper(paper),
      ResponseContent::Papers(papers) => {
        if papers.is_empty() {
          println!("{} No papers found", style(INFO_PREFIX).blue());
        }
        for paper in papers {
          print_paper(paper);
          println!();
        }
      },
      ResponseContent::Counts { to_be_read, read } => {
        println!("{} To be read: {}", style(INFO_PREFIX).blue(), style(to_be_read).yellow());
        println!("{} Read: {}", style(INFO_PREFIX).blue(), style(read).green());
      },
      ResponseContent::Success(message) => {
        println!("{} {message}", style(SUCCESS_PREFIX).green());
      },
      ResponseContent::Info(message) => println!("{} {message}", style(INFO_PREFIX).blue()),
      ResponseContent::Warning(message) => {
        println!("{} {message}", style(WARNING_PREFIX).yellow());
      },
    }
    Ok(())
  }
}
