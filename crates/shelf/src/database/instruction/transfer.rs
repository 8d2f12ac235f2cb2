//! Bulk import and export of the shelf as JSON.
//!
//! The file format is a JSON array of paper objects:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Attention Is All You Need",
//!     "abstract": "The dominant sequence transduction models...",
//!     "pdf_url": "https://arxiv.org/pdf/1706.03762.pdf",
//!     "state": "Read",
//!     "importance": "High",
//!     "date_submitted": "12 Jun 2017"
//!   }
//! ]
//! ```
//!
//! On import `id` is ignored, and `state`, `importance` and
//! `date_submitted` may be omitted.

use serde_json::Value;

use super::*;

/// Tally of an [`Import`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
  /// Papers newly stored
  pub stored:     usize,
  /// Papers whose title was already on the shelf
  pub duplicates: usize,
  /// Records that were not valid papers
  pub skipped:    usize,
}

/// Loads papers from a JSON file, inserting each one like [`Add`] does.
///
/// Records that fail validation (unknown state or importance, missing or
/// blank title, not an object at all) are logged and skipped; they do not
/// abort the import.
///
/// # Errors
///
/// Fails if the file cannot be read, is not JSON, or is not a JSON array.
#[derive(Debug, Clone)]
pub struct Import {
  /// JSON file to read
  path: PathBuf,
}

impl Import {
  /// Creates an import from `path`.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

#[async_trait]
impl DatabaseInstruction for Import {
  type Output = ImportReport;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let content = tokio::fs::read_to_string(&self.path).await?;
    let Value::Array(records) = serde_json::from_str::<Value>(&content)? else {
      return Err(ShelfError::InvalidArgument(format!(
        "{} does not contain a JSON array of papers",
        self.path.display()
      )));
    };

    let mut report = ImportReport::default();
    for (index, record) in records.into_iter().enumerate() {
      let mut paper = match serde_json::from_value::<Paper>(record) {
        Ok(paper) => paper,
        Err(e) => {
          warn!("Skipping record {index} of {}: {e}", self.path.display());
          report.skipped += 1;
          continue;
        },
      };
      paper.id = None;

      match Add::new(paper).execute(db).await {
        Ok(InsertOutcome::Stored(_)) => report.stored += 1,
        Ok(InsertOutcome::Duplicate) => report.duplicates += 1,
        Err(ShelfError::InvalidArgument(reason)) => {
          warn!("Skipping record {index} of {}: {reason}", self.path.display());
          report.skipped += 1;
        },
        Err(e) => return Err(e),
      }
    }

    info!(
      "Imported {} papers from {} ({} duplicates, {} skipped)",
      report.stored,
      self.path.display(),
      report.duplicates,
      report.skipped
    );
    Ok(report)
  }
}

/// Writes every paper, ids included, to a pretty-printed JSON file.
///
/// Yields the number of papers written.
#[derive(Debug, Clone)]
pub struct Export {
  /// JSON file to write
  path: PathBuf,
}

impl Export {
  /// Creates an export to `path`.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

#[async_trait]
impl DatabaseInstruction for Export {
  type Output = usize;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let papers = db.papers().await?;
    tokio::fs::write(&self.path, serde_json::to_string_pretty(&papers)?).await?;
    info!("Exported {} papers to {}", papers.len(), self.path.display());
    Ok(papers.len())
  }
}
