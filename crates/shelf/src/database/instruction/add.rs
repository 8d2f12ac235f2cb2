//! Inserting papers, with duplicate rejection by title.

use super::*;

/// Result of an [`Add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
  /// The paper was stored under this id
  Stored(i64),
  /// A paper with exactly the same title was already stored; nothing changed
  Duplicate,
}

/// Stores a paper unless one with the same title already exists.
///
/// Titles are compared exactly (case-sensitive). The paper's own `id` is
/// ignored; the store assigns a fresh one.
///
/// # Errors
///
/// [`ShelfError::InvalidArgument`] if the title is blank.
#[derive(Debug, Clone)]
pub struct Add {
  /// The paper to store
  paper: Paper,
}

impl Add {
  /// Creates an insert instruction for `paper`.
  pub fn new(paper: Paper) -> Self { Self { paper } }
}

#[async_trait]
impl DatabaseInstruction for Add {
  type Output = InsertOutcome;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    if self.paper.title.trim().is_empty() {
      return Err(ShelfError::InvalidArgument("a paper needs a title".into()));
    }

    let paper = self.paper.clone();
    let title = paper.title.clone();
    let outcome = db
      .conn
      .call(move |conn| {
        // The duplicate check and the insert share one write lock
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool =
          tx.query_row("SELECT EXISTS(SELECT 1 FROM papers WHERE title = ?1)", [&paper.title], |row| {
            row.get(0)
          })?;
        if exists {
          return Ok(InsertOutcome::Duplicate);
        }

        let id = tx.query_row(
          "INSERT INTO papers (
              title, abstract, pdf_url, state, importance, date_submitted
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
           RETURNING id",
          params![
            paper.title,
            paper.abstract_text,
            paper.pdf_url,
            paper.state,
            paper.importance,
            paper.date_submitted,
          ],
          |row| row.get(0),
        )?;
        tx.commit()?;
        Ok(InsertOutcome::Stored(id))
      })
      .await?;

    match outcome {
      InsertOutcome::Stored(id) => debug!("Stored \"{title}\" with id {id}"),
      InsertOutcome::Duplicate => debug!("\"{title}\" is already stored, skipping"),
    }
    Ok(outcome)
  }
}
