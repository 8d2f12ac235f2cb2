//! In-place updates of a paper's reader state.

use super::*;

/// Flips a paper between `To Be Read` and `Read` and returns the updated paper.
///
/// Applying it twice restores the original state.
///
/// # Errors
///
/// [`ShelfError::NotFound`] if no paper has this id.
#[derive(Debug, Clone, Copy)]
pub struct ToggleState {
  /// Id of the paper to toggle
  id: i64,
}

impl ToggleState {
  /// Creates a toggle instruction for `id`.
  pub fn new(id: i64) -> Self { Self { id } }
}

#[async_trait]
impl DatabaseInstruction for ToggleState {
  type Output = Paper;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let id = self.id;
    let updated = db
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let Some(mut paper) = select_paper(&tx, id)? else {
          return Ok(None);
        };

        paper.state = paper.state.toggled();
        tx.execute("UPDATE papers SET state = ?1 WHERE id = ?2", params![paper.state, id])?;
        tx.commit()?;
        Ok(Some(paper))
      })
      .await?
      .ok_or(ShelfError::NotFound(id))?;

    debug!("Paper {id} is now {}", updated.state);
    Ok(updated)
  }
}

/// Sets a paper's importance and returns the updated paper.
///
/// # Errors
///
/// [`ShelfError::NotFound`] if no paper has this id.
#[derive(Debug, Clone, Copy)]
pub struct SetImportance {
  /// Id of the paper to update
  id:         i64,
  /// The new importance
  importance: Importance,
}

impl SetImportance {
  /// Creates an update instruction for `id`.
  pub fn new(id: i64, importance: Importance) -> Self { Self { id, importance } }

  /// Creates an update instruction from an importance label.
  ///
  /// # Errors
  ///
  /// [`ShelfError::InvalidArgument`] unless `importance` is exactly `Low`,
  /// `Medium` or `High`. Nothing is written in that case.
  ///
  /// ```
  /// # use shelf::{database::SetImportance, error::ShelfError};
  /// assert!(SetImportance::parse(1, "High").is_ok());
  /// assert!(matches!(SetImportance::parse(1, "Extreme"), Err(ShelfError::InvalidArgument(_))));
  /// ```
  pub fn parse(id: i64, importance: &str) -> Result<Self> { Ok(Self::new(id, importance.parse()?)) }
}

#[async_trait]
impl DatabaseInstruction for SetImportance {
  type Output = Paper;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let Self { id, importance } = *self;
    let updated = db
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        if tx.execute("UPDATE papers SET importance = ?1 WHERE id = ?2", params![importance, id])?
          == 0
        {
          return Ok(None);
        }
        let paper = select_paper(&tx, id)?;
        tx.commit()?;
        Ok(paper)
      })
      .await?
      .ok_or(ShelfError::NotFound(id))?;

    debug!("Paper {id} now has {importance} importance");
    Ok(updated)
  }
}
