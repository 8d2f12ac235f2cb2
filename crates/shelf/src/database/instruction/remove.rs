//! Deleting papers.

use super::*;

/// Deletes the paper with the given id.
///
/// Deleting an id that does not exist is not an error: the instruction
/// yields `false` and leaves the table untouched. It yields `true` when a
/// paper was actually removed.
#[derive(Debug, Clone, Copy)]
pub struct Remove {
  /// Id of the paper to delete
  id: i64,
}

impl Remove {
  /// Creates a delete instruction for `id`.
  pub fn new(id: i64) -> Self { Self { id } }
}

#[async_trait]
impl DatabaseInstruction for Remove {
  type Output = bool;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let id = self.id;
    let removed =
      db.conn.call(move |conn| Ok(conn.execute("DELETE FROM papers WHERE id = ?1", [id])?)).await?;

    if removed == 0 {
      debug!("No paper with id {id} to remove");
    } else {
      debug!("Removed paper {id}");
    }
    Ok(removed > 0)
  }
}
