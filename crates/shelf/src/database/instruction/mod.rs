//! Database instruction implementations for shelf management.
//!
//! Each operation on the store is a small value implementing
//! [`DatabaseInstruction`]; building the value validates its arguments and
//! executing it runs the SQL.

use rusqlite::{params, TransactionBehavior};

use super::*;

pub mod add;
pub mod query;
pub mod remove;
pub mod transfer;
pub mod update;

pub use self::{add::*, query::*, remove::*, transfer::*, update::*};

/// An operation that can be executed against a [`Database`].
#[async_trait]
pub trait DatabaseInstruction {
  /// What the instruction yields on success
  type Output;

  /// Runs the instruction.
  ///
  /// Takes `&mut Database` so the caller's handle cannot be shared with
  /// another instruction while this one is in flight.
  async fn execute(&self, db: &mut Database) -> Result<Self::Output>;
}
