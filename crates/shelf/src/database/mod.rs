//! Local SQLite storage for the shelf.
//!
//! All papers live in a single `papers` table. A [`Database`] owns the one
//! connection to it and is meant to be opened once at startup and passed to
//! whatever needs it. Reads and writes are expressed as instructions
//! implementing [`DatabaseInstruction`]:
//!
//! ```no_run
//! use shelf::{
//!   database::{Add, CountByState, Database, InsertOutcome, SetImportance, ToggleState},
//!   paper::{Importance, Paper},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("papers.db").await?;
//!
//! let paper = Paper::new("Attention Is All You Need", "The dominant...", "1706.03762");
//! if let InsertOutcome::Stored(id) = Add::new(paper).execute(&mut db).await? {
//!   ToggleState::new(id).execute(&mut db).await?;
//!   SetImportance::new(id, Importance::High).execute(&mut db).await?;
//! }
//!
//! let (unread, read) = CountByState.execute(&mut db).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Every instruction runs its SQL in one closure on the connection's
//! dedicated thread. Instructions that read before they write (duplicate
//! check on insert, toggling, importance updates) also hold an `IMMEDIATE`
//! transaction across the read and the write, which keeps other processes
//! sharing the file from interleaving with them.

use rusqlite::{
  types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
  OptionalExtension, ToSql,
};
use tokio_rusqlite::Connection;

use super::*;

pub mod instruction;
#[cfg(test)] mod tests;

pub use self::instruction::*;

/// Columns selected whenever a full [`Paper`] is read back, in the order
/// [`paper_from_row`] expects them.
pub(crate) const PAPER_COLUMNS: &str =
  "id, title, abstract, pdf_url, state, importance, date_submitted";

/// Columns that were added after the table was first introduced, with the
/// definition used to add them to an older table.
const COLUMN_MIGRATIONS: &[(&str, &str)] = &[
  (
    "importance",
    "TEXT NOT NULL DEFAULT 'Medium' CHECK (importance IN ('Low', 'Medium', 'High'))",
  ),
  ("date_submitted", "TEXT"),
];

/// Handle to the shelf's SQLite database.
pub struct Database {
  /// Async SQLite connection handle
  conn: Connection,
  /// File the connection was opened on
  path: PathBuf,
}

impl Database {
  /// Opens an existing database or creates a new one at the specified path.
  ///
  /// This method will:
  /// 1. Create missing parent directories and the database file
  /// 2. Create the `papers` table if it does not exist yet
  /// 3. Add any columns an older `papers` table is missing
  ///
  /// Steps 2 and 3 are idempotent, so reopening a database is harmless.
  ///
  /// ```no_run
  /// # use shelf::database::Database;
  /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// let db = Database::open(Database::default_path()).await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&path).await?;
    let added = conn
      .call(|conn| {
        conn.execute_batch(include_str!(concat!(
          env!("CARGO_MANIFEST_DIR"),
          "/migrations/init.sql"
        )))?;
        Ok(migrate(conn)?)
      })
      .await?;

    for column in added {
      info!("Migrated papers table: added column `{column}`");
    }
    debug!("Opened database at {}", path.display());
    Ok(Self { conn, path })
  }

  /// Returns the default path for the database file.
  ///
  /// - On Unix: `~/.local/share/shelf/shelf.db`
  /// - On macOS: `~/Library/Application Support/shelf/shelf.db`
  /// - On Windows: `%APPDATA%\shelf\shelf.db`
  /// - Fallback: `./shelf/shelf.db`
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("shelf").join("shelf.db")
  }

  /// The file this database was opened from.
  pub fn path(&self) -> &Path { &self.path }

  /// Every stored paper, in insertion order.
  pub(crate) async fn papers(&self) -> Result<Vec<Paper>> {
    let papers = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare_cached(&format!("SELECT {PAPER_COLUMNS} FROM papers ORDER BY id"))?;
        let papers = stmt.query_map([], paper_from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(papers)
      })
      .await?;
    trace!("Loaded {} papers", papers.len());
    Ok(papers)
  }
}

/// Adds the columns from [`COLUMN_MIGRATIONS`] that the `papers` table lacks.
///
/// Returns the names of the columns it added. Existing rows receive each
/// column's default, so a pre-importance table ends up with every paper at
/// `Medium`.
fn migrate(conn: &mut rusqlite::Connection) -> rusqlite::Result<Vec<&'static str>> {
  let tx = conn.transaction()?;
  let existing = {
    let mut stmt = tx.prepare("SELECT name FROM pragma_table_info('papers')")?;
    let names = stmt.query_map([], |row| row.get::<_, String>(0))?;
    names.collect::<rusqlite::Result<Vec<_>>>()?
  };

  let mut added = Vec::new();
  for (column, definition) in COLUMN_MIGRATIONS {
    if !existing.iter().any(|name| name == column) {
      tx.execute_batch(&format!("ALTER TABLE papers ADD COLUMN {column} {definition}"))?;
      added.push(*column);
    }
  }
  tx.commit()?;
  Ok(added)
}

/// Maps a row selected with [`PAPER_COLUMNS`] to a [`Paper`].
pub(crate) fn paper_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Paper> {
  Ok(Paper {
    id:             Some(row.get(0)?),
    title:          row.get(1)?,
    abstract_text:  row.get(2)?,
    pdf_url:        row.get(3)?,
    state:          row.get(4)?,
    importance:     row.get(5)?,
    date_submitted: row.get(6)?,
  })
}

/// Reads a single paper by id.
pub(crate) fn select_paper(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<Option<Paper>> {
  conn
    .prepare_cached(&format!("SELECT {PAPER_COLUMNS} FROM papers WHERE id = ?1"))?
    .query_row([id], paper_from_row)
    .optional()
}

impl ToSql for State {
  fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> { Ok(self.as_str().into()) }
}

impl FromSql for State {
  fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
    value.as_str()?.parse().map_err(|e: ShelfError| FromSqlError::Other(e.to_string().into()))
  }
}

impl ToSql for Importance {
  fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> { Ok(self.as_str().into()) }
}

impl FromSql for Importance {
  fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
    value.as_str()?.parse().map_err(|e: ShelfError| FromSqlError::Other(e.to_string().into()))
  }
}
