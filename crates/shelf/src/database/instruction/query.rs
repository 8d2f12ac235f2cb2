//! Read-only instructions: single lookups, filtered listings, search and counts.
//!
//! Listings are ordered newest submission first. Papers whose submission
//! date is missing or cannot be parsed sort as if submitted at the beginning
//! of time, i.e. last.

use super::*;

/// Orders papers by submission date, newest first, undated papers last.
///
/// The sort is stable, so papers with equal dates keep their relative order.
pub fn sort_by_submission(papers: &mut [Paper]) {
  papers.sort_by(|a, b| b.submitted_on().cmp(&a.submitted_on()));
}

/// Looks up one paper by id, yielding `None` if it does not exist.
#[derive(Debug, Clone, Copy)]
pub struct Get {
  /// Id of the paper to read
  id: i64,
}

impl Get {
  /// Creates a lookup instruction for `id`.
  pub fn new(id: i64) -> Self { Self { id } }
}

#[async_trait]
impl DatabaseInstruction for Get {
  type Output = Option<Paper>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let id = self.id;
    Ok(db.conn.call(move |conn| Ok(select_paper(conn, id)?)).await?)
  }
}

/// Which reading states a [`List`] keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateFilter {
  /// Keep everything
  #[default]
  All,
  /// Keep papers still to be read
  ToBeRead,
  /// Keep papers already read
  Read,
}

impl StateFilter {
  /// Whether `paper` passes this filter.
  pub fn matches(&self, paper: &Paper) -> bool {
    match self {
      Self::All => true,
      Self::ToBeRead => paper.state == State::ToBeRead,
      Self::Read => paper.state == State::Read,
    }
  }
}

impl FromStr for StateFilter {
  type Err = ShelfError;

  /// Parses `all`, `to-be-read` or `read`.
  fn from_str(s: &str) -> Result<Self> {
    match s {
      "all" => Ok(Self::All),
      "to-be-read" => Ok(Self::ToBeRead),
      "read" => Ok(Self::Read),
      other => Err(ShelfError::InvalidArgument(format!(
        "state filter must be all, to-be-read or read, got {other:?}"
      ))),
    }
  }
}

/// Which importance levels a [`List`] keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportanceFilter {
  /// Keep everything
  #[default]
  All,
  /// Keep only papers with this importance
  Only(Importance),
}

impl ImportanceFilter {
  /// Whether `paper` passes this filter.
  pub fn matches(&self, paper: &Paper) -> bool {
    match self {
      Self::All => true,
      Self::Only(importance) => paper.importance == *importance,
    }
  }
}

impl FromStr for ImportanceFilter {
  type Err = ShelfError;

  /// Parses `all`, `Low`, `Medium` or `High`.
  fn from_str(s: &str) -> Result<Self> {
    match s {
      "all" => Ok(Self::All),
      level => level.parse().map(Self::Only).map_err(|_| {
        ShelfError::InvalidArgument(format!(
          "importance filter must be all, Low, Medium or High, got {level:?}"
        ))
      }),
    }
  }
}

/// Lists papers newest first, keeping those that pass both filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct List {
  /// Reading state filter
  state:      StateFilter,
  /// Importance filter
  importance: ImportanceFilter,
}

impl List {
  /// Creates a listing with the given filters.
  pub fn new(state: StateFilter, importance: ImportanceFilter) -> Self { Self { state, importance } }

  /// Lists every paper.
  pub fn all() -> Self { Self::default() }

  /// Creates a listing from filter labels, as they arrive from a user.
  ///
  /// # Errors
  ///
  /// [`ShelfError::InvalidArgument`] if either label is not recognized.
  pub fn parse(state: &str, importance: &str) -> Result<Self> {
    Ok(Self::new(state.parse()?, importance.parse()?))
  }
}

#[async_trait]
impl DatabaseInstruction for List {
  type Output = Vec<Paper>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let mut papers = db.papers().await?;
    sort_by_submission(&mut papers);
    papers.retain(|paper| self.state.matches(paper) && self.importance.matches(paper));
    trace!("{:?} kept {} papers", self, papers.len());
    Ok(papers)
  }
}

/// Finds papers whose title or abstract contains a query, ignoring case.
///
/// Search runs over the whole shelf: it does not take state or importance
/// filters, and results come back in the same newest-first order as
/// [`List`]. An empty query matches every paper.
#[derive(Debug, Clone)]
pub struct Search {
  /// Lowercased query text
  needle: String,
}

impl Search {
  /// Creates a search for `query`.
  pub fn new(query: &str) -> Self { Self { needle: query.to_lowercase() } }
}

#[async_trait]
impl DatabaseInstruction for Search {
  type Output = Vec<Paper>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let mut papers = db.papers().await?;
    sort_by_submission(&mut papers);
    papers.retain(|paper| paper.mentions(&self.needle));
    debug!("Search for {:?} matched {} papers", self.needle, papers.len());
    Ok(papers)
  }
}

/// Counts papers per reading state, as `(to_be_read, read)`.
///
/// Computed from the table on every call.
#[derive(Debug, Clone, Copy)]
pub struct CountByState;

#[async_trait]
impl DatabaseInstruction for CountByState {
  type Output = (usize, usize);

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let counts = db
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare_cached("SELECT state, COUNT(*) FROM papers GROUP BY state")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, State>(0)?, row.get::<_, usize>(1)?)))?;

        let mut counts = (0, 0);
        for row in rows {
          match row? {
            (State::ToBeRead, count) => counts.0 = count,
            (State::Read, count) => counts.1 = count,
          }
        }
        Ok(counts)
      })
      .await?;
    Ok(counts)
  }
}
