//! The paper record kept on the shelf.
//!
//! A [`Paper`] carries the metadata scraped from arXiv plus two pieces of
//! reader state: whether it has been read ([`State`]) and how much it matters
//! ([`Importance`]). Both are closed enums, so a record can never hold any
//! other value for them.
//!
//! ```
//! use std::str::FromStr;
//!
//! use shelf::paper::{Importance, Paper, State};
//!
//! let paper = Paper::new("Attention Is All You Need", "The dominant sequence...", "1706.03762")
//!   .with_date_submitted("12 Jun 2017");
//!
//! assert_eq!(paper.state, State::ToBeRead);
//! assert_eq!(paper.importance, Importance::Medium);
//! assert_eq!(paper.pdf_url, "https://arxiv.org/pdf/1706.03762.pdf");
//! assert!(Importance::from_str("Extreme").is_err());
//! ```

use super::*;

/// Format of [`Paper::date_submitted`], e.g. `3 Jan 2024`.
pub const DATE_FORMAT: &str = "%d %b %Y";

/// A single paper on the shelf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
  /// Store-assigned identifier, `None` until the paper has been inserted
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:             Option<i64>,
  /// The paper's full title, also used to detect duplicates
  pub title:          String,
  /// Full abstract text
  #[serde(rename = "abstract")]
  pub abstract_text:  String,
  /// Direct link to the PDF
  pub pdf_url:        String,
  /// Whether the paper has been read
  #[serde(default)]
  pub state:          State,
  /// How important the paper is to the reader
  #[serde(default)]
  pub importance:     Importance,
  /// Submission date as printed on arXiv (`D MMM YYYY`), if it could be found
  #[serde(default)]
  pub date_submitted: Option<String>,
}

/// Reading state of a paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
  /// Not yet read
  #[default]
  #[serde(rename = "To Be Read")]
  ToBeRead,
  /// Already read
  #[serde(rename = "Read")]
  Read,
}

/// How important a paper is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
  /// Low importance
  Low,
  /// Medium importance
  #[default]
  Medium,
  /// High importance
  High,
}

impl Paper {
  /// Creates an unsaved paper for an arXiv identifier.
  ///
  /// The PDF URL is derived from `identifier`; state and importance take
  /// their defaults and the submission date is unknown.
  pub fn new(title: impl Into<String>, abstract_text: impl Into<String>, identifier: &str) -> Self {
    Self {
      title: title.into(),
      abstract_text: abstract_text.into(),
      pdf_url: crate::arxiv::pdf_url(identifier),
      ..Default::default()
    }
  }

  /// Sets the submission date text.
  pub fn with_date_submitted(mut self, date: impl Into<String>) -> Self {
    self.date_submitted = Some(date.into());
    self
  }

  /// Sets the reading state.
  pub fn with_state(mut self, state: State) -> Self {
    self.state = state;
    self
  }

  /// Sets the importance.
  pub fn with_importance(mut self, importance: Importance) -> Self {
    self.importance = importance;
    self
  }

  /// Parses [`Paper::date_submitted`].
  ///
  /// Returns `None` when the date is absent or not in [`DATE_FORMAT`].
  pub fn submitted_on(&self) -> Option<NaiveDate> {
    self
      .date_submitted
      .as_deref()
      .and_then(|date| NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok())
  }

  /// The abstract cut down to at most `max_chars` characters, with `...`
  /// appended when something was cut.
  pub fn abstract_preview(&self, max_chars: usize) -> String {
    if self.abstract_text.chars().count() > max_chars {
      let mut preview: String = self.abstract_text.chars().take(max_chars).collect();
      preview.push_str("...");
      preview
    } else {
      self.abstract_text.clone()
    }
  }

  /// Whether `needle` (already lowercased) occurs in the title or abstract,
  /// ignoring case.
  pub(crate) fn mentions(&self, needle: &str) -> bool {
    self.title.to_lowercase().contains(needle) || self.abstract_text.to_lowercase().contains(needle)
  }
}

impl State {
  /// The other state.
  pub fn toggled(self) -> Self {
    match self {
      Self::ToBeRead => Self::Read,
      Self::Read => Self::ToBeRead,
    }
  }

  /// The label stored in the database and shown to users.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::ToBeRead => "To Be Read",
      Self::Read => "Read",
    }
  }
}

impl Display for State {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for State {
  type Err = ShelfError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "To Be Read" => Ok(Self::ToBeRead),
      "Read" => Ok(Self::Read),
      other => Err(ShelfError::InvalidArgument(format!("unknown state {other:?}"))),
    }
  }
}

impl Importance {
  /// Every importance level, lowest first.
  pub const ALL: [Importance; 3] = [Self::Low, Self::Medium, Self::High];

  /// The label stored in the database and shown to users.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }
}

impl Display for Importance {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Importance {
  type Err = ShelfError;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL.into_iter().find(|level| level.as_str() == s).ok_or_else(|| {
      ShelfError::InvalidArgument(format!("importance must be Low, Medium or High, got {s:?}"))
    })
  }
}
