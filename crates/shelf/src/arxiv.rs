//! Metadata extraction from arXiv abstract pages.
//!
//! Adding a paper is a three step affair:
//!
//! 1. [`normalize`] checks that a user-supplied link points at arXiv and rewrites it to the
//!    canonical abstract page, `https://arxiv.org/abs/<id>`, whatever variant was given (PDF link,
//!    versioned id, extra query parameters, ...).
//! 2. [`Extractor::fetch`] downloads that page.
//! 3. [`extract`] pulls the title, abstract and submission date out of the HTML.
//!
//! [`extract`] does no I/O at all, so it can be exercised against saved pages:
//!
//! ```
//! use shelf::arxiv;
//!
//! let html = r#"<html><body>
//!   <h1 class="title mathjax"><span class="descriptor">Title:</span>Attention Is All You Need</h1>
//!   <div class="dateline">[Submitted on 12 Jun 2017 (v1)]</div>
//!   <blockquote class="abstract mathjax">
//!     <span class="descriptor">Abstract:</span>The dominant sequence transduction models...
//!   </blockquote>
//! </body></html>"#;
//!
//! let id = arxiv::identifier("https://arxiv.org/pdf/1706.03762v7").unwrap();
//! let paper = arxiv::extract(html, &id).unwrap();
//! assert_eq!(paper.title, "Attention Is All You Need");
//! assert_eq!(paper.date_submitted.as_deref(), Some("12 Jun 2017"));
//! assert_eq!(paper.pdf_url, "https://arxiv.org/pdf/1706.03762.pdf");
//! ```

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::*;

/// Host every accepted URL must end with.
pub const ARXIV_HOST: &str = "arxiv.org";

/// Where canonical abstract and PDF URLs point.
pub const ARXIV_BASE_URL: &str = "https://arxiv.org";

lazy_static! {
  /// New-style arXiv identifier, `DDDD.DDDDD`.
  static ref ARXIV_ID: Regex = Regex::new(r"(\d{4}\.\d{5})").unwrap();
  /// Submission date inside the dateline, e.g. `Submitted on 3 Jan 2024`.
  static ref SUBMITTED_ON: Regex = Regex::new(r"Submitted on (\d{1,2} \w{3} \d{4})").unwrap();

  static ref TITLE: Selector = Selector::parse("h1.title").unwrap();
  static ref ABSTRACT: Selector = Selector::parse("blockquote.abstract").unwrap();
  static ref DATELINE: Selector = Selector::parse("div.dateline").unwrap();
}

/// Extracts the arXiv identifier from a user-supplied URL.
///
/// # Errors
///
/// - [`ShelfError::InvalidSource`] if the URL's host does not end in `arxiv.org`
/// - [`ShelfError::IdentifierNotFound`] if no `DDDD.DDDDD` identifier appears in it
pub fn identifier(raw_url: &str) -> Result<String> {
  let raw_url = raw_url.trim();

  // Bare `arxiv.org/abs/...` is common when pasting, so assume https
  let parsed = if raw_url.contains("://") {
    Url::parse(raw_url)
  } else {
    Url::parse(&format!("https://{raw_url}"))
  }
  .map_err(|_| ShelfError::InvalidSource(raw_url.to_string()))?;

  let host = parsed.host_str().ok_or_else(|| ShelfError::InvalidSource(raw_url.to_string()))?;
  let subdomain = host.strip_suffix(ARXIV_HOST).is_some_and(|rest| rest.ends_with('.'));
  if host != ARXIV_HOST && !subdomain {
    return Err(ShelfError::InvalidSource(host.to_string()));
  }

  ARXIV_ID
    .captures(raw_url)
    .map(|captures| captures[1].to_string())
    .ok_or_else(|| ShelfError::IdentifierNotFound(raw_url.to_string()))
}

/// Rewrites a user-supplied arXiv URL to its canonical abstract page.
///
/// Any path, version suffix or query beyond the identifier is dropped.
///
/// ```
/// # use shelf::arxiv::normalize;
/// assert_eq!(
///   normalize("https://arxiv.org/pdf/2401.12345v2?context=cs").unwrap(),
///   "https://arxiv.org/abs/2401.12345"
/// );
/// ```
pub fn normalize(raw_url: &str) -> Result<String> { identifier(raw_url).map(|id| abs_url(&id)) }

/// Canonical abstract page for an identifier.
pub fn abs_url(identifier: &str) -> String { format!("{ARXIV_BASE_URL}/abs/{identifier}") }

/// Direct PDF link for an identifier.
pub fn pdf_url(identifier: &str) -> String { format!("{ARXIV_BASE_URL}/pdf/{identifier}.pdf") }

/// Builds a [`Paper`] from the HTML of an arXiv abstract page.
///
/// The PDF URL is synthesized from `identifier` rather than scraped. The
/// submission date is optional: when the dateline does not contain a
/// `Submitted on D Mon YYYY` phrase the paper is returned without one.
///
/// # Errors
///
/// Returns [`ShelfError::Extraction`] if the title, abstract or dateline
/// element is missing, or if the title is empty.
pub fn extract(html: &str, identifier: &str) -> Result<Paper> {
  let document = Html::parse_document(html);

  let title = collapse_whitespace(strip_label(&element_text(&document, &TITLE, "title")?, "Title:"));
  if title.is_empty() {
    return Err(ShelfError::Extraction("title is empty".into()));
  }

  let abstract_text =
    strip_label(&element_text(&document, &ABSTRACT, "abstract")?, "Abstract:").to_string();

  let dateline = element_text(&document, &DATELINE, "dateline")?;
  let date_submitted = SUBMITTED_ON.captures(&dateline).map(|captures| captures[1].to_string());
  if date_submitted.is_none() {
    debug!("No submission date in dateline {:?}", dateline.trim());
  }

  Ok(Paper {
    id: None,
    title,
    abstract_text,
    pdf_url: pdf_url(identifier),
    state: State::default(),
    importance: Importance::default(),
    date_submitted,
  })
}

/// Text of the first element matching `selector`.
fn element_text(document: &Html, selector: &Selector, what: &str) -> Result<String> {
  document
    .select(selector)
    .next()
    .map(|element: ElementRef| element.text().collect::<String>())
    .ok_or_else(|| ShelfError::Extraction(format!("no {what} element on page")))
}

/// Trims `text` and drops a leading descriptor such as `Title:`.
fn strip_label<'a>(text: &'a str, label: &str) -> &'a str {
  let text = text.trim();
  text.strip_prefix(label).unwrap_or(text).trim()
}

fn collapse_whitespace(text: &str) -> String { text.split_whitespace().collect::<Vec<_>>().join(" ") }

/// Fetches papers from arXiv.
///
/// Holds one HTTP client, configured with the request timeout and user agent
/// from [`Config`]. Construct it once and hand it to whatever needs to add
/// papers.
#[derive(Debug, Clone)]
pub struct Extractor {
  /// Shared HTTP client
  client:   Client,
  /// Scheme and host abstract pages are fetched from
  base_url: String,
}

impl Extractor {
  /// Builds an extractor from the configured timeout and user agent.
  pub fn new(config: &Config) -> Result<Self> {
    let client =
      Client::builder().timeout(config.request_timeout()).user_agent(&config.user_agent).build()?;
    Ok(Self { client, base_url: ARXIV_BASE_URL.to_string() })
  }

  /// Fetches abstract pages from another host, e.g. a mirror or a test server.
  ///
  /// Only the fetch target changes; stored PDF links still point at arXiv.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// Normalizes `raw_url`, downloads the abstract page and extracts a [`Paper`].
  ///
  /// Each call is a fresh request; nothing is cached. Dropping the returned
  /// future cancels the request.
  ///
  /// # Errors
  ///
  /// Besides the errors of [`identifier`] and [`extract`], fails with
  /// [`ShelfError::Network`] on transport errors (including the timeout) and
  /// [`ShelfError::HttpStatus`] on a non-success response.
  pub async fn fetch(&self, raw_url: &str) -> Result<Paper> {
    let identifier = identifier(raw_url)?;
    let url = format!("{}/abs/{identifier}", self.base_url);

    debug!("Fetching arXiv abstract page: {url}");
    let response = self.client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
      warn!("arXiv responded with {status} for {url}");
      return Err(ShelfError::HttpStatus { url, status });
    }

    let body = response.text().await?;
    trace!("Received {} bytes from {url}", body.len());

    let paper = extract(&body, &identifier)?;
    info!("Extracted \"{}\" from {url}", paper.title);
    Ok(paper)
  }
}
