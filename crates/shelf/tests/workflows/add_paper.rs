//! From a pasted link to a stored, listed paper.

use super::*;

#[test]
fn test_extract_saved_abstract_page() -> TestResult<()> {
  let id = arxiv::identifier("https://arxiv.org/pdf/1706.03762v7")?;
  let paper = arxiv::extract(&read_fixture("attention.html"), &id)?;

  assert_eq!(paper.title, "Attention Is All You Need");
  assert!(paper.abstract_text.starts_with("The dominant sequence transduction models"));
  assert!(paper.abstract_text.ends_with("dispensing with recurrence and convolutions entirely."));
  assert_eq!(paper.pdf_url, "https://arxiv.org/pdf/1706.03762.pdf");
  assert_eq!(paper.date_submitted.as_deref(), Some("12 Jun 2017"));
  assert_eq!(paper.state, State::ToBeRead);
  assert_eq!(paper.importance, Importance::Medium);
  Ok(())
}

#[test]
fn test_extract_requires_every_element() {
  let page = read_fixture("attention.html");
  for (element, replacement) in [
    ("h1 class=\"title mathjax\"", "h1 class=\"heading\""),
    ("blockquote class=\"abstract mathjax\"", "blockquote class=\"summary\""),
    ("div class=\"dateline\"", "div class=\"history\""),
  ] {
    let broken = page.replace(element, replacement);
    assert!(
      matches!(arxiv::extract(&broken, "1706.03762"), Err(ShelfError::Extraction(_))),
      "removing {element} should fail extraction"
    );
  }
}

#[traced_test]
#[tokio::test]
async fn test_fetch_store_and_toggle() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let page = server
    .mock("GET", "/abs/1706.03762")
    .with_status(200)
    .with_body(read_fixture("attention.html"))
    .expect(2)
    .create_async()
    .await;
  let extractor = Extractor::new(&Config::default())?.with_base_url(server.url());
  let (mut db, _dir) = create_test_db().await;

  let paper = extractor.fetch("https://arxiv.org/abs/1706.03762?context=cs").await?;
  let InsertOutcome::Stored(id) = Add::new(paper).execute(&mut db).await? else {
    panic!("first insert should be stored");
  };

  // Adding the same paper through another link variant is a no-op
  let again = extractor.fetch("arxiv.org/pdf/1706.03762v7").await?;
  assert_eq!(Add::new(again).execute(&mut db).await?, InsertOutcome::Duplicate);
  page.assert_async().await;

  let read = ToggleState::new(id).execute(&mut db).await?;
  assert_eq!(read.state, State::Read);
  assert_eq!(CountByState.execute(&mut db).await?, (0, 1));

  let listed = List::parse("read", "Medium")?.execute(&mut db).await?;
  assert_eq!(listed, vec![read]);

  let found = Search::new("TRANSFORMER").execute(&mut db).await?;
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].id, Some(id));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_rejected_links_never_reach_the_store() -> TestResult<()> {
  let extractor = Extractor::new(&Config::default())?;
  let (mut db, _dir) = create_test_db().await;

  assert!(matches!(
    extractor.fetch("https://example.com/2401.12345").await,
    Err(ShelfError::InvalidSource(_))
  ));
  assert!(matches!(
    extractor.fetch("https://arxiv.org/list/cs.CL/new").await,
    Err(ShelfError::IdentifierNotFound(_))
  ));
  assert!(List::all().execute(&mut db).await?.is_empty());
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_search_ignores_filters() -> TestResult<()> {
  let (mut db, _dir) = create_test_db().await;
  let attention = Paper::new(
    "Attention Is All You Need",
    "We propose a new simple network architecture, the Transformer.",
    "1706.03762",
  )
  .with_state(State::Read)
  .with_importance(Importance::Low);
  Add::new(attention).execute(&mut db).await?;

  // A listing for unread, important papers would hide it...
  assert!(List::parse("to-be-read", "High")?.execute(&mut db).await?.is_empty());
  // ...but search looks at everything
  assert_eq!(Search::new("transformer").execute(&mut db).await?.len(), 1);
  Ok(())
}
