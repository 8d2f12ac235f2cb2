use super::*;

/// Helper function to set up a test database
async fn setup_test_db() -> (Database, PathBuf, tempfile::TempDir) {
  let dir = tempdir().unwrap();
  let path = dir.path().join("test.db");
  let db = Database::open(&path).await.unwrap();
  (db, path, dir)
}

fn paper(title: &str, date: Option<&str>) -> Paper {
  let paper = Paper::new(title, format!("Abstract of {title}"), "2401.12345");
  match date {
    Some(date) => paper.with_date_submitted(date),
    None => paper,
  }
}

async fn store(db: &mut Database, paper: Paper) -> i64 {
  match Add::new(paper).execute(db).await.unwrap() {
    InsertOutcome::Stored(id) => id,
    InsertOutcome::Duplicate => panic!("unexpected duplicate"),
  }
}

fn titles(papers: &[Paper]) -> Vec<&str> { papers.iter().map(|p| p.title.as_str()).collect() }

#[traced_test]
#[tokio::test]
async fn test_database_creation() {
  let (db, path, _dir) = setup_test_db().await;

  assert!(path.exists());
  assert_eq!(db.path(), path);
}

#[traced_test]
#[tokio::test]
async fn test_open_creates_parent_directories() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("a").join("b").join("shelf.db");
  Database::open(&path).await.unwrap();
  assert!(path.exists());
}

#[test]
fn test_default_path() {
  let path = Database::default_path();

  assert!(path.ends_with("shelf/shelf.db") || path.ends_with("shelf\\shelf.db"));
  assert!(path
    .parent()
    .unwrap()
    .starts_with(dirs::data_dir().unwrap_or_else(|| PathBuf::from("."))));
}

#[traced_test]
#[tokio::test]
async fn test_add_and_get() {
  let (mut db, _path, _dir) = setup_test_db().await;
  let original = paper("Attention Is All You Need", Some("12 Jun 2017"))
    .with_importance(Importance::High)
    .with_state(State::Read);

  let id = store(&mut db, original.clone()).await;
  assert!(id > 0);

  let stored = Get::new(id).execute(&mut db).await.unwrap().expect("paper should exist");
  assert_eq!(stored.id, Some(id));
  assert_eq!(stored, Paper { id: Some(id), ..original });

  assert_eq!(Get::new(id + 1).execute(&mut db).await.unwrap(), None);
}

#[traced_test]
#[tokio::test]
async fn test_duplicate_title_is_rejected() {
  let (mut db, _path, _dir) = setup_test_db().await;

  let first = Paper::new("Same Title", "first abstract", "2401.00001");
  let second = Paper::new("Same Title", "second abstract", "2401.00002");

  let id = store(&mut db, first).await;
  assert_eq!(Add::new(second).execute(&mut db).await.unwrap(), InsertOutcome::Duplicate);

  let papers = List::all().execute(&mut db).await.unwrap();
  assert_eq!(papers.len(), 1);
  assert_eq!(papers[0].id, Some(id));
  assert_eq!(papers[0].abstract_text, "first abstract");

  // Dedupe is case-sensitive
  let shouting = Paper::new("SAME TITLE", "third abstract", "2401.00003");
  assert!(matches!(Add::new(shouting).execute(&mut db).await.unwrap(), InsertOutcome::Stored(_)));
}

#[traced_test]
#[tokio::test]
async fn test_add_rejects_blank_title() {
  let (mut db, _path, _dir) = setup_test_db().await;
  let result = Add::new(Paper::new("   ", "abstract", "2401.12345")).execute(&mut db).await;
  assert!(matches!(result, Err(ShelfError::InvalidArgument(_))));
}

#[traced_test]
#[tokio::test]
async fn test_add_ignores_caller_id() {
  let (mut db, _path, _dir) = setup_test_db().await;
  let mut with_id = paper("Claims an id", None);
  with_id.id = Some(42);

  let id = store(&mut db, with_id).await;
  assert_eq!(id, 1);
}

#[traced_test]
#[tokio::test]
async fn test_toggle_state_is_its_own_inverse() {
  let (mut db, _path, _dir) = setup_test_db().await;
  let id = store(&mut db, paper("Toggled", None)).await;

  let once = ToggleState::new(id).execute(&mut db).await.unwrap();
  assert_eq!(once.state, State::Read);
  assert_eq!(Get::new(id).execute(&mut db).await.unwrap().unwrap().state, State::Read);

  let twice = ToggleState::new(id).execute(&mut db).await.unwrap();
  assert_eq!(twice.state, State::ToBeRead);
  assert_eq!(twice.title, "Toggled");
}

#[traced_test]
#[tokio::test]
async fn test_toggle_state_unknown_id() {
  let (mut db, _path, _dir) = setup_test_db().await;
  assert!(matches!(
    ToggleState::new(7).execute(&mut db).await,
    Err(ShelfError::NotFound(7))
  ));
}

#[traced_test]
#[tokio::test]
async fn test_set_importance() {
  let (mut db, _path, _dir) = setup_test_db().await;
  let id = store(&mut db, paper("Important", None)).await;

  let updated = SetImportance::parse(id, "High").unwrap().execute(&mut db).await.unwrap();
  assert_eq!(updated.importance, Importance::High);
  assert_eq!(updated.id, Some(id));

  assert!(matches!(SetImportance::parse(id, "Extreme"), Err(ShelfError::InvalidArgument(_))));
  let stored = Get::new(id).execute(&mut db).await.unwrap().unwrap();
  assert_eq!(stored.importance, Importance::High);

  assert!(matches!(
    SetImportance::new(id + 1, Importance::Low).execute(&mut db).await,
    Err(ShelfError::NotFound(_))
  ));
}

#[traced_test]
#[tokio::test]
async fn test_remove() {
  let (mut db, _path, _dir) = setup_test_db().await;
  let keep = store(&mut db, paper("Keep", None)).await;
  let gone = store(&mut db, paper("Gone", None)).await;

  assert!(Remove::new(gone).execute(&mut db).await.unwrap());
  assert_eq!(Get::new(gone).execute(&mut db).await.unwrap(), None);

  // Unknown ids are accepted and change nothing
  assert!(!Remove::new(gone).execute(&mut db).await.unwrap());
  assert!(!Remove::new(999).execute(&mut db).await.unwrap());
  let remaining = List::all().execute(&mut db).await.unwrap();
  assert_eq!(remaining.len(), 1);
  assert_eq!(remaining[0].id, Some(keep));

  // Ids are never reused
  let next = store(&mut db, paper("After removal", None)).await;
  assert!(next > gone);
}

#[traced_test]
#[tokio::test]
async fn test_list_sorts_by_submission_date() {
  let (mut db, _path, _dir) = setup_test_db().await;
  store(&mut db, paper("Undated", None)).await;
  store(&mut db, paper("Older", Some("3 Jan 2024"))).await;
  store(&mut db, paper("Garbled", Some("early 2025"))).await;
  store(&mut db, paper("Newest", Some("15 Mar 2025"))).await;
  store(&mut db, paper("Middle", Some("28 Feb 2024"))).await;

  let papers = List::all().execute(&mut db).await.unwrap();
  assert_eq!(titles(&papers), vec!["Newest", "Middle", "Older", "Undated", "Garbled"]);
}

#[traced_test]
#[tokio::test]
async fn test_list_filters_are_conjunctive() {
  let (mut db, _path, _dir) = setup_test_db().await;
  for (title, state, importance) in [
    ("read-high", State::Read, Importance::High),
    ("read-low", State::Read, Importance::Low),
    ("unread-high", State::ToBeRead, Importance::High),
    ("unread-medium", State::ToBeRead, Importance::Medium),
  ] {
    store(&mut db, paper(title, None).with_state(state).with_importance(importance)).await;
  }

  let read_high = List::parse("read", "High").unwrap().execute(&mut db).await.unwrap();
  assert_eq!(titles(&read_high), vec!["read-high"]);

  let unread = List::parse("to-be-read", "all").unwrap().execute(&mut db).await.unwrap();
  assert_eq!(titles(&unread), vec!["unread-high", "unread-medium"]);

  let high = List::new(StateFilter::All, ImportanceFilter::Only(Importance::High))
    .execute(&mut db)
    .await
    .unwrap();
  assert_eq!(titles(&high), vec!["read-high", "unread-high"]);

  let none = List::parse("to-be-read", "Low").unwrap().execute(&mut db).await.unwrap();
  assert!(none.is_empty());
}

#[test]
fn test_list_rejects_unknown_filters() {
  assert!(matches!(List::parse("skimmed", "all"), Err(ShelfError::InvalidArgument(_))));
  assert!(matches!(List::parse("all", "Extreme"), Err(ShelfError::InvalidArgument(_))));
  assert!(matches!(List::parse("Read", "all"), Err(ShelfError::InvalidArgument(_))));
}

#[traced_test]
#[tokio::test]
async fn test_search() {
  let (mut db, _path, _dir) = setup_test_db().await;
  store(
    &mut db,
    Paper::new(
      "Attention Is All You Need",
      "We propose a new simple network architecture, the Transformer.",
      "1706.03762",
    )
    .with_date_submitted("12 Jun 2017")
    .with_state(State::Read),
  )
  .await;
  store(
    &mut db,
    Paper::new("Transformers in Vision", "A survey.", "2101.01169").with_date_submitted("4 Jan 2021"),
  )
  .await;
  store(&mut db, Paper::new("Deep Residual Learning", "Residual nets.", "1512.03385")).await;

  let hits = Search::new("transformer").execute(&mut db).await.unwrap();
  assert_eq!(titles(&hits), vec!["Transformers in Vision", "Attention Is All You Need"]);

  let hits = Search::new("RESIDUAL").execute(&mut db).await.unwrap();
  assert_eq!(titles(&hits), vec!["Deep Residual Learning"]);

  assert!(Search::new("diffusion").execute(&mut db).await.unwrap().is_empty());
  assert_eq!(Search::new("").execute(&mut db).await.unwrap().len(), 3);
}

#[traced_test]
#[tokio::test]
async fn test_count_by_state() {
  let (mut db, _path, _dir) = setup_test_db().await;
  assert_eq!(CountByState.execute(&mut db).await.unwrap(), (0, 0));

  for i in 0..3 {
    store(&mut db, paper(&format!("unread {i}"), None)).await;
  }
  for i in 0..2 {
    store(&mut db, paper(&format!("read {i}"), None).with_state(State::Read)).await;
  }
  assert_eq!(CountByState.execute(&mut db).await.unwrap(), (3, 2));

  let id = store(&mut db, paper("flipped", None)).await;
  ToggleState::new(id).execute(&mut db).await.unwrap();
  assert_eq!(CountByState.execute(&mut db).await.unwrap(), (3, 3));
}

#[traced_test]
#[tokio::test]
async fn test_migrates_legacy_table() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("legacy.db");
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn
      .execute_batch(
        "CREATE TABLE papers (
           id INTEGER PRIMARY KEY,
           title TEXT,
           abstract TEXT,
           pdf_url TEXT,
           state TEXT
         );
         INSERT INTO papers (title, abstract, pdf_url, state)
           VALUES ('Old Paper', 'From before importance', 'https://arxiv.org/pdf/2301.00001.pdf', 'Read');",
      )
      .unwrap();
  }

  let mut db = Database::open(&path).await.unwrap();
  assert!(logs_contain("added column `importance`"));
  assert!(logs_contain("added column `date_submitted`"));

  let papers = List::all().execute(&mut db).await.unwrap();
  assert_eq!(papers.len(), 1);
  assert_eq!(papers[0].importance, Importance::Medium);
  assert_eq!(papers[0].state, State::Read);
  assert_eq!(papers[0].date_submitted, None);
  assert_eq!(papers[0].abstract_text, "From before importance");

  // New rows can use the added columns
  let id = store(&mut db, paper("New Paper", Some("1 Feb 2024")).with_importance(Importance::Low)).await;
  let toggled = ToggleState::new(id).execute(&mut db).await.unwrap();
  assert_eq!(toggled.state, State::Read);
  let updated = SetImportance::new(1, Importance::High).execute(&mut db).await.unwrap();
  assert_eq!(updated.title, "Old Paper");
  drop(db);

  // Reopening finds nothing left to migrate
  let mut db = Database::open(&path).await.unwrap();
  let papers = List::all().execute(&mut db).await.unwrap();
  assert_eq!(titles(&papers), vec!["New Paper", "Old Paper"]);
}

#[traced_test]
#[tokio::test]
async fn test_reopen_keeps_data() {
  let (mut db, path, _dir) = setup_test_db().await;
  let id = store(&mut db, paper("Persistent", Some("3 Jan 2024"))).await;
  drop(db);

  let mut db = Database::open(&path).await.unwrap();
  let stored = Get::new(id).execute(&mut db).await.unwrap().unwrap();
  assert_eq!(stored.title, "Persistent");
}
