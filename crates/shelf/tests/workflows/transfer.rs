//! Moving a shelf in and out of JSON files.

use super::*;

#[traced_test]
#[tokio::test]
async fn test_import_skips_bad_records() -> TestResult<()> {
  let (mut db, _dir) = create_test_db().await;

  let report = Import::new(fixture("papers.json")).execute(&mut db).await?;
  assert_eq!(report, ImportReport { stored: 3, duplicates: 1, skipped: 3 });

  let papers = List::all().execute(&mut db).await?;
  let titles: Vec<_> = papers.iter().map(|p| p.title.as_str()).collect();
  assert_eq!(titles, vec![
    "Scaling Laws for Neural Language Models",
    "Attention Is All You Need",
    "Deep Residual Learning for Image Recognition",
  ]);

  // Explicit values are kept, missing ones take the defaults
  assert_eq!(papers[1].state, State::Read);
  assert_eq!(papers[1].importance, Importance::High);
  assert_eq!(papers[2].state, State::ToBeRead);
  assert_eq!(papers[2].importance, Importance::Medium);

  // The id in the file is not reused
  assert_ne!(papers[1].id, Some(17));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_import_requires_an_array() -> TestResult<()> {
  let (mut db, dir) = create_test_db().await;
  let path = dir.path().join("object.json");
  std::fs::write(&path, r#"{"title": "Not in an array"}"#)?;

  assert!(matches!(
    Import::new(&path).execute(&mut db).await,
    Err(ShelfError::InvalidArgument(_))
  ));

  std::fs::write(&path, "[{")?;
  assert!(matches!(Import::new(&path).execute(&mut db).await, Err(ShelfError::Json(_))));

  assert!(matches!(
    Import::new(dir.path().join("missing.json")).execute(&mut db).await,
    Err(ShelfError::Io(_))
  ));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_export_then_import() -> TestResult<()> {
  let (mut source, dir) = create_test_db().await;
  Import::new(fixture("papers.json")).execute(&mut source).await?;
  let exported = dir.path().join("export.json");

  assert_eq!(Export::new(&exported).execute(&mut source).await?, 3);

  let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&exported)?)?;
  let records = written.as_array().unwrap();
  assert_eq!(records.len(), 3);
  assert!(records.iter().all(|record| record["id"].is_i64()));

  let (mut target, _target_dir) = create_test_db().await;
  let report = Import::new(&exported).execute(&mut target).await?;
  assert_eq!(report, ImportReport { stored: 3, duplicates: 0, skipped: 0 });

  let before = List::all().execute(&mut source).await?;
  let after = List::all().execute(&mut target).await?;
  let strip_ids = |papers: Vec<Paper>| {
    papers.into_iter().map(|paper| Paper { id: None, ..paper }).collect::<Vec<_>>()
  };
  assert_eq!(strip_ids(before), strip_ids(after));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_export_empty_shelf() -> TestResult<()> {
  let (mut db, dir) = create_test_db().await;
  let path = dir.path().join("empty.json");
  assert_eq!(Export::new(&path).execute(&mut db).await?, 0);
  assert_eq!(std::fs::read_to_string(&path)?, "[]");
  Ok(())
}
