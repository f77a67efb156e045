use super::*;

/// Tests listing all blacklist entries newest first.
///
/// Verifies that entries come back ordered by date added descending.
///
/// Expected: Ok with newest entry first
#[tokio::test]
async fn returns_entries_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = chrono::Utc::now();
    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("111111111")
        .date_added(now - chrono::Duration::hours(2))
        .build()
        .await?;
    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("333333333")
        .date_added(now)
        .build()
        .await?;
    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("222222222")
        .date_added(now - chrono::Duration::hours(1))
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    let entries = repo.find_all().await?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].discord_id, 333333333);
    assert_eq!(entries[1].discord_id, 222222222);
    assert_eq!(entries[2].discord_id, 111111111);

    Ok(())
}

/// Tests listing with no entries.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);
    let entries = repo.find_all().await?;
    assert!(entries.is_empty());

    Ok(())
}
