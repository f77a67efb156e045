use super::*;

/// Tests fetching the most recent entries with a limit.
///
/// Verifies that only the newest entries are returned, ordered newest first.
///
/// Expected: Ok with the two newest entries
#[tokio::test]
async fn limits_to_newest_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = chrono::Utc::now();
    for (id, hours_ago) in [("111111111", 3), ("222222222", 2), ("333333333", 1)] {
        factory::blacklist_entry::BlacklistEntryFactory::new(db)
            .discord_id(id)
            .date_added(now - chrono::Duration::hours(hours_ago))
            .build()
            .await?;
    }

    let repo = BlacklistRepository::new(db);
    let entries = repo.find_recent(2).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].discord_id, 333333333);
    assert_eq!(entries[1].discord_id, 222222222);

    Ok(())
}

/// Tests fetching recent entries when fewer exist than the limit.
///
/// Expected: Ok with all existing entries
#[tokio::test]
async fn returns_all_when_fewer_than_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("111111111")
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    let entries = repo.find_recent(5).await?;
    assert_eq!(entries.len(), 1);

    Ok(())
}
