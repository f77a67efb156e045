use super::*;

/// Tests counting blacklist entries.
///
/// Expected: Ok with the number of stored entries
#[tokio::test]
async fn counts_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .build()
        .await?;
    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .build()
        .await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
