use super::*;

/// Tests finding an existing entry by Discord ID.
///
/// Expected: Ok(Some) with entry fields converted to domain types
#[tokio::test]
async fn finds_existing_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("123456789")
        .reason("Phishing")
        .admin_id("42")
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    let entry = repo.find_by_discord_id(123456789).await?;

    let entry = entry.expect("entry should exist");
    assert_eq!(entry.discord_id, 123456789);
    assert_eq!(entry.reason, "Phishing");
    assert_eq!(entry.admin_id, 42);

    Ok(())
}

/// Tests finding a Discord ID with no entry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);
    let entry = repo.find_by_discord_id(123456789).await?;
    assert!(entry.is_none());

    Ok(())
}
