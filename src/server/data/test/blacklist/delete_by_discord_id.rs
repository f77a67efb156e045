use super::*;

/// Tests deleting an existing blacklist entry.
///
/// Verifies that the entry is removed and one affected row is reported.
///
/// Expected: Ok(1) with entry gone
#[tokio::test]
async fn deletes_existing_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    let rows = repo.delete_by_discord_id(123456789).await?;
    assert_eq!(rows, 1);

    let remaining = entity::prelude::BlacklistEntry::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests deleting a Discord ID with no entry.
///
/// Verifies that removal is idempotent: deleting an absent ID succeeds with
/// zero rows affected instead of failing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_of_absent_entry_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);
    let rows = repo.delete_by_discord_id(123456789).await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that deleting one entry leaves others untouched.
///
/// Expected: Ok with only the targeted entry removed
#[tokio::test]
async fn delete_only_affects_target_entry() -> Result<(), AppError> {
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
    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("222222222")
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    repo.delete_by_discord_id(111111111).await?;

    let survivor = entity::prelude::BlacklistEntry::find()
        .filter(entity::blacklist_entry::Column::DiscordId.eq("222222222"))
        .one(db)
        .await?;
    assert!(survivor.is_some());

    Ok(())
}
