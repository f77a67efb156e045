use super::*;

/// Tests creating a new blacklist entry.
///
/// Verifies that the repository inserts a record with the given Discord ID,
/// reason, evidence, report count, and acting admin.
///
/// Expected: Ok with entry created
#[tokio::test]
async fn creates_new_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);
    let entry = repo.upsert(param_for(123456789)).await?;

    assert_eq!(entry.discord_id, 123456789);
    assert_eq!(entry.reason, "Scam links");
    assert_eq!(entry.evidence, "https://example.com/evidence");
    assert_eq!(entry.reports, 3);
    assert_eq!(entry.admin_id, 42);

    // Verify the entry exists in the database
    let db_entry = entity::prelude::BlacklistEntry::find()
        .filter(entity::blacklist_entry::Column::DiscordId.eq("123456789"))
        .one(db)
        .await?;
    assert!(db_entry.is_some());

    Ok(())
}

/// Tests that upserting an existing Discord ID replaces the entry.
///
/// Verifies that every mutable field is overwritten with the incoming values,
/// the acting admin is recorded, and no duplicate row is created.
///
/// Expected: Ok with single replaced entry
#[tokio::test]
async fn replaces_existing_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("123456789")
        .reason("Old reason")
        .evidence("https://example.com/old")
        .admin_id("7")
        .reports(2)
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    let entry = repo.upsert(param_for(123456789)).await?;

    assert_eq!(entry.reason, "Scam links");
    assert_eq!(entry.evidence, "https://example.com/evidence");
    assert_eq!(entry.reports, 3);
    assert_eq!(entry.admin_id, 42);

    // Verify only one row exists for the ID
    let count = entity::prelude::BlacklistEntry::find()
        .filter(entity::blacklist_entry::Column::DiscordId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that replacing an entry clears fields the caller left empty.
///
/// Verifies that a replace with empty evidence overwrites previously stored
/// evidence instead of merging with it.
///
/// Expected: Ok with evidence cleared
#[tokio::test]
async fn replace_overwrites_evidence_with_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("123456789")
        .evidence("https://example.com/old")
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    let entry = repo
        .upsert(UpsertBlacklistParam {
            evidence: String::new(),
            ..param_for(123456789)
        })
        .await?;

    assert_eq!(entry.evidence, "");

    Ok(())
}

/// Tests that replacing an entry refreshes the date added.
///
/// Verifies that the stored timestamp moves forward when an existing entry is
/// replaced.
///
/// Expected: Ok with date_added refreshed to roughly now
#[tokio::test]
async fn replace_refreshes_date_added() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original_time = chrono::Utc::now() - chrono::Duration::hours(2);
    factory::blacklist_entry::BlacklistEntryFactory::new(db)
        .discord_id("123456789")
        .date_added(original_time)
        .build()
        .await?;

    let repo = BlacklistRepository::new(db);
    let entry = repo.upsert(param_for(123456789)).await?;

    let age = (chrono::Utc::now() - entry.date_added).num_seconds().abs();
    assert!(age < 2, "date_added should have been refreshed");

    Ok(())
}
