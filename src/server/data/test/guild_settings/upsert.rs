use super::*;

/// Tests saving settings for a guild for the first time.
///
/// Expected: Ok with settings row created
#[tokio::test]
async fn creates_settings_on_first_save() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .upsert(UpsertGuildSettingsParam {
            guild_id: 123456789,
            cooldown: 5,
            log_channel_id: "987654321".to_string(),
        })
        .await?;

    assert_eq!(settings.guild_id, 123456789);
    assert_eq!(settings.cooldown, 5);
    assert_eq!(settings.log_channel_id, "987654321");

    Ok(())
}

/// Tests that saving again overwrites both fields.
///
/// Verifies that cooldown and log channel are replaced without creating a
/// duplicate row.
///
/// Expected: Ok with single updated row
#[tokio::test]
async fn overwrites_existing_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("123456789")
        .cooldown(1)
        .log_channel_id("111111111")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .upsert(UpsertGuildSettingsParam {
            guild_id: 123456789,
            cooldown: 10,
            log_channel_id: String::new(),
        })
        .await?;

    assert_eq!(settings.cooldown, 10);
    assert_eq!(settings.log_channel_id, "");

    let count = entity::prelude::GuildSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
