use super::*;

/// Tests finding settings for a configured guild.
///
/// Expected: Ok(Some) with stored values
#[tokio::test]
async fn finds_existing_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("123456789")
        .cooldown(3)
        .log_channel_id("987654321")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.find_by_guild_id(123456789).await?;

    let settings = settings.expect("settings should exist");
    assert_eq!(settings.guild_id, 123456789);
    assert_eq!(settings.cooldown, 3);
    assert_eq!(settings.log_channel_id, "987654321");

    Ok(())
}

/// Tests finding settings for a guild that was never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_unconfigured() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.find_by_guild_id(123456789).await?;
    assert!(settings.is_none());

    Ok(())
}
