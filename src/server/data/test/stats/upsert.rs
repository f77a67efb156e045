use super::*;

/// Tests the first stats push for a bot.
///
/// Verifies that a new row is created with counters and guild IDs stored.
///
/// Expected: Ok with stats row created
#[tokio::test]
async fn creates_row_on_first_push() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatsRepository::new(db);
    let stats = repo
        .upsert(UpsertBotStatsParam {
            bot_id: "guardbot".to_string(),
            server_count: "60+".to_string(),
            latency: "42ms".to_string(),
            guild_ids: vec![111111111, 222222222],
        })
        .await?;

    assert_eq!(stats.bot_id, "guardbot");
    assert_eq!(stats.server_count, "60+");
    assert_eq!(stats.latency, "42ms");
    assert!(stats.has_guild(111111111));
    assert!(stats.has_guild(222222222));
    assert!(!stats.has_guild(333333333));

    Ok(())
}

/// Tests that a second push replaces the existing row.
///
/// Verifies that counters and the guild list are overwritten and that
/// exactly one row remains for the bot.
///
/// Expected: Ok with single replaced row
#[tokio::test]
async fn replaces_row_on_subsequent_push() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bot_stats::BotStatsFactory::new(db)
        .bot_id("guardbot")
        .server_count("50+")
        .latency("100ms")
        .guild_ids(vec!["111111111".to_string()])
        .build()
        .await?;

    let repo = BotStatsRepository::new(db);
    let stats = repo
        .upsert(UpsertBotStatsParam {
            bot_id: "guardbot".to_string(),
            server_count: "60+".to_string(),
            latency: "42ms".to_string(),
            guild_ids: vec![222222222],
        })
        .await?;

    assert_eq!(stats.server_count, "60+");
    assert_eq!(stats.latency, "42ms");
    assert!(!stats.has_guild(111111111));
    assert!(stats.has_guild(222222222));

    let count = entity::prelude::BotStats::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that pushes for different bots keep separate rows.
///
/// Expected: Ok with one row per bot ID
#[tokio::test]
async fn keeps_separate_rows_per_bot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatsRepository::new(db);
    repo.upsert(UpsertBotStatsParam {
        bot_id: "guardbot".to_string(),
        server_count: "60+".to_string(),
        latency: "42ms".to_string(),
        guild_ids: vec![],
    })
    .await?;
    repo.upsert(UpsertBotStatsParam {
        bot_id: "otherbot".to_string(),
        server_count: "10+".to_string(),
        latency: "9ms".to_string(),
        guild_ids: vec![],
    })
    .await?;

    let count = entity::prelude::BotStats::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that an empty guild list is stored and read back as empty.
///
/// Expected: Ok with no guild memberships
#[tokio::test]
async fn stores_empty_guild_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatsRepository::new(db);
    let stats = repo
        .upsert(UpsertBotStatsParam {
            bot_id: "guardbot".to_string(),
            server_count: "0+".to_string(),
            latency: "0ms".to_string(),
            guild_ids: vec![],
        })
        .await?;

    assert!(stats.guild_ids.is_empty());

    Ok(())
}
