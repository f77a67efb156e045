use super::*;

/// Tests reading back stats pushed by a bot.
///
/// Verifies that the stored guild ID JSON decodes into the membership set.
///
/// Expected: Ok(Some) with counters and guild memberships
#[tokio::test]
async fn finds_existing_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bot_stats::BotStatsFactory::new(db)
        .bot_id("guardbot")
        .server_count("60+")
        .latency("42ms")
        .guild_ids(vec!["111111111".to_string(), "222222222".to_string()])
        .build()
        .await?;

    let repo = BotStatsRepository::new(db);
    let stats = repo.find_by_bot_id("guardbot").await?;

    let stats = stats.expect("stats should exist");
    assert_eq!(stats.server_count, "60+");
    assert_eq!(stats.latency, "42ms");
    assert!(stats.has_guild(111111111));
    assert!(stats.has_guild(222222222));

    Ok(())
}

/// Tests reading stats for a bot that has never pushed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_before_first_push() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatsRepository::new(db);
    let stats = repo.find_by_bot_id("guardbot").await?;
    assert!(stats.is_none());

    Ok(())
}
