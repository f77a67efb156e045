use test_utils::builder::TestBuilder;

use crate::server::{
    error::AppError,
    middleware::session::{AuthSession, CsrfSession},
    model::discord::{SessionGuild, SessionUser},
};

/// Tests storing and retrieving the authenticated user.
///
/// Expected: get_user returns the stored identity
#[tokio::test]
async fn stores_and_retrieves_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert!(auth_session.get_user().await?.is_none());

    let user = SessionUser {
        id: 123456789,
        username: "TestUser".to_string(),
        avatar: Some("abc123".to_string()),
    };
    auth_session.set_user(&user).await?;

    let stored = auth_session.get_user().await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests storing and retrieving the manageable guild list.
///
/// Expected: get_guilds returns the stored snapshot in order
#[tokio::test]
async fn stores_and_retrieves_guilds() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert!(auth_session.get_guilds().await?.is_none());

    let guilds = vec![
        SessionGuild {
            id: 111111111,
            name: "Guild One".to_string(),
            icon: None,
        },
        SessionGuild {
            id: 222222222,
            name: "Guild Two".to_string(),
            icon: Some("icon2".to_string()),
        },
    ];
    auth_session.set_guilds(&guilds).await?;

    let stored = auth_session.get_guilds().await?;
    assert_eq!(stored, Some(guilds));

    Ok(())
}

/// Tests that destroying the session removes the stored identity.
///
/// Expected: get_user returns None after destroy
#[tokio::test]
async fn destroy_clears_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session
        .set_user(&SessionUser {
            id: 123456789,
            username: "TestUser".to_string(),
            avatar: None,
        })
        .await?;

    auth_session.destroy().await?;

    assert!(auth_session.get_user().await?.is_none());

    Ok(())
}

/// Tests that the CSRF token is single-use.
///
/// Expected: first take returns the token, second take returns None
#[tokio::test]
async fn csrf_token_is_removed_on_take() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let csrf_session = CsrfSession::new(session);
    csrf_session.set_token("state-token".to_string()).await?;

    assert_eq!(
        csrf_session.take_token().await?,
        Some("state-token".to_string())
    );
    assert_eq!(csrf_session.take_token().await?, None);

    Ok(())
}
