use axum::http::StatusCode;
use axum_test::TestServer;
use crewup_db_migrator::CREWUP_DB_MIGRATIONS;
use profiles::Profile;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{bearer_token, test_app};

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_profile_requires_auth(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    server
        .get("/profile")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .put("/profile")
        .json(&json!({ "display_name": "nope" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_get_profile_creates_lazily(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada = Uuid::now_v7();
    let token = bearer_token(&ada, "ada@crewup.dev");

    let response = server.get("/profile").authorization_bearer(&token).await;
    response.assert_status_ok();

    let profile: Profile = response.json();
    assert_eq!(profile.id, ada);
    // Display name defaults to the email's local part
    assert_eq!(profile.display_name.as_deref(), Some("ada"));
    assert!(profile.headline.is_none());

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_put_profile_roundtrip(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let token = bearer_token(&Uuid::now_v7(), "grace@crewup.dev");

    let response = server
        .put("/profile")
        .authorization_bearer(&token)
        .json(&json!({
            "display_name": "Grace H.",
            "headline": "debugging since 1947",
            "skills": "cobol,rust"
        }))
        .await;
    response.assert_status_ok();

    let profile: Profile = server.get("/profile").authorization_bearer(&token).await.json();
    assert_eq!(profile.display_name.as_deref(), Some("Grace H."));
    assert_eq!(profile.headline.as_deref(), Some("debugging since 1947"));
    assert_eq!(profile.skills.as_deref(), Some("cobol,rust"));
    assert!(profile.bio.is_none());

    Ok(())
}
