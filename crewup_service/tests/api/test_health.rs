use axum_test::TestServer;
use crewup_db_migrator::CREWUP_DB_MIGRATIONS;
use sqlx::PgPool;

use crate::common::test_app;

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_health_endpoint(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "crewup");

    Ok(())
}
