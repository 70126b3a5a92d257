use anyhow::Context;
use crewup_auth::middleware::decode_jwt::JwtValidationArgs;
use crewup_db_migrator::CREWUP_DB_MIGRATIONS;
use crewup_service::{
    api::{self, context::ApiContext},
    config::{Config, Environment},
    entrypoint::Entrypoint,
};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Environment::new_or_prod();
    Entrypoint::new(env).init();

    // Parse our configuration from the environment.
    let config = Config::from_env(env).context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 50),
        Environment::Develop => (1, 10),
        Environment::Local => (1, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    tracing::trace!(
        min_connections,
        max_connections,
        "initialized db connection"
    );

    CREWUP_DB_MIGRATIONS
        .run(&db)
        .await
        .context("could not run database migrations")?;

    tracing::trace!("database migrations are up to date");

    let jwt_args = JwtValidationArgs::new(
        config.jwt_audience.clone(),
        config.jwt_issuer.clone(),
        config.jwt_secret.clone(),
    );

    let api_context = ApiContext::init(db, config, jwt_args);

    api::setup_and_serve(api_context).await?;
    Ok(())
}
