use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use crewup_auth::middleware::decode_jwt::{CrewupAccessToken, JwtValidationArgs};
use crewup_service::{
    api::{self, context::ApiContext},
    config::{Config, Environment},
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use sqlx::PgPool;
use uuid::Uuid;

pub const AUDIENCE: &str = "crewup";
pub const ISSUER: &str = "auth.crewup.test";
pub const JWT_SECRET: &str = "integration_test_secret";

/// Builds the application router against a test database, with JWT validation
/// wired to the fixed test secret.
pub fn test_app(pool: PgPool) -> Router {
    let config = Config {
        environment: Environment::Local,
        database_url: String::new(),
        port: 0,
        jwt_audience: AUDIENCE.to_string(),
        jwt_issuer: ISSUER.to_string(),
        jwt_secret: JWT_SECRET.to_string(),
    };

    let jwt_args = JwtValidationArgs::new(
        AUDIENCE.to_string(),
        ISSUER.to_string(),
        JWT_SECRET.to_string(),
    );

    api::app(ApiContext::init(pool, config, jwt_args))
}

/// Mints a valid access token for the given user, signed with the test secret.
pub fn bearer_token(user_id: &Uuid, email: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = CrewupAccessToken {
        aud: AUDIENCE.to_string(),
        exp: now + 3600,
        iss: ISSUER.to_string(),
        sub: *user_id,
        email: email.to_string(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}
