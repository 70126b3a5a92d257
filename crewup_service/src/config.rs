use anyhow::Context;

/// The deployment environment the binary runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Develop,
    Production,
}

impl Environment {
    /// Reads ENVIRONMENT from the process environment, defaulting to
    /// production when unset or unrecognized.
    pub fn new_or_prod() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("local") => Environment::Local,
            Ok("develop") => Environment::Develop,
            _ => Environment::Production,
        }
    }
}

pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub port: usize,
    pub jwt_audience: String,
    pub jwt_issuer: String,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env(environment: Environment) -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;
        let jwt_audience = std::env::var("JWT_AUDIENCE").context("JWT_AUDIENCE must be provided")?;
        let jwt_issuer = std::env::var("JWT_ISSUER").context("JWT_ISSUER must be provided")?;
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be provided")?;

        Ok(Config {
            environment,
            database_url,
            port,
            jwt_audience,
            jwt_issuer,
            jwt_secret,
        })
    }
}
