use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{error::CrewupAuthError, session::SessionContext};

/// Everything needed to validate an access token issued by the auth service.
#[derive(Clone)]
pub struct JwtValidationArgs {
    audience: String,
    issuer: String,
    jwt_secret: String,
}

impl JwtValidationArgs {
    pub fn new(audience: String, issuer: String, jwt_secret: String) -> Self {
        Self {
            audience,
            issuer,
            jwt_secret,
        }
    }
}

/// The claims of a CrewUp access token.
///
/// This struct is the consumed interface of the session provider: the auth
/// service signs these claims, this crate only verifies them.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct CrewupAccessToken {
    /// The audience of the token
    pub aud: String,
    /// The expiration time of the token
    pub exp: usize,
    /// The issuer of the token
    pub iss: String,
    /// The auth user id of the user
    pub sub: Uuid,
    /// The email of the user
    pub email: String,
}

impl From<CrewupAccessToken> for SessionContext {
    fn from(token: CrewupAccessToken) -> Self {
        SessionContext {
            user_id: token.sub,
            email: token.email,
        }
    }
}

/// Takes in an access token and returns the decoded claims.
pub fn validate_access_token(
    access_token: &str,
    args: &JwtValidationArgs,
) -> Result<CrewupAccessToken, CrewupAuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    validation.leeway = 0;
    validation.set_audience(&[args.audience.as_str()]);
    validation.set_issuer(&[args.issuer.as_str()]);

    // Attempt to decode the token.
    let decoded_jwt: CrewupAccessToken = match decode::<CrewupAccessToken>(
        access_token,
        &DecodingKey::from_secret(args.jwt_secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                return Err(CrewupAuthError::JwtExpired);
            }
            _ => {
                return Err(CrewupAuthError::JwtValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    Ok(decoded_jwt)
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::Context;

    use super::*;

    fn create_test_jwt(
        audience: &str,
        issuer: &str,
        email: &str,
        jwt_secret: &str,
        time: Option<usize>,
    ) -> String {
        // Get current timestamp
        let now = time.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs() as usize
        });

        let claims = CrewupAccessToken {
            aud: audience.to_string(),
            exp: now + 3600, // Token expires in 1 hour
            iss: issuer.to_string(),
            sub: Uuid::parse_str("8c5f1e9a-0b9b-4a84-9d52-bb4b8c5ef001").unwrap(),
            email: email.to_string(),
        };

        jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(jwt_secret.as_ref()),
        )
        .expect("Failed to create test JWT")
    }

    fn test_args() -> JwtValidationArgs {
        JwtValidationArgs::new(
            "test_audience".to_string(),
            "test.crewup.dev".to_string(),
            "super_secret_key".to_string(),
        )
    }

    #[test]
    fn test_validate_access_token() -> anyhow::Result<()> {
        let token = create_test_jwt(
            "test_audience",
            "test.crewup.dev",
            "test@crewup.dev",
            "super_secret_key",
            None,
        );

        let result = validate_access_token(&token, &test_args())?;

        assert_eq!(result.email, "test@crewup.dev");
        assert_eq!(result.aud, "test_audience");

        Ok(())
    }

    #[test]
    fn test_validate_access_token_invalid_audience() -> anyhow::Result<()> {
        let token = create_test_jwt(
            "bad",
            "test.crewup.dev",
            "test@crewup.dev",
            "super_secret_key",
            None,
        );

        let result = validate_access_token(&token, &test_args())
            .err()
            .context("expected error")?;

        assert_eq!(result.to_string(), "jwt validation failed: InvalidAudience");

        Ok(())
    }

    #[test]
    fn test_validate_access_token_invalid_issuer() -> anyhow::Result<()> {
        let token = create_test_jwt(
            "test_audience",
            "bad.crewup.dev",
            "test@crewup.dev",
            "super_secret_key",
            None,
        );

        let result = validate_access_token(&token, &test_args())
            .err()
            .context("expected error")?;

        assert_eq!(result.to_string(), "jwt validation failed: InvalidIssuer");

        Ok(())
    }

    #[test]
    fn test_validate_access_token_wrong_secret() -> anyhow::Result<()> {
        let token = create_test_jwt(
            "test_audience",
            "test.crewup.dev",
            "test@crewup.dev",
            "not_the_secret",
            None,
        );

        let result = validate_access_token(&token, &test_args())
            .err()
            .context("expected error")?;

        assert_eq!(result.to_string(), "jwt validation failed: InvalidSignature");

        Ok(())
    }

    #[test]
    fn test_validate_access_token_expired() -> anyhow::Result<()> {
        let token = create_test_jwt(
            "test_audience",
            "test.crewup.dev",
            "test@crewup.dev",
            "super_secret_key",
            Some(
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap()
                    .as_secs() as usize
                    - 10000,
            ),
        );

        let result = validate_access_token(&token, &test_args())
            .err()
            .context("expected error")?;

        assert_eq!(result.to_string(), "jwt is expired");

        Ok(())
    }
}
