use std::time::Duration;

use crate::error::{ApiError, ApiResult};

/// Token signing settings injected into the resolver and session service.
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Lifetime of newly issued tokens
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);
    pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    /// Read `JWT_SECRET` and the optional `TOKEN_TTL_SECS`.
    pub fn from_env() -> ApiResult<Self> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ApiError::ValidationError("JWT_SECRET is not set".to_string()))?;
        if jwt_secret.is_empty() {
            return Err(ApiError::ValidationError("JWT_SECRET is empty".to_string()));
        }

        let token_ttl = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => Self::parse_token_ttl(&raw)?,
            Err(_) => Self::DEFAULT_TOKEN_TTL,
        };

        Ok(Self { jwt_secret, token_ttl })
    }
}

impl AuthConfig {
    fn parse_token_ttl(raw: &str) -> ApiResult<Duration> {
        let ttl = raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ApiError::ValidationError(format!("TOKEN_TTL_SECS is not a number: {raw}")))?;
        if ttl.is_zero() || ttl > Self::MAX_TOKEN_TTL {
            return Err(ApiError::ValidationError(format!(
                "TOKEN_TTL_SECS must be between 1 and {}",
                Self::MAX_TOKEN_TTL.as_secs()
            )));
        }
        Ok(ttl)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
