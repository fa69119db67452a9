use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::{Role, TokenClaims};
use crate::error::{ApiError, ApiResult};
use crate::service::config::AuthConfig;

/// HS256 signing and verification of [`TokenClaims`].
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            token_ttl: config.token_ttl,
        }
    }

    /// Mint a token that expires after the configured lifetime.
    pub fn issue(
        &self,
        user_id: Uuid,
        role: Role,
        permissions: Vec<String>,
        token_version: i32,
    ) -> ApiResult<String> {
        let exp = i64::try_from(self.token_ttl.as_secs())
            .ok()
            .and_then(|ttl| Utc::now().timestamp().checked_add(ttl))
            .ok_or_else(|| ApiError::ValidationError("token lifetime is out of range".to_string()))?;
        self.sign(&TokenClaims {
            user_id,
            role,
            permissions,
            token_version,
            exp,
        })
    }

    pub fn sign(&self, claims: &TokenClaims) -> ApiResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| ApiError::InvalidToken(format!("failed to sign token: {e}")))
    }

    /// Verify signature and expiry and return the claims.
    pub fn decode(&self, token: &str) -> ApiResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => ApiError::InvalidToken("token expired".to_string()),
                ErrorKind::InvalidSignature => ApiError::InvalidToken("bad signature".to_string()),
                _ => ApiError::InvalidToken(e.to_string()),
            })
    }
}
