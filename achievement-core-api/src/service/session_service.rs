use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{Principal, Role};
use crate::error::{ApiError, ApiResult};
use crate::service::revocation_ledger::RevocationLedger;
use crate::service::token_codec::TokenCodec;

/// Issues, refreshes and revokes tokens for already authenticated users.
///
/// Password checks belong to the caller; this service only deals with the
/// token version that every token embeds.
pub struct SessionService {
    codec: Arc<TokenCodec>,
    ledger: RevocationLedger,
}

impl SessionService {
    pub fn new(codec: Arc<TokenCodec>, ledger: RevocationLedger) -> Self {
        Self { codec, ledger }
    }

    /// Mint a token carrying the user's current version.
    pub async fn issue(&self, user_id: Uuid, role: Role, permissions: Vec<String>) -> ApiResult<String> {
        let version = self
            .ledger
            .current_version(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("user {user_id}")))?;
        self.codec.issue(user_id, role, permissions, version)
    }

    /// Exchange a valid token for a new one; the old token stops working.
    pub async fn refresh(&self, token: &str) -> ApiResult<String> {
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        let claims = self.codec.decode(token)?;

        let current = self.ledger.current_version(claims.user_id).await?;
        if current != Some(claims.token_version) {
            return Err(ApiError::TokenRevoked);
        }

        let version = self.ledger.increment(claims.user_id).await?;
        info!(user_id = %claims.user_id, token_version = version, "token refreshed");
        self.codec
            .issue(claims.user_id, claims.role, claims.permissions, version)
    }

    /// Revoke every token the principal's user holds.
    pub async fn logout(&self, principal: &Principal) -> ApiResult<()> {
        self.ledger.increment(principal.user_id).await?;
        info!(user_id = %principal.user_id, "user logged out");
        Ok(())
    }
}
