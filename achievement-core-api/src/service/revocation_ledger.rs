use achievement_core_db::repository::TokenVersionRepository;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiResult;

/// Per-user token version counter.
///
/// Bumping the counter on logout or refresh invalidates every token issued
/// before, without keeping a blacklist. Only the identity resolver and the
/// session service hold a ledger.
#[derive(Clone)]
pub struct RevocationLedger {
    versions: Arc<dyn TokenVersionRepository>,
}

impl RevocationLedger {
    pub fn new(versions: Arc<dyn TokenVersionRepository>) -> Self {
        Self { versions }
    }

    /// `None` when the user account no longer exists.
    pub async fn current_version(&self, user_id: Uuid) -> ApiResult<Option<i32>> {
        Ok(self.versions.current_version(user_id).await?)
    }

    /// Invalidate all outstanding tokens of `user_id` and return the new version.
    pub async fn increment(&self, user_id: Uuid) -> ApiResult<i32> {
        let version = self.versions.increment(user_id).await?;
        info!(%user_id, token_version = version, "token version incremented");
        Ok(version)
    }
}
