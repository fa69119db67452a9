use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;

/// Repository contract for the per-user token version counter
///
/// Every issued token embeds the version current at issue time. Bumping the
/// counter invalidates all earlier tokens of that user.
#[async_trait]
pub trait TokenVersionRepository: Send + Sync {
    /// Read the current version
    ///
    /// # Returns
    /// * `Ok(None)` - If the user account does not exist
    async fn current_version(&self, user_id: Uuid) -> StoreResult<Option<i32>>;

    /// Atomically add one to the counter
    ///
    /// # Returns
    /// * `Ok(i32)` - The new version
    /// * `Err(StoreError::NotFound)` - If the user account does not exist
    async fn increment(&self, user_id: Uuid) -> StoreResult<i32>;
}
