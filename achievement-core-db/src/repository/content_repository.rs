use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::achievement::{
    AchievementContentModel, AchievementStatus, Attachment, ContentPatch,
};

/// Repository contract for achievement content documents
///
/// Content documents are payload only. They are always reached through the
/// `content_ref` of a reference row and never queried directly by callers.
/// Writes addressed to an unknown `content_ref` fail with
/// `StoreError::NotFound`.
#[async_trait]
pub trait AchievementContentRepository: Send + Sync {
    /// Store a new content document
    ///
    /// The stored document always carries an `attachments` list, empty when
    /// the input has none.
    ///
    /// # Returns
    /// * `Ok(String)` - The opaque `content_ref` assigned by the store
    async fn insert(&self, content: AchievementContentModel) -> StoreResult<String>;

    /// Find a content document by its key
    async fn find_by_ref(&self, content_ref: &str) -> StoreResult<Option<AchievementContentModel>>;

    /// Merge the present fields of `patch` into the document
    ///
    /// Never touches `attachments`, `status` or `studentId`.
    async fn partial_update(&self, content_ref: &str, patch: &ContentPatch) -> StoreResult<()>;

    /// Append one attachment to the document's list
    async fn append_attachment(&self, content_ref: &str, attachment: &Attachment) -> StoreResult<()>;

    /// Mirror the reference status onto the document
    ///
    /// Advisory only; nothing reads this for an authorization decision.
    async fn mark_status(&self, content_ref: &str, status: AchievementStatus) -> StoreResult<()>;

    /// Mark the document deleted without removing it
    async fn soft_delete(&self, content_ref: &str) -> StoreResult<()>;
}
