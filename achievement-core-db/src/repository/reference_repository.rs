use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::achievement::{AchievementReferenceModel, AchievementStatus};
use crate::repository::pagination::{Page, PageRequest};

/// Repository contract for relational achievement reference rows
///
/// The reference row is the single authority for workflow status and
/// ownership. Every status change goes through a guarded compare-and-set so
/// that two concurrent requests against the same row cannot both apply.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl AchievementReferenceRepository for AchievementReferenceRepositoryImpl {
///     async fn transition_status(&self, id: Uuid, from: AchievementStatus, to: AchievementStatus) -> StoreResult<()> {
///         // UPDATE ... WHERE id = $1 AND status = $2, then check rows affected
///     }
/// }
/// ```
#[async_trait]
pub trait AchievementReferenceRepository: Send + Sync {
    /// Persist a new reference row
    ///
    /// # Arguments
    /// * `reference` - The row to insert; its status must be `Draft`
    ///
    /// # Returns
    /// * `Ok(Uuid)` - The id of the inserted row
    /// * `Err(StoreError::Conflict)` - If the row is not a draft
    async fn insert(&self, reference: AchievementReferenceModel) -> StoreResult<Uuid>;

    /// Find a reference row by id, including soft-deleted rows
    ///
    /// # Returns
    /// * `Ok(Some(row))` - The row
    /// * `Ok(None)` - If no row has this id
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<AchievementReferenceModel>>;

    /// One page of the rows that are not soft-deleted, newest first
    async fn find_all(&self, page: PageRequest) -> StoreResult<Page<AchievementReferenceModel>>;

    /// One page of the rows owned by any of the given student records,
    /// excluding soft-deleted rows, newest first
    ///
    /// # Arguments
    /// * `student_ids` - A singleton for "my achievements", the advisee set for an advisor
    /// * `page` - Offset and limit of the requested page
    ///
    /// # Returns
    /// * `Ok(Page)` - An empty page when `student_ids` is empty
    async fn find_by_student_ids(
        &self,
        student_ids: &[Uuid],
        page: PageRequest,
    ) -> StoreResult<Page<AchievementReferenceModel>>;

    /// Guarded status change
    ///
    /// Applies only when the stored status still equals `from`. Only the
    /// `Draft -> Submitted` move goes through here and it stamps
    /// `submitted_at`; reviews and deletion have their own guarded writes.
    ///
    /// # Returns
    /// * `Ok(())` - Exactly one row changed
    /// * `Err(StoreError::Conflict)` - The row was missing, its status was no longer `from`,
    ///   or the move is not `Draft -> Submitted`
    async fn transition_status(
        &self,
        id: Uuid,
        from: AchievementStatus,
        to: AchievementStatus,
    ) -> StoreResult<()>;

    /// Guarded `Submitted -> Verified` move that also records the verifier
    ///
    /// Status, `verified_by` and `verified_at` are written by one statement,
    /// so a failure leaves the row untouched and still `Submitted`.
    ///
    /// # Returns
    /// * `Err(StoreError::Conflict)` - The row was missing or no longer `Submitted`
    async fn verify(&self, id: Uuid, lecturer_id: Uuid) -> StoreResult<()>;

    /// Guarded `Submitted -> Rejected` move that also records the note and
    /// `rejected_at` in the same statement
    ///
    /// # Returns
    /// * `Err(StoreError::Conflict)` - The row was missing or no longer `Submitted`
    async fn reject(&self, id: Uuid, note: &str) -> StoreResult<()>;

    /// Bump `updated_at` only while the stored status still equals `expected`
    ///
    /// Run before a content-side change to claim the row in the status the
    /// change was authorized against.
    ///
    /// # Returns
    /// * `Err(StoreError::Conflict)` - The row was missing or its status moved on
    async fn touch(&self, id: Uuid, expected: AchievementStatus) -> StoreResult<()>;

    /// Guarded soft delete: status becomes `Deleted` and `deleted_at` is set
    ///
    /// # Returns
    /// * `Err(StoreError::Conflict)` - The stored status was no longer `from`
    async fn soft_delete(&self, id: Uuid, from: AchievementStatus) -> StoreResult<()>;
}
