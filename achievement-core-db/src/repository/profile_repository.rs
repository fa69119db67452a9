use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::profile::{LecturerModel, StudentModel};

/// Repository contract for student records
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find the student record owned by a user account
    ///
    /// # Returns
    /// * `Ok(None)` - If the account has no student record
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Option<StudentModel>>;

    /// Find a student record by its own id
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<StudentModel>>;

    /// All students whose advisor is the given lecturer record
    async fn find_by_advisor_id(&self, lecturer_id: Uuid) -> StoreResult<Vec<StudentModel>>;

    /// Point a student at a new advisor
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - If the student record does not exist
    async fn assign_advisor(&self, student_id: Uuid, lecturer_id: Uuid) -> StoreResult<()>;
}

/// Repository contract for lecturer records
#[async_trait]
pub trait LecturerRepository: Send + Sync {
    /// Find the lecturer record owned by a user account
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Option<LecturerModel>>;

    /// Find a lecturer record by its own id
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<LecturerModel>>;

    /// Every lecturer record, ordered by lecturer code
    async fn find_all(&self) -> StoreResult<Vec<LecturerModel>>;
}
