mod attachment;
mod create;
mod delete;
mod query;
mod review;
mod submit;
mod update;

use achievement_core_db::models::achievement::{AchievementReferenceModel, AchievementStatus};
use achievement_core_db::repository::{
    AchievementContentRepository, AchievementReferenceRepository, StudentRepository,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{Principal, Role};
use crate::error::{ApiError, ApiResult};

/// # Documentation
/// Workflow over the two achievement stores.
///
/// The reference row is the source of truth for ownership, status and
/// visibility. The content document is only reached through `content_ref`.
///
/// Write order per operation:
/// - Create: content first, then the reference; a failed reference insert
///   soft-deletes the orphaned content
/// - Edits and attachments: guarded reference touch first, then the content write
/// - Transitions and reviews: one guarded reference update, then a best-effort
///   status mirror on the content
/// - Delete: guarded reference soft delete, then best-effort content soft delete
///
/// Every check runs against the reference as read at the start of the
/// operation. Guarded writes turn a concurrent change into
/// [`ApiError::Conflict`].
pub struct AchievementLifecycleEngine {
    references: Arc<dyn AchievementReferenceRepository>,
    contents: Arc<dyn AchievementContentRepository>,
    students: Arc<dyn StudentRepository>,
}

impl AchievementLifecycleEngine {
    pub fn new(
        references: Arc<dyn AchievementReferenceRepository>,
        contents: Arc<dyn AchievementContentRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            references,
            contents,
            students,
        }
    }

    async fn load_reference(&self, id: Uuid) -> ApiResult<AchievementReferenceModel> {
        self.references
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("achievement {id}")))
    }

    /// The principal must be the student owning `reference`.
    fn ensure_owner(principal: &Principal, reference: &AchievementReferenceModel) -> ApiResult<()> {
        if reference.is_owned_by(principal.student_id()?) {
            Ok(())
        } else {
            Err(ApiError::Forbidden("achievement belongs to another student".to_string()))
        }
    }

    fn ensure_status(reference: &AchievementReferenceModel, expected: AchievementStatus) -> ApiResult<()> {
        if reference.status == expected {
            Ok(())
        } else {
            Err(ApiError::InvalidState(format!(
                "achievement is {}, expected {}",
                reference.status, expected
            )))
        }
    }

    /// The principal must be the recorded advisor of the owning student.
    ///
    /// A missing student record is treated like any other non-advisor.
    async fn ensure_advisor(&self, lecturer_id: Uuid, reference: &AchievementReferenceModel) -> ApiResult<()> {
        match self.students.find_by_id(reference.student_id).await? {
            Some(student) if student.is_advised_by(lecturer_id) => Ok(()),
            _ => Err(ApiError::Forbidden("not the advisor of this student".to_string())),
        }
    }

    /// Read access to a single achievement.
    ///
    /// Deleted references exist only for admins.
    async fn ensure_visible(&self, principal: &Principal, reference: &AchievementReferenceModel) -> ApiResult<()> {
        if principal.is_admin() {
            return Ok(());
        }
        if reference.is_deleted() {
            return Err(ApiError::NotFound(format!("achievement {}", reference.id)));
        }
        match principal.role {
            Role::Student => Self::ensure_owner(principal, reference),
            Role::LecturerAdvisor => self.ensure_advisor(principal.lecturer_id()?, reference).await,
            Role::Admin => Ok(()),
        }
    }

    /// Copy a committed status onto the content document; failures are logged only.
    async fn mirror_status(&self, reference: &AchievementReferenceModel, status: AchievementStatus) {
        if let Err(e) = self.contents.mark_status(&reference.content_ref, status).await {
            warn!(
                achievement_id = %reference.id,
                content_ref = %reference.content_ref,
                %status,
                error = %e,
                "failed to mirror status onto content"
            );
        }
    }
}
