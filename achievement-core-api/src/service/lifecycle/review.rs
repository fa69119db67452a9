use achievement_core_db::models::achievement::{AchievementReferenceModel, AchievementStatus};
use tracing::info;
use uuid::Uuid;

use super::AchievementLifecycleEngine;
use crate::domain::{permissions, Principal, Role};
use crate::error::{ApiError, ApiResult};

const MAX_REJECTION_NOTE_LEN: usize = 1000;

impl AchievementLifecycleEngine {
    /// Approve a submitted achievement as the owning student's advisor.
    pub async fn verify(&self, principal: &Principal, id: Uuid) -> ApiResult<()> {
        let (lecturer_id, reference) = self.load_for_review(principal, id).await?;

        self.references.verify(id, lecturer_id).await?;
        self.mirror_status(&reference, AchievementStatus::Verified).await;

        info!(achievement_id = %id, %lecturer_id, "achievement verified");
        Ok(())
    }

    /// Send a submitted achievement back with a note. Rejection is final.
    pub async fn reject(&self, principal: &Principal, id: Uuid, note: &str) -> ApiResult<()> {
        let note = note.trim();
        if note.is_empty() {
            return Err(ApiError::ValidationError("rejection note is required".to_string()));
        }
        if note.chars().count() > MAX_REJECTION_NOTE_LEN {
            return Err(ApiError::ValidationError(format!(
                "rejection note exceeds {MAX_REJECTION_NOTE_LEN} characters"
            )));
        }

        let (lecturer_id, reference) = self.load_for_review(principal, id).await?;

        self.references.reject(id, note).await?;
        self.mirror_status(&reference, AchievementStatus::Rejected).await;

        info!(achievement_id = %id, %lecturer_id, "achievement rejected");
        Ok(())
    }

    /// Checks shared by verify and reject. The advisor check comes before the
    /// status check, so a non-advisor learns nothing about the status.
    async fn load_for_review(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> ApiResult<(Uuid, AchievementReferenceModel)> {
        principal.require_role(Role::LecturerAdvisor)?;
        principal.require_permission(permissions::ACHIEVEMENT_VERIFY)?;
        let lecturer_id = principal.lecturer_id()?;

        let reference = self.load_reference(id).await?;
        self.ensure_advisor(lecturer_id, &reference).await?;
        Self::ensure_status(&reference, AchievementStatus::Submitted)?;
        Ok((lecturer_id, reference))
    }
}
