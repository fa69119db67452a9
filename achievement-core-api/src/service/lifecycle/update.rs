use achievement_core_db::models::achievement::{AchievementStatus, ContentPatch};
use tracing::info;
use uuid::Uuid;

use super::AchievementLifecycleEngine;
use crate::domain::Principal;
use crate::error::{ApiError, ApiResult};

impl AchievementLifecycleEngine {
    /// Apply `patch` to a draft's content. Only the owning student may edit.
    pub async fn update(&self, principal: &Principal, id: Uuid, patch: ContentPatch) -> ApiResult<()> {
        if patch.is_empty() {
            return Err(ApiError::ValidationError("patch has no fields".to_string()));
        }
        if matches!(patch.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(ApiError::ValidationError("title must not be blank".to_string()));
        }
        if matches!(patch.points, Some(p) if p < 0) {
            return Err(ApiError::ValidationError("points must not be negative".to_string()));
        }

        let reference = self.load_reference(id).await?;
        Self::ensure_owner(principal, &reference)?;
        Self::ensure_status(&reference, AchievementStatus::Draft)?;

        // Claims the row as a draft; a submit that got in first turns this into a conflict.
        self.references.touch(id, AchievementStatus::Draft).await?;
        self.contents.partial_update(&reference.content_ref, &patch).await?;

        info!(achievement_id = %id, "achievement updated");
        Ok(())
    }
}
