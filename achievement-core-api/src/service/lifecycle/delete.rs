use achievement_core_db::models::achievement::AchievementStatus;
use tracing::{info, warn};
use uuid::Uuid;

use super::AchievementLifecycleEngine;
use crate::domain::{Principal, Role};
use crate::error::{ApiError, ApiResult};

impl AchievementLifecycleEngine {
    /// Soft-delete an achievement.
    ///
    /// Students may delete their own drafts. Admins may delete in any status
    /// except `deleted`. Rows are never removed.
    pub async fn delete(&self, principal: &Principal, id: Uuid) -> ApiResult<()> {
        let reference = self.load_reference(id).await?;

        match principal.role {
            Role::Admin => {
                if reference.is_deleted() {
                    return Err(ApiError::InvalidState(format!("achievement {id} is already deleted")));
                }
            }
            Role::Student => {
                Self::ensure_owner(principal, &reference)?;
                Self::ensure_status(&reference, AchievementStatus::Draft)?;
            }
            Role::LecturerAdvisor => {
                return Err(ApiError::Forbidden("advisors cannot delete achievements".to_string()));
            }
        }

        self.references.soft_delete(id, reference.status).await?;

        if let Err(e) = self.contents.soft_delete(&reference.content_ref).await {
            warn!(
                achievement_id = %id,
                content_ref = %reference.content_ref,
                error = %e,
                "reference deleted but content soft delete failed"
            );
        }

        info!(achievement_id = %id, previous_status = %reference.status, deleted_by = %principal.user_id, "achievement deleted");
        Ok(())
    }
}
