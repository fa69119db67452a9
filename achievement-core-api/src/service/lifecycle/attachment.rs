use achievement_core_db::models::achievement::{AchievementStatus, Attachment, FileReference};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::AchievementLifecycleEngine;
use crate::domain::Principal;
use crate::error::{ApiError, ApiResult};

impl AchievementLifecycleEngine {
    /// Record an already stored file on an achievement.
    ///
    /// The owning student may attach while the achievement is a draft; an
    /// admin may attach to any achievement that is not deleted. The upload
    /// time is stamped here, not taken from the caller.
    pub async fn add_attachment(
        &self,
        principal: &Principal,
        id: Uuid,
        file: FileReference,
    ) -> ApiResult<Attachment> {
        if file.file_name.trim().is_empty() || file.file_url.trim().is_empty() {
            return Err(ApiError::ValidationError("file name and url are required".to_string()));
        }

        let reference = self.load_reference(id).await?;
        if principal.is_admin() {
            if reference.is_deleted() {
                return Err(ApiError::InvalidState(format!("achievement {id} is deleted")));
            }
        } else {
            Self::ensure_owner(principal, &reference)?;
            Self::ensure_status(&reference, AchievementStatus::Draft)?;
        }

        self.references.touch(id, reference.status).await?;
        let attachment = file.into_attachment(Utc::now());
        self.contents
            .append_attachment(&reference.content_ref, &attachment)
            .await?;

        info!(achievement_id = %id, file_name = %attachment.file_name, "attachment added");
        Ok(attachment)
    }
}
