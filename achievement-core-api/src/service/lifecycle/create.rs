use achievement_core_db::models::achievement::{AchievementContentModel, AchievementReferenceModel};
use tracing::{error, info};
use validator::Validate;

use super::AchievementLifecycleEngine;
use crate::domain::{permissions, AchievementDetail, NewAchievement, Principal, Role};
use crate::error::{ApiError, ApiResult};

impl AchievementLifecycleEngine {
    /// Create a draft achievement owned by the calling student.
    ///
    /// # Arguments
    /// * `principal` - Student holding `achievement:create`
    /// * `input` - Validated before anything is written
    ///
    /// # Returns
    /// The new reference and its content document
    pub async fn create(&self, principal: &Principal, input: NewAchievement) -> ApiResult<AchievementDetail> {
        principal.require_role(Role::Student)?;
        principal.require_permission(permissions::ACHIEVEMENT_CREATE)?;
        let student_id = principal.student_id()?;
        input.validate()?;

        let content = input.into_content(student_id);
        let content_ref = self.contents.insert(content.clone()).await?;

        let reference = AchievementReferenceModel::new_draft(student_id, content_ref.clone());
        if let Err(e) = self.references.insert(reference.clone()).await {
            error!(%student_id, %content_ref, error = %e, "reference insert failed, removing orphaned content");
            if let Err(cleanup) = self.contents.soft_delete(&content_ref).await {
                error!(%content_ref, error = %cleanup, "failed to remove orphaned content");
            }
            return Err(ApiError::StoreUnavailable(e.to_string()));
        }

        info!(achievement_id = %reference.id, %student_id, "achievement created");
        Ok(AchievementDetail {
            reference,
            content: Some(AchievementContentModel {
                id: content_ref,
                ..content
            }),
        })
    }
}
