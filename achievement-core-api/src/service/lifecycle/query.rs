use achievement_core_db::models::achievement::AchievementReferenceModel;
use achievement_core_db::repository::{Page, PageRequest};
use tracing::warn;
use uuid::Uuid;

use super::AchievementLifecycleEngine;
use crate::domain::{permissions, AchievementDetail, Principal, Role, StatusEvent};
use crate::error::{ApiError, ApiResult};

impl AchievementLifecycleEngine {
    /// Non-deleted achievements visible to the principal, newest first.
    ///
    /// Admins see everything, advisors see their advisees, students see
    /// their own.
    pub async fn list(
        &self,
        principal: &Principal,
        page: PageRequest,
    ) -> ApiResult<Page<AchievementReferenceModel>> {
        principal.require_permission(permissions::ACHIEVEMENT_READ)?;

        let student_ids: Vec<Uuid> = match principal.role {
            Role::Admin => return Ok(self.references.find_all(page).await?),
            Role::Student => vec![principal.student_id()?],
            Role::LecturerAdvisor => self
                .students
                .find_by_advisor_id(principal.lecturer_id()?)
                .await?
                .into_iter()
                .map(|student| student.id)
                .collect(),
        };

        if student_ids.is_empty() {
            return Ok(Page::empty(page));
        }
        Ok(self.references.find_by_student_ids(&student_ids, page).await?)
    }

    /// Non-deleted achievements of one student, newest first.
    ///
    /// Open to admins, the student's advisor and the student themself.
    pub async fn list_for_student(
        &self,
        principal: &Principal,
        student_id: Uuid,
        page: PageRequest,
    ) -> ApiResult<Page<AchievementReferenceModel>> {
        principal.require_permission(permissions::ACHIEVEMENT_READ)?;

        match principal.role {
            Role::Student => {
                if principal.student_id()? != student_id {
                    return Err(ApiError::Forbidden("achievements of another student".to_string()));
                }
            }
            Role::LecturerAdvisor => {
                let lecturer_id = principal.lecturer_id()?;
                match self.students.find_by_id(student_id).await? {
                    Some(student) if student.is_advised_by(lecturer_id) => {}
                    _ => return Err(ApiError::Forbidden("not the advisor of this student".to_string())),
                }
            }
            Role::Admin => {
                if self.students.find_by_id(student_id).await?.is_none() {
                    return Err(ApiError::NotFound(format!("student {student_id}")));
                }
            }
        }

        Ok(self.references.find_by_student_ids(&[student_id], page).await?)
    }

    /// Reference plus content, resolved through `content_ref`.
    pub async fn detail(&self, principal: &Principal, id: Uuid) -> ApiResult<AchievementDetail> {
        let reference = self.load_visible(principal, id).await?;

        let content = self.contents.find_by_ref(&reference.content_ref).await?;
        if content.is_none() {
            warn!(achievement_id = %id, content_ref = %reference.content_ref, "reference has no content document");
        }
        Ok(AchievementDetail { reference, content })
    }

    /// Review trail of an achievement, oldest first.
    pub async fn history(&self, principal: &Principal, id: Uuid) -> ApiResult<Vec<StatusEvent>> {
        let reference = self.load_visible(principal, id).await?;
        Ok(StatusEvent::timeline(&reference))
    }

    async fn load_visible(&self, principal: &Principal, id: Uuid) -> ApiResult<AchievementReferenceModel> {
        principal.require_permission(permissions::ACHIEVEMENT_READ)?;
        let reference = self.load_reference(id).await?;
        self.ensure_visible(principal, &reference).await?;
        Ok(reference)
    }
}
