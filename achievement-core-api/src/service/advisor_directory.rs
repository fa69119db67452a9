use achievement_core_db::models::profile::{LecturerModel, StudentModel};
use achievement_core_db::repository::{LecturerRepository, StudentRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{permissions, Principal, Role};
use crate::error::{ApiError, ApiResult};

/// Maintains the student to advisor edge that verify and reject rely on.
pub struct AdvisorDirectory {
    students: Arc<dyn StudentRepository>,
    lecturers: Arc<dyn LecturerRepository>,
}

impl AdvisorDirectory {
    pub fn new(students: Arc<dyn StudentRepository>, lecturers: Arc<dyn LecturerRepository>) -> Self {
        Self { students, lecturers }
    }

    /// Make `lecturer_id` the advisor of `student_id`, replacing any previous one.
    pub async fn assign_advisor(
        &self,
        principal: &Principal,
        student_id: Uuid,
        lecturer_id: Uuid,
    ) -> ApiResult<()> {
        principal.require_role(Role::Admin)?;
        principal.require_permission(permissions::USER_MANAGE)?;

        if self.lecturers.find_by_id(lecturer_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("lecturer {lecturer_id}")));
        }
        self.students.assign_advisor(student_id, lecturer_id).await?;

        info!(%student_id, %lecturer_id, assigned_by = %principal.user_id, "advisor assigned");
        Ok(())
    }

    pub async fn list_advisees(&self, principal: &Principal, lecturer_id: Uuid) -> ApiResult<Vec<StudentModel>> {
        if !principal.is_admin() && principal.lecturer_id()? != lecturer_id {
            return Err(ApiError::Forbidden("advisees of another lecturer".to_string()));
        }
        Ok(self.students.find_by_advisor_id(lecturer_id).await?)
    }

    /// Every lecturer record, for picking an advisor. Admin only.
    pub async fn list_lecturers(&self, principal: &Principal) -> ApiResult<Vec<LecturerModel>> {
        principal.require_role(Role::Admin)?;
        Ok(self.lecturers.find_all().await?)
    }
}
