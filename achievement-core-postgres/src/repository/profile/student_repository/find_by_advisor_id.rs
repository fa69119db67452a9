use achievement_core_db::models::profile::StudentModel;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::StudentRepositoryImpl;
use crate::utils::TryFromRow;

impl StudentRepositoryImpl {
    pub(super) async fn find_by_advisor_id_impl(
        repo: &StudentRepositoryImpl,
        lecturer_id: Uuid,
    ) -> StoreResult<Vec<StudentModel>> {
        let rows = sqlx::query("SELECT * FROM students WHERE advisor_id = $1 ORDER BY student_code")
            .bind(lecturer_id)
            .fetch_all(&*repo.pool)
            .await?;

        let mut students = Vec::with_capacity(rows.len());
        for row in rows {
            students.push(StudentModel::try_from_row(&row).map_err(StoreError::unavailable)?);
        }
        Ok(students)
    }
}
