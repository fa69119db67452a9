use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::StudentRepositoryImpl;

impl StudentRepositoryImpl {
    pub(super) async fn assign_advisor_impl(
        repo: &StudentRepositoryImpl,
        student_id: Uuid,
        lecturer_id: Uuid,
    ) -> StoreResult<()> {
        let result = sqlx::query("UPDATE students SET advisor_id = $2 WHERE id = $1")
            .bind(student_id)
            .bind(lecturer_id)
            .execute(&*repo.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("student {student_id}")));
        }
        Ok(())
    }
}
