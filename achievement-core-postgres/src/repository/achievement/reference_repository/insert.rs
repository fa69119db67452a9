use achievement_core_db::models::achievement::{AchievementReferenceModel, AchievementStatus};
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &AchievementReferenceRepositoryImpl,
        reference: AchievementReferenceModel,
    ) -> StoreResult<Uuid> {
        if reference.status != AchievementStatus::Draft {
            return Err(StoreError::Conflict(format!(
                "new achievement reference must be draft, got {}",
                reference.status
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO achievement_references
                (id, student_id, content_ref, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reference.id)
        .bind(reference.student_id)
        .bind(&reference.content_ref)
        .bind(reference.status)
        .bind(reference.created_at)
        .bind(reference.updated_at)
        .execute(&*repo.pool)
        .await?;

        Ok(reference.id)
    }
}
