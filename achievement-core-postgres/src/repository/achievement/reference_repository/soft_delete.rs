use achievement_core_db::models::achievement::AchievementStatus;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn soft_delete_impl(
        repo: &AchievementReferenceRepositoryImpl,
        id: Uuid,
        from: AchievementStatus,
    ) -> StoreResult<()> {
        if from == AchievementStatus::Deleted {
            return Err(StoreError::Conflict(format!("achievement reference {id} is already deleted")));
        }

        let result = sqlx::query(
            r#"
            UPDATE achievement_references
            SET status = 'deleted', deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND status = $2
            "#,
        )
        .bind(id)
        .bind(from)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict(format!(
                "achievement reference {id} is no longer {from}"
            )));
        }
        Ok(())
    }
}
