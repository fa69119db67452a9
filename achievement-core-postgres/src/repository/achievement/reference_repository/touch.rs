use achievement_core_db::models::achievement::AchievementStatus;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn touch_impl(
        repo: &AchievementReferenceRepositoryImpl,
        id: Uuid,
        expected: AchievementStatus,
    ) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE achievement_references SET updated_at = NOW() WHERE id = $1 AND status = $2",
        )
        .bind(id)
        .bind(expected)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict(format!(
                "achievement reference {id} is no longer {expected}"
            )));
        }
        Ok(())
    }
}
