use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn reject_impl(
        repo: &AchievementReferenceRepositoryImpl,
        id: Uuid,
        note: &str,
    ) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE achievement_references
            SET status = 'rejected', rejection_note = $2, rejected_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND status = 'submitted'
            "#,
        )
        .bind(id)
        .bind(note)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict(format!(
                "achievement reference {id} is no longer submitted"
            )));
        }
        Ok(())
    }
}
