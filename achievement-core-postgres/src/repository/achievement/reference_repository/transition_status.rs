use achievement_core_db::models::achievement::AchievementStatus;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn transition_status_impl(
        repo: &AchievementReferenceRepositoryImpl,
        id: Uuid,
        from: AchievementStatus,
        to: AchievementStatus,
    ) -> StoreResult<()> {
        if !from.can_transition_to(to) || to != AchievementStatus::Submitted {
            return Err(StoreError::Conflict(format!("cannot move achievement from {from} to {to}")));
        }

        let result = sqlx::query(
            r#"
            UPDATE achievement_references
            SET status = $3,
                submitted_at = CASE WHEN $3 = 'submitted'::achievement_status THEN NOW() ELSE submitted_at END,
                updated_at = NOW()
            WHERE id = $1 AND status = $2
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(%id, %from, %to, "guarded status update matched no row");
            return Err(StoreError::Conflict(format!(
                "achievement reference {id} is no longer {from}"
            )));
        }
        Ok(())
    }
}
