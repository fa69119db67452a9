use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn verify_impl(
        repo: &AchievementReferenceRepositoryImpl,
        id: Uuid,
        lecturer_id: Uuid,
    ) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE achievement_references
            SET status = 'verified', verified_by = $2, verified_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND status = 'submitted'
            "#,
        )
        .bind(id)
        .bind(lecturer_id)
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

#[cfg(test)]
mod tests {
    use achievement_core_db::models::achievement::AchievementStatus;
    use achievement_core_db::repository::AchievementReferenceRepository;
    use achievement_core_db::StoreError;
    use serial_test::serial;

    use super::super::test_utils::insert_test_draft;
    use crate::repository::profile::test_utils::insert_test_lecturer;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_verify_records_verifier() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.repos().reference_repository();
        let lecturer = insert_test_lecturer(ctx.pool()).await?;
        let (_, reference) = insert_test_draft(ctx.pool(), &repo).await?;
        repo.transition_status(reference.id, AchievementStatus::Draft, AchievementStatus::Submitted)
            .await?;

        repo.verify(reference.id, lecturer.id).await?;

        let stored = repo.find_by_id(reference.id).await?.unwrap();
        assert_eq!(stored.status, AchievementStatus::Verified);
        assert_eq!(stored.verified_by, Some(lecturer.id));
        assert!(stored.verified_at.is_some());
        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_verify_requires_submitted() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.repos().reference_repository();
        let lecturer = insert_test_lecturer(ctx.pool()).await?;
        let (_, reference) = insert_test_draft(ctx.pool(), &repo).await?;

        let result = repo.verify(reference.id, lecturer.id).await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
        let stored = repo.find_by_id(reference.id).await?.unwrap();
        assert_eq!(stored.status, AchievementStatus::Draft);
        assert!(stored.verified_by.is_none());
        Ok(())
    }
}
