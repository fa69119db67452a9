use achievement_core_db::models::achievement::AchievementStatus;
use tracing::info;
use uuid::Uuid;

use super::AchievementLifecycleEngine;
use crate::domain::Principal;
use crate::error::ApiResult;

impl AchievementLifecycleEngine {
    /// Hand a draft over for review.
    ///
    /// Two concurrent submits of the same draft: exactly one wins, the other
    /// gets [`crate::ApiError::Conflict`].
    pub async fn submit(&self, principal: &Principal, id: Uuid) -> ApiResult<()> {
        let reference = self.load_reference(id).await?;
        Self::ensure_owner(principal, &reference)?;
        Self::ensure_status(&reference, AchievementStatus::Draft)?;

        self.references
            .transition_status(id, AchievementStatus::Draft, AchievementStatus::Submitted)
            .await?;
        self.mirror_status(&reference, AchievementStatus::Submitted).await;

        info!(achievement_id = %id, student_id = %reference.student_id, "achievement submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixture::Fixture;
    use super::*;
    use crate::error::ApiError;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_submit_draft() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = Fixture::new();
        let id = f.draft().await;

        f.engine.submit(&f.student(), id).await?;

        let reference = f.reference(id);
        assert_eq!(reference.status, AchievementStatus::Submitted);
        assert!(reference.submitted_at.is_some());
        let content = f.contents.get(&reference.content_ref).unwrap();
        assert_eq!(content.status, AchievementStatus::Submitted);
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_twice_is_invalid_state() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = Fixture::new();
        let id = f.submitted().await;

        let result = f.engine.submit(&f.student(), id).await;

        assert!(matches!(result, Err(ApiError::InvalidState(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_only_owner_submits() {
        let f = Fixture::new();
        let id = f.draft().await;

        let result = f.engine.submit(&f.other_student(), id).await;

        assert!(matches!(result, Err(ApiError::Forbidden(_))));
        assert_eq!(f.status(id), AchievementStatus::Draft);
    }

    #[tokio::test]
    async fn test_concurrent_submits_one_conflicts() {
        let f = Fixture::new();
        let id = f.draft().await;
        f.references.yield_after_read.store(true, Ordering::SeqCst);
        let student = f.student();

        let (a, b) = tokio::join!(f.engine.submit(&student, id), f.engine.submit(&student, id));

        let outcomes = [a, b];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(
            outcomes
                .iter()
                .filter(|r| matches!(r, Err(ApiError::Conflict(_))))
                .count(),
            1
        );
        assert_eq!(f.status(id), AchievementStatus::Submitted);
    }

    #[tokio::test]
    async fn test_mirror_failure_does_not_fail_submit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = Fixture::new();
        let id = f.draft().await;
        f.contents.fail_mark_status.store(true, Ordering::SeqCst);

        f.engine.submit(&f.student(), id).await?;

        assert_eq!(f.status(id), AchievementStatus::Submitted);
        let content = f.contents.get(&f.reference(id).content_ref).unwrap();
        assert_eq!(content.status, AchievementStatus::Draft);
        Ok(())
    }
}
