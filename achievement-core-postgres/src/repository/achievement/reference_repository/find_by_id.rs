use achievement_core_db::models::achievement::AchievementReferenceModel;
use achievement_core_db::StoreResult;
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;

impl AchievementReferenceRepositoryImpl {
    /// Deleted rows are returned too; visibility is decided by the caller.
    pub(super) async fn find_by_id_impl(
        repo: &AchievementReferenceRepositoryImpl,
        id: Uuid,
    ) -> StoreResult<Option<AchievementReferenceModel>> {
        let reference = sqlx::query_as::<_, AchievementReferenceModel>(
            "SELECT * FROM achievement_references WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&*repo.pool)
        .await?;
        Ok(reference)
    }
}
