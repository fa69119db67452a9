use achievement_core_db::StoreResult;
use uuid::Uuid;

use super::repo_impl::TokenVersionRepositoryImpl;

impl TokenVersionRepositoryImpl {
    pub(super) async fn current_version_impl(
        repo: &TokenVersionRepositoryImpl,
        user_id: Uuid,
    ) -> StoreResult<Option<i32>> {
        let version = sqlx::query_scalar::<_, i32>("SELECT token_version FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&*repo.pool)
            .await?;
        Ok(version)
    }
}
