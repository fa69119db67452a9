use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::TokenVersionRepositoryImpl;

impl TokenVersionRepositoryImpl {
    /// Single-statement bump, so concurrent logouts each advance the counter.
    pub(super) async fn increment_impl(repo: &TokenVersionRepositoryImpl, user_id: Uuid) -> StoreResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE users
            SET token_version = token_version + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING token_version
            "#,
        )
        .bind(user_id)
        .fetch_optional(&*repo.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("user {user_id}")))
    }
}
