use achievement_core_db::repository::TokenVersionRepository;
use achievement_core_db::StoreResult;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Token version counter on the `users` table.
pub struct TokenVersionRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl TokenVersionRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenVersionRepository for TokenVersionRepositoryImpl {
    async fn current_version(&self, user_id: Uuid) -> StoreResult<Option<i32>> {
        Self::current_version_impl(self, user_id).await
    }

    async fn increment(&self, user_id: Uuid) -> StoreResult<i32> {
        Self::increment_impl(self, user_id).await
    }
}
