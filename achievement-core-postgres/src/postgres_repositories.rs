use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::account::TokenVersionRepositoryImpl;
use crate::repository::achievement::AchievementReferenceRepositoryImpl;
use crate::repository::profile::{LecturerRepositoryImpl, StudentRepositoryImpl};

/// Builds the relational repositories over one shared pool.
///
/// Every repository statement runs on its own pooled connection; status
/// changes rely on guarded single-statement updates rather than
/// multi-statement transactions.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn reference_repository(&self) -> Arc<AchievementReferenceRepositoryImpl> {
        Arc::new(AchievementReferenceRepositoryImpl::new(self.pool.clone()))
    }

    pub fn student_repository(&self) -> Arc<StudentRepositoryImpl> {
        Arc::new(StudentRepositoryImpl::new(self.pool.clone()))
    }

    pub fn lecturer_repository(&self) -> Arc<LecturerRepositoryImpl> {
        Arc::new(LecturerRepositoryImpl::new(self.pool.clone()))
    }

    pub fn token_version_repository(&self) -> Arc<TokenVersionRepositoryImpl> {
        Arc::new(TokenVersionRepositoryImpl::new(self.pool.clone()))
    }
}
