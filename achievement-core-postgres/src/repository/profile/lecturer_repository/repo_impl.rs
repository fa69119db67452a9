use achievement_core_db::models::profile::LecturerModel;
use achievement_core_db::repository::LecturerRepository;
use achievement_core_db::StoreResult;
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::utils::{get_heapless_string, TryFromRow};

pub struct LecturerRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl LecturerRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for LecturerModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(LecturerModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            lecturer_code: get_heapless_string(row, "lecturer_code")?,
            department: row.try_get("department")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl LecturerRepository for LecturerRepositoryImpl {
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Option<LecturerModel>> {
        Self::find_by_user_id_impl(self, user_id).await
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<LecturerModel>> {
        Self::find_by_id_impl(self, id).await
    }

    async fn find_all(&self) -> StoreResult<Vec<LecturerModel>> {
        Self::find_all_impl(self).await
    }
}
