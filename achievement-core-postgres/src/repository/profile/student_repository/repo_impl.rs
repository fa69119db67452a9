use achievement_core_db::models::profile::StudentModel;
use achievement_core_db::repository::StudentRepository;
use achievement_core_db::StoreResult;
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct StudentRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl StudentRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for StudentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(StudentModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            student_code: get_heapless_string(row, "student_code")?,
            program_study: row.try_get("program_study")?,
            academic_year: get_optional_heapless_string(row, "academic_year")?,
            advisor_id: row.try_get("advisor_id")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl StudentRepository for StudentRepositoryImpl {
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Option<StudentModel>> {
        Self::find_by_user_id_impl(self, user_id).await
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<StudentModel>> {
        Self::find_by_id_impl(self, id).await
    }

    async fn find_by_advisor_id(&self, lecturer_id: Uuid) -> StoreResult<Vec<StudentModel>> {
        Self::find_by_advisor_id_impl(self, lecturer_id).await
    }

    async fn assign_advisor(&self, student_id: Uuid, lecturer_id: Uuid) -> StoreResult<()> {
        Self::assign_advisor_impl(self, student_id, lecturer_id).await
    }
}
