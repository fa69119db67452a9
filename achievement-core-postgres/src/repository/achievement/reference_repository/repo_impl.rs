use achievement_core_db::models::achievement::{AchievementReferenceModel, AchievementStatus};
use achievement_core_db::repository::{AchievementReferenceRepository, Page, PageRequest};
use achievement_core_db::StoreResult;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// `achievement_references` table.
///
/// Status changes and soft deletes are compare-and-set statements: the
/// expected current status is part of the `WHERE` clause and zero affected
/// rows is reported as a conflict.
pub struct AchievementReferenceRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AchievementReferenceRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementReferenceRepository for AchievementReferenceRepositoryImpl {
    async fn insert(&self, reference: AchievementReferenceModel) -> StoreResult<Uuid> {
        Self::insert_impl(self, reference).await
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<AchievementReferenceModel>> {
        Self::find_by_id_impl(self, id).await
    }

    async fn find_all(&self, page: PageRequest) -> StoreResult<Page<AchievementReferenceModel>> {
        Self::find_all_impl(self, page).await
    }

    async fn find_by_student_ids(
        &self,
        student_ids: &[Uuid],
        page: PageRequest,
    ) -> StoreResult<Page<AchievementReferenceModel>> {
        Self::find_by_student_ids_impl(self, student_ids, page).await
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: AchievementStatus,
        to: AchievementStatus,
    ) -> StoreResult<()> {
        Self::transition_status_impl(self, id, from, to).await
    }

    async fn verify(&self, id: Uuid, lecturer_id: Uuid) -> StoreResult<()> {
        Self::verify_impl(self, id, lecturer_id).await
    }

    async fn reject(&self, id: Uuid, note: &str) -> StoreResult<()> {
        Self::reject_impl(self, id, note).await
    }

    async fn touch(&self, id: Uuid, expected: AchievementStatus) -> StoreResult<()> {
        Self::touch_impl(self, id, expected).await
    }

    async fn soft_delete(&self, id: Uuid, from: AchievementStatus) -> StoreResult<()> {
        Self::soft_delete_impl(self, id, from).await
    }
}
