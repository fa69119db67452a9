use achievement_core_db::models::achievement::AchievementReferenceModel;
use achievement_core_db::repository::{Page, PageRequest};
use achievement_core_db::StoreResult;
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;
use crate::utils::page_bounds;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn find_by_student_ids_impl(
        repo: &AchievementReferenceRepositoryImpl,
        student_ids: &[Uuid],
        page: PageRequest,
    ) -> StoreResult<Page<AchievementReferenceModel>> {
        if student_ids.is_empty() {
            return Ok(Page::empty(page));
        }

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM achievement_references WHERE student_id = ANY($1) AND status <> 'deleted'",
        )
        .bind(student_ids)
        .fetch_one(&*repo.pool)
        .await?;

        let (limit, offset) = page_bounds(page);
        let items = sqlx::query_as::<_, AchievementReferenceModel>(
            r#"
            SELECT * FROM achievement_references
            WHERE student_id = ANY($1) AND status <> 'deleted'
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(student_ids)
        .bind(limit)
        .bind(offset)
        .fetch_all(&*repo.pool)
        .await?;

        Ok(Page::new(items, total as usize, page))
    }
}
