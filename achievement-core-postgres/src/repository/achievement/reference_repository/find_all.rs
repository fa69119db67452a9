use achievement_core_db::models::achievement::AchievementReferenceModel;
use achievement_core_db::repository::{Page, PageRequest};
use achievement_core_db::StoreResult;

use super::repo_impl::AchievementReferenceRepositoryImpl;
use crate::utils::page_bounds;

impl AchievementReferenceRepositoryImpl {
    pub(super) async fn find_all_impl(
        repo: &AchievementReferenceRepositoryImpl,
        page: PageRequest,
    ) -> StoreResult<Page<AchievementReferenceModel>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM achievement_references WHERE status <> 'deleted'")
                .fetch_one(&*repo.pool)
                .await?;

        let (limit, offset) = page_bounds(page);
        let items = sqlx::query_as::<_, AchievementReferenceModel>(
            r#"
            SELECT * FROM achievement_references
            WHERE status <> 'deleted'
            ORDER BY created_at DESC, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&*repo.pool)
        .await?;

        Ok(Page::new(items, total as usize, page))
    }
}
