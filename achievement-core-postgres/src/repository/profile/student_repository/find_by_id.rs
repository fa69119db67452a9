use achievement_core_db::models::profile::StudentModel;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::StudentRepositoryImpl;
use crate::utils::TryFromRow;

impl StudentRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &StudentRepositoryImpl,
        id: Uuid,
    ) -> StoreResult<Option<StudentModel>> {
        let row = sqlx::query("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.map(|row| StudentModel::try_from_row(&row))
            .transpose()
            .map_err(StoreError::unavailable)
    }
}
