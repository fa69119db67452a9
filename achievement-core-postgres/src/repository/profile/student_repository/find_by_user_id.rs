use achievement_core_db::models::profile::StudentModel;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::StudentRepositoryImpl;
use crate::utils::TryFromRow;

impl StudentRepositoryImpl {
    pub(super) async fn find_by_user_id_impl(
        repo: &StudentRepositoryImpl,
        user_id: Uuid,
    ) -> StoreResult<Option<StudentModel>> {
        let row = sqlx::query("SELECT * FROM students WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.map(|row| StudentModel::try_from_row(&row))
            .transpose()
            .map_err(StoreError::unavailable)
    }
}
