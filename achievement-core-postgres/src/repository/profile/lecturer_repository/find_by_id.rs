use achievement_core_db::models::profile::LecturerModel;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::LecturerRepositoryImpl;
use crate::utils::TryFromRow;

impl LecturerRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &LecturerRepositoryImpl,
        id: Uuid,
    ) -> StoreResult<Option<LecturerModel>> {
        let row = sqlx::query("SELECT * FROM lecturers WHERE id = $1")
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.map(|row| LecturerModel::try_from_row(&row))
            .transpose()
            .map_err(StoreError::unavailable)
    }
}
