use achievement_core_db::models::profile::LecturerModel;
use achievement_core_db::{StoreError, StoreResult};

use super::repo_impl::LecturerRepositoryImpl;
use crate::utils::TryFromRow;

impl LecturerRepositoryImpl {
    pub(super) async fn find_all_impl(repo: &LecturerRepositoryImpl) -> StoreResult<Vec<LecturerModel>> {
        let rows = sqlx::query("SELECT * FROM lecturers ORDER BY lecturer_code")
            .fetch_all(&*repo.pool)
            .await?;

        let mut lecturers = Vec::with_capacity(rows.len());
        for row in rows {
            lecturers.push(LecturerModel::try_from_row(&row).map_err(StoreError::unavailable)?);
        }
        Ok(lecturers)
    }
}
