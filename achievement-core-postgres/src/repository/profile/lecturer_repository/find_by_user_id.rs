use achievement_core_db::models::profile::LecturerModel;
use achievement_core_db::{StoreError, StoreResult};
use uuid::Uuid;

use super::repo_impl::LecturerRepositoryImpl;
use crate::utils::TryFromRow;

impl LecturerRepositoryImpl {
    pub(super) async fn find_by_user_id_impl(
        repo: &LecturerRepositoryImpl,
        user_id: Uuid,
    ) -> StoreResult<Option<LecturerModel>> {
        let row = sqlx::query("SELECT * FROM lecturers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.map(|row| LecturerModel::try_from_row(&row))
            .transpose()
            .map_err(StoreError::unavailable)
    }
}

#[cfg(test)]
mod tests {
    use achievement_core_db::repository::LecturerRepository;
    use serial_test::serial;
    use uuid::Uuid;

    use crate::repository::profile::test_utils::insert_test_lecturer;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_lecturer_by_user_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.repos().lecturer_repository();
        let lecturer = insert_test_lecturer(ctx.pool()).await?;

        let found = repo.find_by_user_id(lecturer.user_id).await?.unwrap();
        assert_eq!(found.id, lecturer.id);
        assert_eq!(found.lecturer_code, lecturer.lecturer_code);

        let by_id = repo.find_by_id(lecturer.id).await?.unwrap();
        assert_eq!(by_id.user_id, lecturer.user_id);

        assert!(repo.find_by_user_id(Uuid::new_v4()).await?.is_none());
        Ok(())
    }
}
