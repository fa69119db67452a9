use achievement_core_db::models::achievement::AchievementReferenceModel;
use achievement_core_db::models::profile::StudentModel;
use achievement_core_db::repository::AchievementReferenceRepository;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_impl::AchievementReferenceRepositoryImpl;
use crate::repository::profile::test_utils::insert_test_student;

pub fn create_test_reference(student_id: Uuid) -> AchievementReferenceModel {
    let content_ref = Uuid::new_v4().simple().to_string()[..24].to_string();
    AchievementReferenceModel::new_draft(student_id, content_ref)
}

/// Insert a student and one draft reference owned by that student.
pub async fn insert_test_draft(
    pool: &PgPool,
    repo: &AchievementReferenceRepositoryImpl,
) -> Result<(StudentModel, AchievementReferenceModel), Box<dyn std::error::Error + Send + Sync>> {
    let student = insert_test_student(pool, None).await?;
    let reference = create_test_reference(student.id);
    repo.insert(reference.clone()).await?;
    Ok((student, reference))
}
