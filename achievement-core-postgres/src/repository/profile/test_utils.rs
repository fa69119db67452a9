use achievement_core_db::models::profile::{LecturerModel, StudentModel};
use chrono::Utc;
use heapless::String as HeaplessString;
use sqlx::PgPool;
use uuid::Uuid;

fn unique_code(prefix: char) -> String {
    format!("{prefix}{}", &Uuid::new_v4().simple().to_string()[..15])
}

pub async fn insert_test_user(pool: &PgPool) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
        .bind(id)
        .bind(format!("user_{}", id.simple()))
        .execute(pool)
        .await?;
    Ok(id)
}

pub async fn insert_test_lecturer(pool: &PgPool) -> Result<LecturerModel, Box<dyn std::error::Error + Send + Sync>> {
    let lecturer = LecturerModel {
        id: Uuid::new_v4(),
        user_id: insert_test_user(pool).await?,
        lecturer_code: HeaplessString::try_from(unique_code('L').as_str()).unwrap(),
        department: Some("Computer Science".to_string()),
        created_at: Utc::now(),
    };
    sqlx::query(
        "INSERT INTO lecturers (id, user_id, lecturer_code, department, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(lecturer.id)
    .bind(lecturer.user_id)
    .bind(lecturer.lecturer_code.as_str())
    .bind(&lecturer.department)
    .bind(lecturer.created_at)
    .execute(pool)
    .await?;
    Ok(lecturer)
}

pub async fn insert_test_student(
    pool: &PgPool,
    advisor_id: Option<Uuid>,
) -> Result<StudentModel, Box<dyn std::error::Error + Send + Sync>> {
    let student = StudentModel {
        id: Uuid::new_v4(),
        user_id: insert_test_user(pool).await?,
        student_code: HeaplessString::try_from(unique_code('S').as_str()).unwrap(),
        program_study: Some("Informatics".to_string()),
        academic_year: Some(HeaplessString::try_from("2024").unwrap()),
        advisor_id,
        created_at: Utc::now(),
    };
    sqlx::query(
        r#"
        INSERT INTO students (id, user_id, student_code, program_study, academic_year, advisor_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(student.id)
    .bind(student.user_id)
    .bind(student.student_code.as_str())
    .bind(&student.program_study)
    .bind(student.academic_year.as_ref().map(|y| y.as_str()))
    .bind(student.advisor_id)
    .bind(student.created_at)
    .execute(pool)
    .await?;
    Ok(student)
}
