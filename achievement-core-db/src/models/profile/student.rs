use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # Documentation
/// Student record linked to a user account.
///
/// `advisor_id` is the only edge used to decide which lecturer may verify or
/// reject this student's achievements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentModel {
    pub id: Uuid,

    /// User account that signs in as this student
    pub user_id: Uuid,

    /// Campus student number
    pub student_code: HeaplessString<20>,

    pub program_study: Option<String>,

    pub academic_year: Option<HeaplessString<10>>,

    /// Lecturer record acting as academic advisor
    pub advisor_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
}

impl StudentModel {
    pub fn is_advised_by(&self, lecturer_id: Uuid) -> bool {
        self.advisor_id == Some(lecturer_id)
    }
}
