use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lecturer record linked to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LecturerModel {
    pub id: Uuid,

    pub user_id: Uuid,

    /// Campus lecturer number
    pub lecturer_code: HeaplessString<20>,

    pub department: Option<String>,

    pub created_at: DateTime<Utc>,
}
