use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AchievementStatus;

/// # Documentation
/// Relational reference row for one achievement.
///
/// Authoritative for:
/// - Ownership (`student_id` is the student record, not the user account)
/// - Workflow status and the review trail (submitted, verified, rejected)
/// - Visibility: a row in `Deleted` status hides the achievement
///
/// The descriptive payload lives in the document store under `content_ref`
/// and is only ever reached through this row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AchievementReferenceModel {
    pub id: Uuid,

    /// Student record that owns the achievement
    pub student_id: Uuid,

    /// Opaque key of the content document
    pub content_ref: String,

    pub status: AchievementStatus,

    pub submitted_at: Option<DateTime<Utc>>,

    pub verified_at: Option<DateTime<Utc>>,

    /// Lecturer record that verified the achievement
    pub verified_by: Option<Uuid>,

    pub rejection_note: Option<String>,

    pub rejected_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Set once by soft deletion; rows are never removed
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AchievementReferenceModel {
    /// Build a fresh draft reference pointing at an already stored content document.
    pub fn new_draft(student_id: Uuid, content_ref: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            student_id,
            content_ref: content_ref.into(),
            status: AchievementStatus::Draft,
            submitted_at: None,
            verified_at: None,
            verified_by: None,
            rejection_note: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_owned_by(&self, student_id: Uuid) -> bool {
        self.student_id == student_id
    }

    pub fn is_deleted(&self) -> bool {
        self.status == AchievementStatus::Deleted
    }
}
