use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::attachment::Attachment;
use super::status::AchievementStatus;

/// # Documentation
/// Flexible achievement payload kept in the document store.
///
/// Holds the free-form description of an achievement:
/// - Type, title and description
/// - Arbitrary `details` (competition level, organizer, rank, ...)
/// - Tags, points and attachments
///
/// `status` mirrors the reference row for readers of the document store and
/// is never used for authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementContentModel {
    /// Opaque document key; assigned by the document store on insert
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Student record id, as a string
    pub student_id: String,

    pub achievement_type: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Map<String, Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub points: i32,

    /// Always a list, never absent or null
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,

    pub status: AchievementStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AchievementContentModel {
    /// Start a draft document for `student_id` with no attachments.
    pub fn new_draft(
        student_id: Uuid,
        achievement_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            student_id: student_id.to_string(),
            achievement_type: achievement_type.into(),
            title: title.into(),
            description: String::new(),
            details: Map::new(),
            tags: Vec::new(),
            points: 0,
            attachments: Vec::new(),
            status: AchievementStatus::Draft,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
