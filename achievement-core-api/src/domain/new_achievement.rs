use achievement_core_db::models::achievement::AchievementContentModel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

/// Payload a student submits to create an achievement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[validate(length(min = 1, max = 50))]
    pub achievement_type: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub details: Map<String, Value>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub points: i32,
}

impl NewAchievement {
    /// Draft content document owned by `student_id`.
    pub fn into_content(self, student_id: Uuid) -> AchievementContentModel {
        let mut content =
            AchievementContentModel::new_draft(student_id, self.achievement_type, self.title);
        content.description = self.description;
        content.details = self.details;
        content.tags = self.tags;
        content.points = self.points;
        content
    }
}
