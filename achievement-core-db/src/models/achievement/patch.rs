use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named content fields a draft owner may change.
///
/// Only the fields present are written. `attachments`, `status` and
/// `studentId` cannot be expressed here, so a patch can never clobber them;
/// unknown keys are rejected when the patch is parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        self.achievement_type.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.details.is_none()
            && self.tags.is_none()
            && self.points.is_none()
    }
}
