use achievement_core_db::models::achievement::{
    AchievementContentModel, AchievementReferenceModel, AchievementStatus,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A reference row together with the content it points at.
///
/// `content` is `None` when the document store has no document for the
/// reference; the reference alone still decides visibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDetail {
    pub reference: AchievementReferenceModel,
    pub content: Option<AchievementContentModel>,
}

/// One step in an achievement's review trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    pub status: AchievementStatus,
    pub at: DateTime<Utc>,
    /// Lecturer record that acted, when recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StatusEvent {
    fn new(status: AchievementStatus, at: DateTime<Utc>) -> Self {
        Self {
            status,
            at,
            actor: None,
            note: None,
        }
    }

    /// Rebuild the trail from the timestamps on a reference row.
    pub fn timeline(reference: &AchievementReferenceModel) -> Vec<StatusEvent> {
        let mut events = vec![StatusEvent::new(AchievementStatus::Draft, reference.created_at)];

        if let Some(at) = reference.submitted_at {
            events.push(StatusEvent::new(AchievementStatus::Submitted, at));
        }

        if let Some(at) = reference.verified_at {
            events.push(StatusEvent {
                actor: reference.verified_by,
                ..StatusEvent::new(AchievementStatus::Verified, at)
            });
        }

        if let Some(at) = reference.rejected_at {
            events.push(StatusEvent {
                note: reference.rejection_note.clone(),
                ..StatusEvent::new(AchievementStatus::Rejected, at)
            });
        }

        if let Some(at) = reference.deleted_at {
            events.push(StatusEvent::new(AchievementStatus::Deleted, at));
        }

        events
    }
}
