use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of an achievement.
///
/// The relational reference row is authoritative; the copy kept on the
/// content document is a mirror that may lag behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "achievement_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AchievementStatus {
    Draft,
    Submitted,
    Verified,
    Rejected,
    Deleted,
}

impl AchievementStatus {
    /// Whether the regular workflow permits moving from `self` to `next`.
    ///
    /// Administrative deletion bypasses this table and is checked by the
    /// lifecycle engine separately.
    pub fn can_transition_to(self, next: AchievementStatus) -> bool {
        matches!(
            (self, next),
            (AchievementStatus::Draft, AchievementStatus::Submitted)
                | (AchievementStatus::Draft, AchievementStatus::Deleted)
                | (AchievementStatus::Submitted, AchievementStatus::Verified)
                | (AchievementStatus::Submitted, AchievementStatus::Rejected)
        )
    }

    /// Verified, Rejected and Deleted accept no further regular transition.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AchievementStatus::Verified | AchievementStatus::Rejected | AchievementStatus::Deleted
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementStatus::Draft => "draft",
            AchievementStatus::Submitted => "submitted",
            AchievementStatus::Verified => "verified",
            AchievementStatus::Rejected => "rejected",
            AchievementStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for AchievementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(AchievementStatus::Draft),
            "submitted" => Ok(AchievementStatus::Submitted),
            "verified" => Ok(AchievementStatus::Verified),
            "rejected" => Ok(AchievementStatus::Rejected),
            "deleted" => Ok(AchievementStatus::Deleted),
            _ => Err(()),
        }
    }
}
