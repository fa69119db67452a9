use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File attached to an achievement.
///
/// Attachments are appended to the content document and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// What file storage hands back after persisting an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
}

impl FileReference {
    /// Stamp the stored file with the server-side upload time.
    pub fn into_attachment(self, uploaded_at: DateTime<Utc>) -> Attachment {
        Attachment {
            file_name: self.file_name,
            file_url: self.file_url,
            file_type: self.file_type,
            uploaded_at,
        }
    }
}
