//! Update documents sent to the `achievements` collection.
//!
//! Kept apart from the driver calls so the exact `$set`/`$push` shapes can be
//! checked without a server.

use achievement_core_db::models::achievement::{AchievementStatus, Attachment, ContentPatch};
use achievement_core_db::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use mongodb::bson::{doc, to_bson, to_document, Bson, Document};

fn timestamp(at: DateTime<Utc>) -> StoreResult<Bson> {
    to_bson(&at).map_err(StoreError::unavailable)
}

/// `$set` of the fields present in `patch` plus `updatedAt`.
///
/// Absent fields are not serialized, so they keep their stored value.
pub fn patch_update(patch: &ContentPatch, now: DateTime<Utc>) -> StoreResult<Document> {
    let mut set = to_document(patch).map_err(StoreError::unavailable)?;
    set.insert("updatedAt", timestamp(now)?);
    Ok(doc! { "$set": set })
}

pub fn push_attachment(attachment: &Attachment, now: DateTime<Utc>) -> StoreResult<Document> {
    let attachment = to_bson(attachment).map_err(StoreError::unavailable)?;
    let now = timestamp(now)?;
    Ok(doc! {
        "$push": { "attachments": attachment },
        "$set": { "updatedAt": now },
    })
}

pub fn status_update(status: AchievementStatus, now: DateTime<Utc>) -> StoreResult<Document> {
    let now = timestamp(now)?;
    Ok(doc! {
        "$set": { "status": status.as_str(), "updatedAt": now },
    })
}

pub fn soft_delete_update(now: DateTime<Utc>) -> StoreResult<Document> {
    let now = timestamp(now)?;
    Ok(doc! {
        "$set": {
            "status": AchievementStatus::Deleted.as_str(),
            "deletedAt": now.clone(),
            "updatedAt": now,
        },
    })
}
