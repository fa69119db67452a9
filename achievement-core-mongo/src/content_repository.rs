use achievement_core_db::models::achievement::{
    AchievementContentModel, AchievementStatus, Attachment, ContentPatch,
};
use achievement_core_db::repository::AchievementContentRepository;
use achievement_core_db::{StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection, Database};
use tracing::debug;

use crate::update_documents::{patch_update, push_attachment, soft_delete_update, status_update};
use crate::ACHIEVEMENTS_COLLECTION;

/// Content documents in the `achievements` collection.
///
/// Document keys are ObjectId hex strings generated on insert and handed
/// back as the reference's `content_ref`.
#[derive(Clone)]
pub struct MongoAchievementContentRepository {
    collection: Collection<AchievementContentModel>,
}

impl MongoAchievementContentRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ACHIEVEMENTS_COLLECTION),
        }
    }

    /// Connect to `uri` and use `database_name`.
    pub async fn connect(uri: &str, database_name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await.map_err(StoreError::unavailable)?;
        Ok(Self::new(&client.database(database_name)))
    }

    async fn update_existing(&self, content_ref: &str, update: Document) -> StoreResult<()> {
        let result = self
            .collection
            .update_one(doc! { "_id": content_ref }, update)
            .await
            .map_err(StoreError::unavailable)?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound(format!("achievement content {content_ref}")));
        }
        Ok(())
    }
}

#[async_trait]
impl AchievementContentRepository for MongoAchievementContentRepository {
    async fn insert(&self, mut content: AchievementContentModel) -> StoreResult<String> {
        content.id = ObjectId::new().to_hex();
        self.collection
            .insert_one(&content)
            .await
            .map_err(StoreError::unavailable)?;

        debug!(content_ref = %content.id, "achievement content inserted");
        Ok(content.id)
    }

    async fn find_by_ref(&self, content_ref: &str) -> StoreResult<Option<AchievementContentModel>> {
        self.collection
            .find_one(doc! { "_id": content_ref })
            .await
            .map_err(StoreError::unavailable)
    }

    async fn partial_update(&self, content_ref: &str, patch: &ContentPatch) -> StoreResult<()> {
        self.update_existing(content_ref, patch_update(patch, Utc::now())?).await
    }

    async fn append_attachment(&self, content_ref: &str, attachment: &Attachment) -> StoreResult<()> {
        self.update_existing(content_ref, push_attachment(attachment, Utc::now())?).await
    }

    async fn mark_status(&self, content_ref: &str, status: AchievementStatus) -> StoreResult<()> {
        self.update_existing(content_ref, status_update(status, Utc::now())?).await
    }

    async fn soft_delete(&self, content_ref: &str) -> StoreResult<()> {
        self.update_existing(content_ref, soft_delete_update(Utc::now())?).await
    }
}
