pub mod content_repository;
pub mod update_documents;

pub use content_repository::MongoAchievementContentRepository;

/// Collection holding achievement content documents.
pub const ACHIEVEMENTS_COLLECTION: &str = "achievements";
