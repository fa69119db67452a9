pub mod reference_repository;

pub use reference_repository::AchievementReferenceRepositoryImpl;
