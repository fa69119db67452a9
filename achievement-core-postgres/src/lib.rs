pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::account::TokenVersionRepositoryImpl;
pub use repository::achievement::AchievementReferenceRepositoryImpl;
pub use repository::profile::{LecturerRepositoryImpl, StudentRepositoryImpl};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helper;
