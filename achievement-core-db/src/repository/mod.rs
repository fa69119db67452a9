pub mod content_repository;
pub mod pagination;
pub mod profile_repository;
pub mod reference_repository;
pub mod token_version_repository;

// Re-exports
pub use content_repository::*;
pub use pagination::*;
pub use profile_repository::*;
pub use reference_repository::*;
pub use token_version_repository::*;
