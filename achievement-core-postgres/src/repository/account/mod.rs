pub mod token_version_repository;

pub use token_version_repository::TokenVersionRepositoryImpl;
