pub mod repo_impl;
pub mod current_version;
pub mod increment;

pub use repo_impl::TokenVersionRepositoryImpl;
