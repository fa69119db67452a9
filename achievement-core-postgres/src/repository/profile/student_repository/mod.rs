pub mod repo_impl;
pub mod assign_advisor;
pub mod find_by_advisor_id;
pub mod find_by_id;
pub mod find_by_user_id;

pub use repo_impl::StudentRepositoryImpl;
