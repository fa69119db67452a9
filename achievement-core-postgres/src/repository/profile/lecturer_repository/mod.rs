pub mod repo_impl;
pub mod find_all;
pub mod find_by_id;
pub mod find_by_user_id;

pub use repo_impl::LecturerRepositoryImpl;
