pub mod repo_impl;
pub mod find_all;
pub mod find_by_id;
pub mod find_by_student_ids;
pub mod insert;
pub mod reject;
pub mod soft_delete;
pub mod touch;
pub mod transition_status;
pub mod verify;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AchievementReferenceRepositoryImpl;
