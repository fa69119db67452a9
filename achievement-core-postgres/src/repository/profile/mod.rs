pub mod lecturer_repository;
pub mod student_repository;

#[cfg(test)]
pub mod test_utils;

pub use lecturer_repository::LecturerRepositoryImpl;
pub use student_repository::StudentRepositoryImpl;
