pub mod lecturer;
pub mod student;

pub use lecturer::LecturerModel;
pub use student::StudentModel;
