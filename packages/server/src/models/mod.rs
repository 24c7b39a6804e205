pub mod assignment;
pub mod course;
pub mod dashboard;
pub mod health;
pub mod report;
pub mod shared;
pub mod student;
pub mod test_marks;
