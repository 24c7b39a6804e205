pub mod assignment;
pub mod course;
pub mod dashboard;
pub mod health;
pub mod lookup;
pub mod pages;
pub mod report;
pub mod student;
pub mod test_marks;
