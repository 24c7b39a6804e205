pub mod assignment_submission;
pub mod course;
pub mod enrollment;
pub mod student;
pub mod test_marks;
