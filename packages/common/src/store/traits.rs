use async_trait::async_trait;

use super::error::StoreError;
use crate::records::{
    AssignmentSubmission, Course, GradeUpdate, NewCourse, NewStudent, NewSubmission,
    NewTestMarks, Student, SubmissionQuery, TestMarks,
};

/// Record storage for students, courses, test marks and assignment submissions.
///
/// Every write touches a single record in a single collection. There are no
/// transactions; callers check references before inserting.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a course. Fails with [`StoreError::Validation`] on a duplicate code.
    async fn insert_course(&self, course: NewCourse) -> Result<Course, StoreError>;

    /// All courses in insertion order.
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>;

    async fn find_course(&self, id: i32) -> Result<Option<Course>, StoreError>;

    /// Courses with the given ids. Unknown ids are skipped; order is unspecified.
    async fn find_courses(&self, ids: &[i32]) -> Result<Vec<Course>, StoreError>;

    /// Insert a student. Fails with [`StoreError::Validation`] when the
    /// student id, email or external identity is already taken.
    async fn insert_student(&self, student: NewStudent) -> Result<Student, StoreError>;

    /// All students in insertion order.
    async fn list_students(&self) -> Result<Vec<Student>, StoreError>;

    async fn find_student(&self, id: i32) -> Result<Option<Student>, StoreError>;

    /// Look a student up by public student number.
    async fn find_student_by_code(&self, student_id: &str) -> Result<Option<Student>, StoreError>;

    /// Students with the given ids. Unknown ids are skipped; order is unspecified.
    async fn find_students(&self, ids: &[i32]) -> Result<Vec<Student>, StoreError>;

    /// Append `course_id` to the student's courses and the student to the
    /// course's roster. Enrolling twice is a no-op.
    async fn enroll(&self, student_id: i32, course_id: i32) -> Result<(), StoreError>;

    async fn insert_test_marks(&self, marks: NewTestMarks) -> Result<TestMarks, StoreError>;

    /// Test results for a student in insertion order.
    async fn find_test_marks(&self, student_id: i32) -> Result<Vec<TestMarks>, StoreError>;

    /// Insert a submission in the `submitted` state.
    async fn insert_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<AssignmentSubmission, StoreError>;

    async fn find_submission(&self, id: i32) -> Result<Option<AssignmentSubmission>, StoreError>;

    async fn find_submissions(
        &self,
        query: SubmissionQuery,
    ) -> Result<Vec<AssignmentSubmission>, StoreError>;

    /// Record a grade. Fails with [`StoreError::NotFound`] for an unknown id.
    async fn grade_submission(
        &self,
        id: i32,
        grade: GradeUpdate,
    ) -> Result<AssignmentSubmission, StoreError>;
}
