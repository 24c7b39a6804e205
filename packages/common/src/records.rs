//! Stored records and the insert/update payloads accepted by a [`Store`](crate::store::Store).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AssignmentStatus;

/// A student enrolled on the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i32,
    /// Public student number, unique.
    #[schema(example = "STU2024001")]
    pub student_id: String,
    #[schema(example = "Alex Johnson")]
    pub name: String,
    #[schema(example = "alex.johnson@brillx.com")]
    pub email: String,
    pub contact: Option<String>,
    /// Identity assigned by the external auth provider, unique.
    #[schema(example = "user_123")]
    pub clerk_user_id: String,
    /// Course ids in enrollment order.
    pub enrolled_courses: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Course {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Advanced Web Development")]
    pub course_name: String,
    /// Unique course code.
    #[schema(example = "AWD101")]
    pub course_code: String,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub batch: Option<String>,
    /// Student ids in enrollment order.
    pub students_enrolled: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

/// Result of a single test sat by a student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestMarks {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    #[schema(example = "Mid-term Assessment")]
    pub test_name: String,
    #[schema(example = 85.0)]
    pub marks_obtained: f64,
    #[schema(example = 100.0)]
    pub total_marks: f64,
    /// Computed once when the marks are recorded.
    #[schema(example = 85.0)]
    pub percentage: f64,
    pub test_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignmentSubmission {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    #[schema(example = "React Component Library")]
    pub assignment_name: String,
    /// Name of the uploaded file. The content itself is never stored.
    #[schema(example = "react-assignment.pdf")]
    pub original_file_name: Option<String>,
    pub file_path: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub feedback: Option<String>,
    pub graded_by: Option<String>,
    pub graded_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug)]
pub struct NewStudent {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub contact: Option<String>,
    pub clerk_user_id: String,
}

#[derive(Clone, Debug, Default)]
pub struct NewCourse {
    pub course_name: String,
    pub course_code: String,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub batch: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NewTestMarks {
    pub student_id: i32,
    pub course_id: i32,
    pub test_name: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub percentage: f64,
}

impl NewTestMarks {
    /// Build a test result, deriving the percentage from the marks.
    pub fn new(
        student_id: i32,
        course_id: i32,
        test_name: impl Into<String>,
        marks_obtained: f64,
        total_marks: f64,
    ) -> Self {
        Self {
            student_id,
            course_id,
            test_name: test_name.into(),
            marks_obtained,
            total_marks,
            percentage: crate::analytics::percentage(marks_obtained, total_marks),
        }
    }
}

/// A fresh submission. Stored as `submitted` with 0 of 100 marks.
#[derive(Clone, Debug)]
pub struct NewSubmission {
    pub student_id: i32,
    pub course_id: i32,
    pub assignment_name: String,
    pub original_file_name: Option<String>,
}

pub const DEFAULT_TOTAL_MARKS: f64 = 100.0;

/// Fields written when a submission is graded.
#[derive(Clone, Debug)]
pub struct GradeUpdate {
    pub marks_obtained: f64,
    /// Keeps the stored total when absent.
    pub total_marks: Option<f64>,
    pub feedback: Option<String>,
    pub graded_by: Option<String>,
    pub graded_at: DateTime<Utc>,
}

impl AssignmentSubmission {
    /// Apply a grade in place, moving the submission to `graded`.
    pub fn apply_grade(&mut self, grade: GradeUpdate) {
        self.marks_obtained = grade.marks_obtained;
        if let Some(total) = grade.total_marks {
            self.total_marks = total;
        }
        if grade.feedback.is_some() {
            self.feedback = grade.feedback;
        }
        if grade.graded_by.is_some() {
            self.graded_by = grade.graded_by;
        }
        self.graded_at = Some(grade.graded_at);
        self.status = AssignmentStatus::Graded;
    }
}

/// Filter for listing submissions.
#[derive(Clone, Debug, Default)]
pub struct SubmissionQuery {
    pub student_id: Option<i32>,
    pub status: Option<AssignmentStatus>,
    pub order: SubmissionOrder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionOrder {
    /// Insertion order.
    #[default]
    Stored,
    /// Most recent `submitted_at` first.
    NewestFirst,
}

/// A reference to another record, either as a bare id or expanded inline.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(i32),
    Record(Box<T>),
}

impl<T> Ref<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            Ref::Id(_) => None,
            Ref::Record(record) => Some(record),
        }
    }
}

/// Student with enrolled courses expanded.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct StudentView {
    pub id: i32,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub contact: Option<String>,
    pub clerk_user_id: String,
    pub enrolled_courses: Vec<Course>,
    pub created_at: DateTime<Utc>,
}

/// Submission with student and course references expanded.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct SubmissionView {
    pub id: i32,
    /// Expanded student, or the bare id if it no longer resolves.
    #[schema(value_type = Object)]
    pub student_id: Ref<Student>,
    /// Expanded course, or the bare id if it no longer resolves.
    #[schema(value_type = Object)]
    pub course_id: Ref<Course>,
    pub assignment_name: String,
    pub original_file_name: Option<String>,
    pub file_path: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub feedback: Option<String>,
    pub graded_by: Option<String>,
    pub graded_at: Option<DateTime<Utc>>,
}

/// Test result with the course reference expanded.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct TestMarksView {
    pub id: i32,
    pub student_id: i32,
    #[schema(value_type = Object)]
    pub course_id: Ref<Course>,
    pub test_name: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub test_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
