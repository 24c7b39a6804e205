use common::records::{AssignmentSubmission, SubmissionView};
use serde::{Deserialize, Serialize};

use super::shared::{validate_marks_obtained, validate_required, validate_total_marks};
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssignmentRequest {
    /// Public student number.
    #[schema(example = "STU2024001")]
    pub student_id: String,
    #[schema(example = 1)]
    pub course_id: i32,
    #[schema(example = "React Component Library")]
    pub assignment_name: String,
    /// Name of the uploaded file. Only the name is recorded.
    #[schema(example = "react-assignment.pdf")]
    pub file_name: Option<String>,
}

pub fn validate_submit_assignment(req: &SubmitAssignmentRequest) -> Result<(), AppError> {
    validate_required("studentId", &req.student_id)?;
    validate_required("assignmentName", &req.assignment_name)
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct GradeAssignmentRequest {
    #[serde(rename = "assignmentId")]
    #[schema(example = 1)]
    pub assignment_id: i32,
    #[schema(example = 88.0)]
    pub marks_obtained: f64,
    /// Keeps the stored total when omitted.
    #[schema(example = 100.0)]
    pub total_marks: Option<f64>,
    #[schema(example = "Clear structure, missing tests.")]
    pub feedback: Option<String>,
    #[schema(example = "Dr. Sarah Johnson")]
    pub graded_by: Option<String>,
}

pub fn validate_grade_assignment(req: &GradeAssignmentRequest) -> Result<(), AppError> {
    validate_marks_obtained(req.marks_obtained)?;
    if let Some(total) = req.total_marks {
        validate_total_marks(total)?;
    }
    Ok(())
}

/// All submissions with student and course expanded.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmissionListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub files: Vec<SubmissionView>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmittedAssignmentResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Assignment submitted successfully")]
    pub message: String,
    pub assignment: AssignmentSubmission,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct GradedAssignmentResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Assignment graded successfully")]
    pub message: String,
    pub assignment: SubmissionView,
}

/// Submissions awaiting a grade, newest first.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ForGradingResponse {
    #[schema(example = true)]
    pub success: bool,
    pub assignments: Vec<SubmissionView>,
}
