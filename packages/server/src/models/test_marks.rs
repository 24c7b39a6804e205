use common::records::{TestMarks, TestMarksView};
use serde::{Deserialize, Serialize};

use super::shared::{validate_marks_obtained, validate_required, validate_total_marks};
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct AddTestMarksRequest {
    /// Public student number.
    #[schema(example = "STU2024001")]
    pub student_id: String,
    #[schema(example = 1)]
    pub course_id: i32,
    #[schema(example = "Mid-term Assessment")]
    pub test_name: String,
    #[schema(example = 85.0)]
    pub marks_obtained: f64,
    #[schema(example = 100.0)]
    pub total_marks: f64,
}

pub fn validate_add_test_marks(req: &AddTestMarksRequest) -> Result<(), AppError> {
    validate_required("student_id", &req.student_id)?;
    validate_required("test_name", &req.test_name)?;
    validate_marks_obtained(req.marks_obtained)?;
    validate_total_marks(req.total_marks)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TestResultsResponse {
    #[schema(example = true)]
    pub success: bool,
    pub results: Vec<TestMarksView>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TestMarksResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Test marks added successfully")]
    pub message: String,
    #[serde(rename = "testMarks")]
    pub test_marks: TestMarks,
}
