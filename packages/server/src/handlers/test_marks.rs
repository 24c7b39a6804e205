use axum::Json;
use axum::extract::{Path, State};
use common::records::NewTestMarks;
use common::store::expand_test_marks;
use tracing::{info, instrument};

use super::lookup::student_by_code;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::test_marks::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/tests/student/{student_id}",
    tag = "Tests",
    operation_id = "listStudentTests",
    summary = "List a student's test results",
    params(("student_id" = String, Path, description = "Public student number")),
    responses(
        (status = 200, description = "Test results with course expanded", body = TestResultsResponse),
        (status = 404, description = "Student not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn student_tests(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<TestResultsResponse>, AppError> {
    let student = student_by_code(state.store.as_ref(), &student_id).await?;
    let marks = state.store.find_test_marks(student.id).await?;
    let results = expand_test_marks(state.store.as_ref(), marks).await?;

    Ok(Json(TestResultsResponse {
        success: true,
        results,
    }))
}

#[utoipa::path(
    post,
    path = "/tests/add-marks",
    tag = "Tests",
    operation_id = "addTestMarks",
    summary = "Record a test result",
    description = "Stores the marks together with a percentage computed once from them.",
    request_body = AddTestMarksRequest,
    responses(
        (status = 200, description = "Marks recorded", body = TestMarksResponse),
        (status = 400, description = "Malformed payload (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Student or course not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(student_id = %payload.student_id, course_id = payload.course_id))]
pub async fn add_test_marks(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddTestMarksRequest>,
) -> Result<Json<TestMarksResponse>, AppError> {
    validate_add_test_marks(&payload)?;

    let student = state.store.find_student_by_code(&payload.student_id).await?;
    let course = state.store.find_course(payload.course_id).await?;
    let (Some(student), Some(course)) = (student, course) else {
        return Err(AppError::NotFound("Student or course not found".into()));
    };

    let test_marks = state
        .store
        .insert_test_marks(NewTestMarks::new(
            student.id,
            course.id,
            payload.test_name,
            payload.marks_obtained,
            payload.total_marks,
        ))
        .await?;
    info!(id = test_marks.id, percentage = test_marks.percentage, "Test marks recorded");

    Ok(Json(TestMarksResponse {
        success: true,
        message: "Test marks added successfully".into(),
        test_marks,
    }))
}
