use axum::Json;
use axum::extract::State;
use chrono::Utc;
use common::AssignmentStatus;
use common::records::{GradeUpdate, NewSubmission, SubmissionOrder, SubmissionQuery};
use common::store::{StoreError, expand_submissions};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::assignment::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/assignments/submissions",
    tag = "Assignments",
    operation_id = "listSubmissions",
    summary = "List all assignment submissions",
    responses(
        (status = 200, description = "Every submission with student and course expanded", body = SubmissionListResponse),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<SubmissionListResponse>, AppError> {
    let submissions = state
        .store
        .find_submissions(SubmissionQuery::default())
        .await?;
    let files = expand_submissions(state.store.as_ref(), submissions).await?;

    Ok(Json(SubmissionListResponse {
        success: true,
        files,
    }))
}

#[utoipa::path(
    post,
    path = "/assignments/submit",
    tag = "Assignments",
    operation_id = "submitAssignment",
    summary = "Submit an assignment",
    description = "Records a submission in `submitted` state with 0 of 100 marks. Only the file name is kept.",
    request_body = SubmitAssignmentRequest,
    responses(
        (status = 200, description = "Submission recorded", body = SubmittedAssignmentResponse),
        (status = 400, description = "Malformed payload (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Student or course not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(student_id = %payload.student_id, course_id = payload.course_id))]
pub async fn submit_assignment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitAssignmentRequest>,
) -> Result<Json<SubmittedAssignmentResponse>, AppError> {
    validate_submit_assignment(&payload)?;

    let student = state.store.find_student_by_code(&payload.student_id).await?;
    let course = state.store.find_course(payload.course_id).await?;
    let (Some(student), Some(course)) = (student, course) else {
        return Err(AppError::NotFound("Student or course not found".into()));
    };

    let assignment = state
        .store
        .insert_submission(NewSubmission {
            student_id: student.id,
            course_id: course.id,
            assignment_name: payload.assignment_name,
            original_file_name: payload.file_name,
        })
        .await?;
    info!(id = assignment.id, "Assignment submitted");

    Ok(Json(SubmittedAssignmentResponse {
        success: true,
        message: "Assignment submitted successfully".into(),
        assignment,
    }))
}

#[utoipa::path(
    post,
    path = "/assignments/grade",
    tag = "Assignments",
    operation_id = "gradeAssignment",
    summary = "Grade a submission",
    description = "Sets the marks, stamps the grading time and moves the submission to `graded`. \
        Grading again overwrites the previous grade. Omitted optional fields keep their stored values.",
    request_body = GradeAssignmentRequest,
    responses(
        (status = 200, description = "Submission graded", body = GradedAssignmentResponse),
        (status = 400, description = "Malformed payload (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Assignment not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(assignment_id = payload.assignment_id))]
pub async fn grade_assignment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GradeAssignmentRequest>,
) -> Result<Json<GradedAssignmentResponse>, AppError> {
    validate_grade_assignment(&payload)?;

    let graded = state
        .store
        .grade_submission(
            payload.assignment_id,
            GradeUpdate {
                marks_obtained: payload.marks_obtained,
                total_marks: payload.total_marks,
                feedback: payload.feedback,
                graded_by: payload.graded_by,
                graded_at: Utc::now(),
            },
        )
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => AppError::NotFound("Assignment not found".into()),
            other => other.into(),
        })?;
    info!(marks = graded.marks_obtained, "Assignment graded");

    let assignment = expand_submissions(state.store.as_ref(), vec![graded])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("Graded assignment vanished".into()))?;

    Ok(Json(GradedAssignmentResponse {
        success: true,
        message: "Assignment graded successfully".into(),
        assignment,
    }))
}

#[utoipa::path(
    get,
    path = "/assignments/for-grading",
    tag = "Assignments",
    operation_id = "listForGrading",
    summary = "List submissions awaiting a grade",
    responses(
        (status = 200, description = "Ungraded submissions, newest first", body = ForGradingResponse),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn for_grading(
    State(state): State<AppState>,
) -> Result<Json<ForGradingResponse>, AppError> {
    let pending = state
        .store
        .find_submissions(SubmissionQuery {
            student_id: None,
            status: Some(AssignmentStatus::Submitted),
            order: SubmissionOrder::NewestFirst,
        })
        .await?;
    let assignments = expand_submissions(state.store.as_ref(), pending).await?;

    Ok(Json(ForGradingResponse {
        success: true,
        assignments,
    }))
}
