use axum::Json;
use axum::extract::State;
use common::store::expand_students;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::student::StudentListResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    operation_id = "listStudents",
    summary = "List all students",
    description = "Returns every student with the enrolled courses expanded in enrollment order.",
    responses(
        (status = 200, description = "All students", body = StudentListResponse),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = state.store.list_students().await?;
    let students = expand_students(state.store.as_ref(), students).await?;
    Ok(Json(StudentListResponse {
        success: true,
        students,
    }))
}
