use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::course::CourseListResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    operation_id = "listCourses",
    summary = "List all courses",
    responses(
        (status = 200, description = "All courses in insertion order", body = CourseListResponse),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, AppError> {
    let courses = state.store.list_courses().await?;
    Ok(Json(CourseListResponse {
        success: true,
        courses,
    }))
}
