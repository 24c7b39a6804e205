use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use common::analytics::{
    RECENT_LIMIT, completion_rate, count_active, count_completed, dashboard_overall_grade,
};
use common::records::{AssignmentSubmission, StudentView, SubmissionQuery, TestMarks};
use common::MetricSource;
use common::store::expand_student;
use tracing::instrument;

use super::lookup::{course_name_or_unknown, course_names, student_by_code};
use crate::error::{AppError, ErrorBody};
use crate::models::dashboard::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/dashboard/{student_id}",
    tag = "Dashboard",
    operation_id = "getDashboard",
    summary = "Student dashboard",
    description = "Summary card, enrolled courses with simulated progress, the three first \
        assignments and tests, and headline stats. Progress and study hours are simulated \
        and change on every request.",
    params(("student_id" = String, Path, description = "Public student number")),
    responses(
        (status = 200, description = "Dashboard payload", body = DashboardResponse),
        (status = 404, description = "Student not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<DashboardResponse>, AppError> {
    let store = state.store.as_ref();
    let student = student_by_code(store, &student_id).await?;
    let student = expand_student(store, student).await?;

    let assignments = store
        .find_submissions(SubmissionQuery {
            student_id: Some(student.id),
            ..Default::default()
        })
        .await?;
    let tests = store.find_test_marks(student.id).await?;

    let names = course_names(
        store,
        assignments
            .iter()
            .map(|a| a.course_id)
            .chain(tests.iter().map(|t| t.course_id)),
    )
    .await?;

    let data = build_dashboard(
        student,
        &assignments,
        &tests,
        &names,
        state.metrics.as_ref(),
    );
    Ok(Json(DashboardResponse {
        success: true,
        data,
    }))
}

pub fn build_dashboard(
    student: StudentView,
    assignments: &[AssignmentSubmission],
    tests: &[TestMarks],
    names: &HashMap<i32, String>,
    metrics: &dyn MetricSource,
) -> DashboardData {
    let graded = assignments.iter().filter(|a| a.status.is_graded()).count();
    let pending = assignments.len() - graded;
    let overall_grade = dashboard_overall_grade(assignments, tests);

    let total_courses = student.enrolled_courses.len();
    let courses: Vec<CourseProgress> = student
        .enrolled_courses
        .into_iter()
        .map(|course| CourseProgress {
            course,
            progress: metrics.course_progress(),
        })
        .collect();
    let completed_courses = count_completed(courses.iter().map(|c| Some(c.progress)));
    let active_courses = count_active(courses.iter().map(|c| Some(c.progress)));

    let recent_assignments = assignments
        .iter()
        .take(RECENT_LIMIT)
        .map(|a| RecentAssignment {
            name: a.assignment_name.clone(),
            course: course_name_or_unknown(names, a.course_id),
            status: a.status,
            score: a.marks_obtained,
            submitted: a.submitted_at,
        })
        .collect();
    let recent_tests = tests
        .iter()
        .take(RECENT_LIMIT)
        .map(|t| RecentTest {
            name: t.test_name.clone(),
            course: course_name_or_unknown(names, t.course_id),
            score: t.marks_obtained,
            date: t.test_date,
        })
        .collect();

    DashboardData {
        student: DashboardStudent {
            name: student.name,
            id: student.student_id,
            email: student.email,
            completed_courses,
            active_courses,
            overall_grade,
            assignments_completed: graded,
            assignments_pending: pending,
            tests_taken: tests.len(),
            study_hours: metrics.study_hours(),
        },
        courses,
        recent_assignments,
        recent_tests,
        stats: DashboardStats {
            total_courses,
            average_score: overall_grade,
            completion_rate: completion_rate(graded, assignments.len()),
        },
    }
}
