use std::collections::{BTreeMap, HashMap};

use axum::Json;
use axum::extract::{Path, State};
use common::MetricSource;
use common::analytics::{
    all_scores, average, count_active, count_completed, course_performance, grade_distribution,
    graded_scores, improvement_areas, report_overall_grade, round_score, test_scores,
};
use common::records::{AssignmentSubmission, StudentView, SubmissionQuery, TestMarks};
use common::store::expand_student;
use tracing::instrument;

use super::lookup::{course_name_or_unknown, course_names, student_by_code};
use crate::error::{AppError, ErrorBody};
use crate::models::report::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/student/{student_id}",
    tag = "Reports",
    operation_id = "getStudentReport",
    summary = "Detailed student report",
    description = "All assignments and tests of the student with grade distribution, \
        per-course performance and improvement suggestions.",
    params(("student_id" = String, Path, description = "Public student number")),
    responses(
        (status = 200, description = "Report payload", body = ReportResponse),
        (status = 404, description = "Student not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_report(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<ReportResponse>, AppError> {
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

    let data = build_report(
        student,
        &assignments,
        &tests,
        &names,
        state.metrics.as_ref(),
    );
    Ok(Json(ReportResponse {
        success: true,
        data,
    }))
}

pub fn build_report(
    student: StudentView,
    assignments: &[AssignmentSubmission],
    tests: &[TestMarks],
    names: &HashMap<i32, String>,
    metrics: &dyn MetricSource,
) -> ReportData {
    let assignment_average = average(&graded_scores(assignments));
    let test_average = average(&test_scores(tests));

    let subject_performance: BTreeMap<String, i64> = student
        .enrolled_courses
        .iter()
        .map(|c| {
            (
                c.course_name.clone(),
                course_performance(c.id, assignments, tests),
            )
        })
        .collect();

    // Stored courses carry no progress, so neither count ever moves off zero.
    let stored_progress = || student.enrolled_courses.iter().map(|_| None::<u8>);

    let report_student = ReportStudent {
        name: student.name.clone(),
        id: student.student_id.clone(),
        email: student.email.clone(),
        completed_courses: count_completed(stored_progress()),
        active_courses: count_active(stored_progress()),
        overall_grade: report_overall_grade(assignment_average, test_average),
        assignments_completed: assignments.iter().filter(|a| a.status.is_graded()).count(),
        tests_taken: tests.len(),
        study_hours: metrics.study_hours(),
    };

    let report_assignments = assignments
        .iter()
        .map(|a| ReportAssignment {
            id: a.id,
            title: a.assignment_name.clone(),
            course: course_name_or_unknown(names, a.course_id),
            submitted_date: a.submitted_at,
            score: a.marks_obtained,
            status: a.status,
            max_score: a.total_marks,
            feedback: a.feedback.clone(),
        })
        .collect();
    let report_tests = tests
        .iter()
        .map(|t| ReportTest {
            id: t.id,
            title: t.test_name.clone(),
            course: course_name_or_unknown(names, t.course_id),
            date_taken: t.test_date,
            score: t.marks_obtained,
            max_score: t.total_marks,
            percentage: t.percentage,
        })
        .collect();

    ReportData {
        student: report_student,
        courses: student.enrolled_courses,
        assignments: report_assignments,
        tests: report_tests,
        analytics: ReportAnalytics {
            grade_distribution: grade_distribution(&all_scores(assignments, tests)),
            subject_performance,
            assignment_average: round_score(assignment_average),
            test_average: round_score(test_average),
            improvement_areas: improvement_areas(assignments, tests, |id| names.get(&id).cloned()),
        },
    }
}
