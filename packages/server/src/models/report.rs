use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::AssignmentStatus;
use common::analytics::ImprovementArea;
use common::records::Course;
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ReportResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: ReportData,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ReportData {
    pub student: ReportStudent,
    pub courses: Vec<Course>,
    pub assignments: Vec<ReportAssignment>,
    pub tests: Vec<ReportTest>,
    pub analytics: ReportAnalytics,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStudent {
    pub name: String,
    /// Public student number.
    pub id: String,
    pub email: String,
    pub completed_courses: usize,
    pub active_courses: usize,
    /// Mean of the assignment and test averages, rounded.
    pub overall_grade: i64,
    pub assignments_completed: usize,
    pub tests_taken: usize,
    pub study_hours: u32,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportAssignment {
    pub id: i32,
    pub title: String,
    pub course: String,
    pub submitted_date: DateTime<Utc>,
    pub score: f64,
    pub status: AssignmentStatus,
    pub max_score: f64,
    pub feedback: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportTest {
    pub id: i32,
    pub title: String,
    pub course: String,
    pub date_taken: DateTime<Utc>,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportAnalytics {
    /// Score counts ordered `[A, B, C, D, F]`.
    #[schema(value_type = Vec<u32>, example = json!([1, 1, 0, 0, 0]))]
    pub grade_distribution: [u32; 5],
    /// Course name to rounded mean score.
    pub subject_performance: BTreeMap<String, i64>,
    pub assignment_average: i64,
    pub test_average: i64,
    pub improvement_areas: Vec<ImprovementArea>,
}
