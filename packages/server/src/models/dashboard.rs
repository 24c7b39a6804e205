use chrono::{DateTime, Utc};
use common::AssignmentStatus;
use common::records::Course;
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct DashboardResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: DashboardData,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub student: DashboardStudent,
    pub courses: Vec<CourseProgress>,
    pub recent_assignments: Vec<RecentAssignment>,
    pub recent_tests: Vec<RecentTest>,
    pub stats: DashboardStats,
}

/// Student summary card.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStudent {
    #[schema(example = "Alex Johnson")]
    pub name: String,
    /// Public student number.
    #[schema(example = "STU2024001")]
    pub id: String,
    pub email: String,
    pub completed_courses: usize,
    pub active_courses: usize,
    /// Rounded mean of all graded assignment and test scores.
    #[schema(example = 83)]
    pub overall_grade: i64,
    pub assignments_completed: usize,
    pub assignments_pending: usize,
    pub tests_taken: usize,
    #[schema(example = 34)]
    pub study_hours: u32,
}

/// An enrolled course with its simulated progress.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CourseProgress {
    #[serde(flatten)]
    pub course: Course,
    #[schema(example = 82)]
    pub progress: u8,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RecentAssignment {
    pub name: String,
    /// Course name, or `Unknown`.
    pub course: String,
    pub status: AssignmentStatus,
    pub score: f64,
    pub submitted: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RecentTest {
    pub name: String,
    /// Course name, or `Unknown`.
    pub course: String,
    pub score: f64,
    pub date: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_courses: usize,
    pub average_score: i64,
    /// Graded share of all submissions, in percent.
    #[schema(example = 50)]
    pub completion_rate: i64,
}
