use common::records::Course;
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct CourseListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub courses: Vec<Course>,
}
