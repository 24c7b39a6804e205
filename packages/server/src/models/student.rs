use common::records::StudentView;
use serde::Serialize;

/// All students, each with enrolled courses expanded.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StudentListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub students: Vec<StudentView>,
}
