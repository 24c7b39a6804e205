use common::AssignmentStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub student_id: i32,
    #[sea_orm(belongs_to, from = "student_id", to = "id")]
    pub student: HasOne<super::student::Entity>,

    pub course_id: i32,
    #[sea_orm(belongs_to, from = "course_id", to = "id")]
    pub course: HasOne<super::course::Entity>,

    pub assignment_name: String,
    /// Name of the uploaded file; the content is not kept.
    pub original_file_name: Option<String>,
    pub file_path: Option<String>,
    pub submitted_at: DateTimeUtc,
    pub status: AssignmentStatus,
    pub marks_obtained: f64,
    pub total_marks: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub graded_by: Option<String>,
    pub graded_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}
