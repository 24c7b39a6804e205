use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub course_name: String,
    #[sea_orm(unique)]
    pub course_code: String,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub batch: Option<String>,

    #[sea_orm(has_many, via = "enrollment")]
    pub students: HasMany<super::student::Entity>,

    #[sea_orm(has_many)]
    pub test_marks: HasMany<super::test_marks::Entity>,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::assignment_submission::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
