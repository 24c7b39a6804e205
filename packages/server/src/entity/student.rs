use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Public student number, e.g. "STU2024001".
    #[sea_orm(unique)]
    pub student_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub contact: Option<String>,
    /// Identity from the external auth provider.
    #[sea_orm(unique)]
    pub clerk_user_id: String,

    #[sea_orm(has_many, via = "enrollment")]
    pub courses: HasMany<super::course::Entity>,

    #[sea_orm(has_many)]
    pub test_marks: HasMany<super::test_marks::Entity>,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::assignment_submission::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
