use std::collections::HashMap;

use common::records::Student;
use common::store::Store;

use crate::error::AppError;

/// Course name shown when a referenced course no longer resolves.
pub const UNKNOWN_COURSE: &str = "Unknown";

/// Find a student by public student number, or fail with 404.
pub async fn student_by_code(store: &dyn Store, student_id: &str) -> Result<Student, AppError> {
    store
        .find_student_by_code(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))
}

/// Names of the given courses, keyed by id. Unknown ids are absent.
pub async fn course_names(
    store: &dyn Store,
    ids: impl IntoIterator<Item = i32>,
) -> Result<HashMap<i32, String>, AppError> {
    let mut ids: Vec<i32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(store
        .find_courses(&ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c.course_name))
        .collect())
}

pub fn course_name_or_unknown(names: &HashMap<i32, String>, id: i32) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_COURSE.to_string())
}
