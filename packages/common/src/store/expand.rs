//! Reference expansion: replace student/course ids with the records they point to.

use std::collections::HashMap;

use super::error::StoreError;
use super::traits::Store;
use crate::records::{
    AssignmentSubmission, Course, Ref, Student, StudentView, SubmissionView, TestMarks,
    TestMarksView,
};

fn unique_ids(ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

async fn course_map(store: &dyn Store, ids: Vec<i32>) -> Result<HashMap<i32, Course>, StoreError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(store
        .find_courses(&ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect())
}

async fn student_map(
    store: &dyn Store,
    ids: Vec<i32>,
) -> Result<HashMap<i32, Student>, StoreError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(store
        .find_students(&ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect())
}

fn resolve<T: Clone>(map: &HashMap<i32, T>, id: i32) -> Ref<T> {
    match map.get(&id) {
        Some(record) => Ref::Record(Box::new(record.clone())),
        None => Ref::Id(id),
    }
}

fn student_view(student: Student, courses: &HashMap<i32, Course>) -> StudentView {
    // Courses that no longer resolve are dropped, keeping enrollment order.
    let enrolled_courses = student
        .enrolled_courses
        .iter()
        .filter_map(|id| courses.get(id).cloned())
        .collect();
    StudentView {
        id: student.id,
        student_id: student.student_id,
        name: student.name,
        email: student.email,
        contact: student.contact,
        clerk_user_id: student.clerk_user_id,
        enrolled_courses,
        created_at: student.created_at,
    }
}

/// Expand the enrolled courses of one student.
pub async fn expand_student(store: &dyn Store, student: Student) -> Result<StudentView, StoreError> {
    let courses = course_map(store, unique_ids(student.enrolled_courses.iter().copied())).await?;
    Ok(student_view(student, &courses))
}

/// Expand the enrolled courses of many students with a single course lookup.
pub async fn expand_students(
    store: &dyn Store,
    students: Vec<Student>,
) -> Result<Vec<StudentView>, StoreError> {
    let ids = unique_ids(
        students
            .iter()
            .flat_map(|s| s.enrolled_courses.iter().copied()),
    );
    let courses = course_map(store, ids).await?;
    Ok(students
        .into_iter()
        .map(|s| student_view(s, &courses))
        .collect())
}

/// Expand the student and course of each submission.
pub async fn expand_submissions(
    store: &dyn Store,
    submissions: Vec<AssignmentSubmission>,
) -> Result<Vec<SubmissionView>, StoreError> {
    let students = student_map(store, unique_ids(submissions.iter().map(|s| s.student_id))).await?;
    let courses = course_map(store, unique_ids(submissions.iter().map(|s| s.course_id))).await?;

    Ok(submissions
        .into_iter()
        .map(|s| SubmissionView {
            id: s.id,
            student_id: resolve(&students, s.student_id),
            course_id: resolve(&courses, s.course_id),
            assignment_name: s.assignment_name,
            original_file_name: s.original_file_name,
            file_path: s.file_path,
            submitted_at: s.submitted_at,
            status: s.status,
            marks_obtained: s.marks_obtained,
            total_marks: s.total_marks,
            feedback: s.feedback,
            graded_by: s.graded_by,
            graded_at: s.graded_at,
        })
        .collect())
}

/// Expand the course of each test result.
pub async fn expand_test_marks(
    store: &dyn Store,
    marks: Vec<TestMarks>,
) -> Result<Vec<TestMarksView>, StoreError> {
    let courses = course_map(store, unique_ids(marks.iter().map(|t| t.course_id))).await?;

    Ok(marks
        .into_iter()
        .map(|t| TestMarksView {
            id: t.id,
            student_id: t.student_id,
            course_id: resolve(&courses, t.course_id),
            test_name: t.test_name,
            marks_obtained: t.marks_obtained,
            total_marks: t.total_marks,
            percentage: t.percentage,
            test_date: t.test_date,
            created_at: t.created_at,
        })
        .collect())
}
