//! The SeaORM store against a throwaway SQLite file.

use std::sync::Arc;

use common::AssignmentStatus;
use common::records::{
    GradeUpdate, NewCourse, NewStudent, NewSubmission, NewTestMarks, SubmissionOrder,
    SubmissionQuery,
};
use common::store::{Store, StoreError};
use tempfile::TempDir;

use server::config::DatabaseConfig;

async fn sqlite_store() -> (TempDir, Arc<dyn Store>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("brillx.db").display());
    let store = server::store::connect(&DatabaseConfig {
        url,
        max_connections: 1,
        min_connections: 1,
    })
    .await
    .expect("Failed to open SQLite store");
    (dir, store)
}

fn course(code: &str, name: &str) -> NewCourse {
    NewCourse {
        course_name: name.into(),
        course_code: code.into(),
        ..Default::default()
    }
}

fn student(code: &str) -> NewStudent {
    NewStudent {
        student_id: code.into(),
        name: format!("Student {code}"),
        email: format!("{code}@example.com"),
        contact: None,
        clerk_user_id: format!("user_{code}"),
    }
}

#[tokio::test]
async fn enrollment_keeps_order_both_ways() {
    let (_dir, store) = sqlite_store().await;
    let ml = store.insert_course(course("ML301", "Machine Learning")).await.unwrap();
    let web = store.insert_course(course("AWD101", "Web")).await.unwrap();
    let a = store.insert_student(student("STU1")).await.unwrap();
    let b = store.insert_student(student("STU2")).await.unwrap();

    store.enroll(a.id, web.id).await.unwrap();
    store.enroll(a.id, ml.id).await.unwrap();
    store.enroll(b.id, web.id).await.unwrap();
    store.enroll(a.id, web.id).await.unwrap();

    let a = store.find_student_by_code("STU1").await.unwrap().unwrap();
    assert_eq!(a.enrolled_courses, [web.id, ml.id]);

    let web = store.find_course(web.id).await.unwrap().unwrap();
    assert_eq!(web.students_enrolled, [a.id, b.id]);

    let err = store.enroll(a.id, 999).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_course_code_is_a_validation_error() {
    let (_dir, store) = sqlite_store().await;
    store.insert_course(course("AWD101", "Web")).await.unwrap();

    let err = store
        .insert_course(course("AWD101", "Web again"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)), "{err:?}");
}

#[tokio::test]
async fn duplicate_email_is_a_validation_error() {
    let (_dir, store) = sqlite_store().await;
    store.insert_student(student("STU1")).await.unwrap();

    let mut dup = student("STU2");
    dup.email = "STU1@example.com".into();
    let err = store.insert_student(dup).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)), "{err:?}");
}

#[tokio::test]
async fn test_marks_round_trip_with_percentage() {
    let (_dir, store) = sqlite_store().await;
    let web = store.insert_course(course("AWD101", "Web")).await.unwrap();
    let s = store.insert_student(student("STU1")).await.unwrap();

    store
        .insert_test_marks(NewTestMarks::new(s.id, web.id, "Quiz", 18.0, 20.0))
        .await
        .unwrap();

    let marks = store.find_test_marks(s.id).await.unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].percentage, 90.0);
    assert!(store.find_test_marks(s.id + 1).await.unwrap().is_empty());
}

#[tokio::test]
async fn submissions_filter_sort_and_grade() {
    let (_dir, store) = sqlite_store().await;
    let web = store.insert_course(course("AWD101", "Web")).await.unwrap();
    let s = store.insert_student(student("STU1")).await.unwrap();

    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        let sub = store
            .insert_submission(NewSubmission {
                student_id: s.id,
                course_id: web.id,
                assignment_name: name.into(),
                original_file_name: None,
            })
            .await
            .unwrap();
        assert_eq!(sub.status, AssignmentStatus::Submitted);
        assert_eq!(sub.total_marks, 100.0);
        ids.push(sub.id);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let graded = store
        .grade_submission(
            ids[0],
            GradeUpdate {
                marks_obtained: 64.0,
                total_marks: None,
                feedback: Some("Needs references".into()),
                graded_by: None,
                graded_at: chrono::Utc::now(),
            },
        )
        .await
        .unwrap();
    assert_eq!(graded.status, AssignmentStatus::Graded);
    assert_eq!(graded.total_marks, 100.0);
    assert!(graded.graded_at.is_some());

    let pending = store
        .find_submissions(SubmissionQuery {
            student_id: None,
            status: Some(AssignmentStatus::Submitted),
            order: SubmissionOrder::NewestFirst,
        })
        .await
        .unwrap();
    let names: Vec<_> = pending.iter().map(|s| s.assignment_name.as_str()).collect();
    assert_eq!(names, ["Third", "Second"]);

    let err = store
        .grade_submission(
            999,
            GradeUpdate {
                marks_obtained: 1.0,
                total_marks: None,
                feedback: None,
                graded_by: None,
                graded_at: chrono::Utc::now(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn seeding_works_against_sqlite() {
    let (_dir, store) = sqlite_store().await;

    assert!(server::seed::seed_sample_data(store.as_ref()).await.unwrap());
    assert!(!server::seed::seed_sample_data(store.as_ref()).await.unwrap());

    let courses = store.list_courses().await.unwrap();
    let codes: Vec<_> = courses.iter().map(|c| c.course_code.as_str()).collect();
    assert_eq!(codes, ["AWD101", "DSF201", "ML301"]);
}
