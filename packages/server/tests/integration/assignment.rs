use serde_json::json;

use crate::common::{TestApp, routes};

mod submit {
    use super::*;

    #[tokio::test]
    async fn creates_pending_submission() {
        let app = TestApp::spawn().await;
        let web = app.create_course("AWD101", "Advanced Web Development").await;
        let student = app.create_student("STU1", &[&web]).await;

        let res = app
            .post(
                routes::SUBMIT,
                &json!({
                    "studentId": "STU1",
                    "courseId": web.id,
                    "assignmentName": "React Component Library",
                    "fileName": "react.pdf",
                }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["success"], true);
        assert_eq!(res.body["message"], "Assignment submitted successfully");

        let assignment = &res.body["assignment"];
        assert_eq!(assignment["status"], "submitted");
        assert_eq!(assignment["marks_obtained"], 0.0);
        assert_eq!(assignment["total_marks"], 100.0);
        assert_eq!(assignment["original_file_name"], "react.pdf");
        assert_eq!(assignment["student_id"], student.id);
        assert!(assignment["graded_at"].is_null());
    }

    #[tokio::test]
    async fn unknown_student_is_404_and_creates_nothing() {
        let app = TestApp::spawn().await;
        let web = app.create_course("AWD101", "Advanced Web Development").await;

        let res = app
            .post(
                routes::SUBMIT,
                &json!({
                    "studentId": "GHOST",
                    "courseId": web.id,
                    "assignmentName": "Essay",
                }),
            )
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["success"], false);
        assert_eq!(res.body["message"], "Student or course not found");

        let list = app.get(routes::SUBMISSIONS).await;
        assert_eq!(list.body["files"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn unknown_course_is_404_and_creates_nothing() {
        let app = TestApp::spawn().await;
        app.create_student("STU1", &[]).await;

        let res = app
            .post(
                routes::SUBMIT,
                &json!({
                    "studentId": "STU1",
                    "courseId": 999,
                    "assignmentName": "Essay",
                }),
            )
            .await;

        assert_eq!(res.status, 404);
        let list = app.get(routes::SUBMISSIONS).await;
        assert_eq!(list.body["files"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn malformed_payload_is_400() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::SUBMIT,
                &json!({ "studentId": "STU1", "courseId": "one", "assignmentName": "Essay" }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let res = app.post_raw(routes::SUBMIT, "{not json").await;
        assert_eq!(res.status, 400);
    }

    #[tokio::test]
    async fn blank_name_is_400() {
        let app = TestApp::spawn().await;
        let web = app.create_course("AWD101", "Advanced Web Development").await;
        app.create_student("STU1", &[&web]).await;

        let res = app
            .post(
                routes::SUBMIT,
                &json!({ "studentId": "STU1", "courseId": web.id, "assignmentName": "  " }),
            )
            .await;
        assert_eq!(res.status, 400);
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn submissions_expand_student_and_course() {
        let app = TestApp::spawn().await;
        let web = app.create_course("AWD101", "Advanced Web Development").await;
        app.create_student("STU1", &[&web]).await;
        app.submit("STU1", web.id, "Essay").await;

        let res = app.get(routes::SUBMISSIONS).await;
        assert_eq!(res.status, 200);

        let file = &res.body["files"][0];
        assert_eq!(file["student_id"]["student_id"], "STU1");
        assert_eq!(file["course_id"]["course_code"], "AWD101");
    }

    #[tokio::test]
    async fn for_grading_lists_pending_newest_first() {
        let app = TestApp::spawn().await;
        let web = app.create_course("AWD101", "Advanced Web Development").await;
        app.create_student("STU1", &[&web]).await;

        let first = app.submit("STU1", web.id, "First").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        app.submit("STU1", web.id, "Second").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        app.submit("STU1", web.id, "Third").await;
        app.grade(first, 88.0).await;

        let res = app.get(routes::FOR_GRADING).await;
        assert_eq!(res.status, 200);

        let names: Vec<&str> = res.body["assignments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["assignment_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Third", "Second"]);
        assert_eq!(res.body["assignments"][0]["course_id"]["course_code"], "AWD101");
    }
}

mod grading {
    use super::*;

    #[tokio::test]
    async fn grade_sets_status_and_timestamp() {
        let app = TestApp::spawn().await;
        let web = app.create_course("AWD101", "Advanced Web Development").await;
        app.create_student("STU1", &[&web]).await;
        let id = app.submit("STU1", web.id, "Essay").await;

        let res = app.grade(id, 91.0).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["message"], "Assignment graded successfully");

        let assignment = &res.body["assignment"];
        assert_eq!(assignment["status"], "graded");
        assert_eq!(assignment["marks_obtained"], 91.0);
        assert_eq!(assignment["feedback"], "Reviewed");
        assert_eq!(assignment["graded_by"], "Dr. Test");
        assert!(assignment["graded_at"].is_string());
        assert_eq!(assignment["student_id"]["student_id"], "STU1");
    }

    #[tokio::test]
    async fn regrading_overwrites() {
        let app = TestApp::spawn().await;
        let web = app.create_course("AWD101", "Advanced Web Development").await;
        app.create_student("STU1", &[&web]).await;
        let id = app.submit("STU1", web.id, "Essay").await;

        app.grade(id, 40.0).await;
        let res = app
            .post(
                routes::GRADE,
                &json!({ "assignmentId": id, "marks_obtained": 75, "total_marks": 80 }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["assignment"]["marks_obtained"], 75.0);
        assert_eq!(res.body["assignment"]["total_marks"], 80.0);
        assert_eq!(res.body["assignment"]["feedback"], "Reviewed");
    }

    #[tokio::test]
    async fn unknown_assignment_is_404() {
        let app = TestApp::spawn().await;

        let res = app.grade(42, 80.0).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Assignment not found");
    }

    #[tokio::test]
    async fn missing_marks_is_400() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::GRADE, &json!({ "assignmentId": 1 }))
            .await;
        assert_eq!(res.status, 400);
    }
}
