use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn add_marks_computes_percentage() {
    let app = TestApp::spawn().await;
    let web = app.create_course("AWD101", "Advanced Web Development").await;
    app.create_student("STU1", &[&web]).await;

    let res = app.add_marks("STU1", web.id, "Mid-term Assessment", 85.0).await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["message"], "Test marks added successfully");
    assert_eq!(res.body["testMarks"]["percentage"], 85.0);
    assert_eq!(res.body["testMarks"]["course_id"], web.id);
}

#[tokio::test]
async fn percentage_uses_total_marks() {
    let app = TestApp::spawn().await;
    let web = app.create_course("AWD101", "Advanced Web Development").await;
    app.create_student("STU1", &[&web]).await;

    let res = app
        .post(
            routes::ADD_MARKS,
            &json!({
                "student_id": "STU1",
                "course_id": web.id,
                "test_name": "Quiz",
                "marks_obtained": 18,
                "total_marks": 20,
            }),
        )
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["testMarks"]["percentage"], 90.0);
}

#[tokio::test]
async fn unknown_course_is_404() {
    let app = TestApp::spawn().await;
    app.create_student("STU1", &[]).await;

    let res = app.add_marks("STU1", 7, "Quiz", 50.0).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["message"], "Student or course not found");
}

#[tokio::test]
async fn zero_total_is_400() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::ADD_MARKS,
            &json!({
                "student_id": "STU1",
                "course_id": 1,
                "test_name": "Quiz",
                "marks_obtained": 5,
                "total_marks": 0,
            }),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn student_results_expand_course() {
    let app = TestApp::spawn().await;
    let web = app.create_course("AWD101", "Advanced Web Development").await;
    let data = app.create_course("DSF201", "Data Science Fundamentals").await;
    app.create_student("STU1", &[&web, &data]).await;
    app.create_student("STU2", &[&web]).await;

    app.add_marks("STU1", web.id, "Mid-term", 85.0).await;
    app.add_marks("STU1", data.id, "Analysis", 72.0).await;
    app.add_marks("STU2", web.id, "Mid-term", 60.0).await;

    let res = app.get(&routes::student_tests("STU1")).await;
    assert_eq!(res.status, 200);

    let results = res.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["course_id"]["course_name"], "Advanced Web Development");
    assert_eq!(results[1]["test_name"], "Analysis");
}

#[tokio::test]
async fn results_for_unknown_student_is_404() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::student_tests("GHOST")).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["message"], "Student not found");
}
