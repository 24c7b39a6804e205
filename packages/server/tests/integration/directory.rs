use crate::common::{TestApp, routes};

#[tokio::test]
async fn courses_are_listed_in_insertion_order() {
    let app = TestApp::spawn().await;
    app.create_course("AWD101", "Advanced Web Development").await;
    app.create_course("DSF201", "Data Science Fundamentals").await;

    let res = app.get(routes::COURSES).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["success"], true);

    let codes: Vec<&str> = res.body["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["course_code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["AWD101", "DSF201"]);
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::COURSES).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["courses"].as_array().unwrap().len(), 0);

    let res = app.get(routes::STUDENTS).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["students"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn students_embed_enrolled_courses() {
    let app = TestApp::spawn().await;
    let web = app.create_course("AWD101", "Advanced Web Development").await;
    let ml = app.create_course("ML301", "Machine Learning").await;
    app.create_student("STU1", &[&ml, &web]).await;

    let res = app.get(routes::STUDENTS).await;
    assert_eq!(res.status, 200);

    let student = &res.body["students"][0];
    assert_eq!(student["student_id"], "STU1");
    let names: Vec<&str> = student["enrolled_courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["course_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Machine Learning", "Advanced Web Development"]);
}

#[tokio::test]
async fn course_roster_tracks_enrollment() {
    let app = TestApp::spawn().await;
    let web = app.create_course("AWD101", "Advanced Web Development").await;
    let a = app.create_student("STU1", &[&web]).await;
    let b = app.create_student("STU2", &[&web]).await;

    let res = app.get(routes::COURSES).await;
    let roster: Vec<i64> = res.body["courses"][0]["students_enrolled"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(roster, [a.id as i64, b.id as i64]);
}
