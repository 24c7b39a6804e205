use std::net::SocketAddr;
use std::sync::Arc;

use common::FixedMetrics;
use common::records::{Course, NewCourse, NewStudent, Student};
use common::store::{MemoryStore, Store};
use reqwest::Client;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{
    AppConfig, CorsConfig, DatabaseConfig, FrontendConfig, LoggingConfig, SeedConfig,
    ServerConfig,
};
use server::state::AppState;

/// Metrics injected into every test server.
pub const TEST_METRICS: FixedMetrics = FixedMetrics {
    progress: 80,
    study_hours: 30,
};

/// HTML written to the test frontend directory.
pub const DASHBOARD_HTML: &str = "<html><body>dashboard</body></html>";
pub const REPORT_HTML: &str = "<html><body>report</body></html>";
pub const APP_JS: &str = "console.log('brillx');";

pub mod routes {
    pub const COURSES: &str = "/api/courses";
    pub const STUDENTS: &str = "/api/students";
    pub const SUBMISSIONS: &str = "/api/assignments/submissions";
    pub const SUBMIT: &str = "/api/assignments/submit";
    pub const GRADE: &str = "/api/assignments/grade";
    pub const FOR_GRADING: &str = "/api/assignments/for-grading";
    pub const ADD_MARKS: &str = "/api/tests/add-marks";
    pub const HEALTH: &str = "/api/health";

    pub fn student_tests(student_id: &str) -> String {
        format!("/api/tests/student/{student_id}")
    }

    pub fn dashboard(student_id: &str) -> String {
        format!("/api/dashboard/{student_id}")
    }

    pub fn report(student_id: &str) -> String {
        format!("/api/student/{student_id}")
    }
}

/// A running test server over an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    _frontend: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    pub content_type: Option<String>,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            content_type,
            text,
            body,
        }
    }
}

fn write_frontend() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create frontend dir");
    std::fs::write(dir.path().join("dashboard.html"), DASHBOARD_HTML).unwrap();
    std::fs::write(dir.path().join("student_report.html"), REPORT_HTML).unwrap();
    std::fs::create_dir(dir.path().join("js")).unwrap();
    std::fs::write(dir.path().join("js/app.js"), APP_JS).unwrap();
    dir
}

impl TestApp {
    pub async fn spawn() -> Self {
        let frontend = write_frontend();
        let store = Arc::new(MemoryStore::new());

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig {
                url: "memory://".to_string(),
                max_connections: 1,
                min_connections: 1,
            },
            frontend: FrontendConfig {
                dir: frontend.path().to_path_buf(),
            },
            seed: SeedConfig { sample_data: false },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        };

        let state = AppState {
            store: store.clone(),
            metrics: Arc::new(TEST_METRICS),
            config,
        };
        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            store,
            _frontend: frontend,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// POST a raw body with a JSON content type.
    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn create_course(&self, code: &str, name: &str) -> Course {
        self.store
            .insert_course(NewCourse {
                course_name: name.into(),
                course_code: code.into(),
                instructor: Some("Dr. Test".into()),
                ..Default::default()
            })
            .await
            .expect("Failed to insert course")
    }

    /// Insert a student enrolled in `courses`, in order.
    pub async fn create_student(&self, student_id: &str, courses: &[&Course]) -> Student {
        let student = self
            .store
            .insert_student(NewStudent {
                student_id: student_id.into(),
                name: format!("Student {student_id}"),
                email: format!("{}@example.com", student_id.to_lowercase()),
                contact: None,
                clerk_user_id: format!("user_{student_id}"),
            })
            .await
            .expect("Failed to insert student");
        for course in courses {
            self.store
                .enroll(student.id, course.id)
                .await
                .expect("Failed to enroll student");
        }
        student
    }

    /// Submit an assignment over HTTP and return its id.
    pub async fn submit(&self, student_id: &str, course_id: i32, name: &str) -> i64 {
        let res = self
            .post(
                routes::SUBMIT,
                &serde_json::json!({
                    "studentId": student_id,
                    "courseId": course_id,
                    "assignmentName": name,
                    "fileName": format!("{name}.pdf"),
                }),
            )
            .await;
        assert_eq!(res.status, 200, "Submit failed: {}", res.text);
        res.body["assignment"]["id"].as_i64().unwrap()
    }

    pub async fn grade(&self, assignment_id: i64, marks: f64) -> TestResponse {
        self.post(
            routes::GRADE,
            &serde_json::json!({
                "assignmentId": assignment_id,
                "marks_obtained": marks,
                "total_marks": 100,
                "feedback": "Reviewed",
                "graded_by": "Dr. Test",
            }),
        )
        .await
    }

    pub async fn add_marks(
        &self,
        student_id: &str,
        course_id: i32,
        test_name: &str,
        marks: f64,
    ) -> TestResponse {
        self.post(
            routes::ADD_MARKS,
            &serde_json::json!({
                "student_id": student_id,
                "course_id": course_id,
                "test_name": test_name,
                "marks_obtained": marks,
                "total_marks": 100,
            }),
        )
        .await
    }
}
