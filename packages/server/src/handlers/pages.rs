use std::io::ErrorKind;
use std::path::Path;

use axum::body::Body;
use axum::http::header;
use axum::response::Response;
use tracing::instrument;

use crate::error::AppError;

/// Routes answered with a named HTML file from the frontend directory.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "dashboard.html"),
    ("/dashboard.html", "dashboard.html"),
    ("/student_report.html", "student_report.html"),
    ("/grading.html", "grading.html"),
    ("/assignments.html", "assignments.html"),
    ("/test.html", "test.html"),
];

#[instrument(skip(dir))]
pub async fn serve_page(dir: &Path, file: &'static str) -> Result<Response, AppError> {
    let path = dir.join(file);
    let content = match tokio::fs::read(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("Page '{file}' not found")));
        }
        Err(e) => return Err(AppError::Internal(format!("IO error: {e}"))),
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(content))
        .map_err(|e| AppError::Internal(e.to_string()))
}
