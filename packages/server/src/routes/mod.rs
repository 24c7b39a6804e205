use std::path::Path;

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower_http::services::ServeDir;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

/// JSON API, mounted under `/api`.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::course::list_courses))
        .routes(routes!(handlers::student::list_students))
        .routes(routes!(handlers::assignment::list_submissions))
        .routes(routes!(handlers::assignment::submit_assignment))
        .routes(routes!(handlers::assignment::grade_assignment))
        .routes(routes!(handlers::assignment::for_grading))
        .routes(routes!(handlers::test_marks::student_tests))
        .routes(routes!(handlers::test_marks::add_test_marks))
        .routes(routes!(handlers::dashboard::get_dashboard))
        .routes(routes!(handlers::report::get_report))
        .routes(routes!(handlers::health::health))
}

/// Named HTML pages plus every other file under `frontend_dir`.
pub fn page_routes(frontend_dir: &Path) -> Router<AppState> {
    let mut router = Router::new();
    for &(route, file) in handlers::pages::PAGES {
        router = router.route(
            route,
            get(move |State(state): State<AppState>| async move {
                handlers::pages::serve_page(&state.config.frontend.dir, file).await
            }),
        );
    }
    router.fallback_service(ServeDir::new(frontend_dir))
}
