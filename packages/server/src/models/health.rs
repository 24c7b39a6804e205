use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Server is running")]
    pub message: String,
    /// Current server time, RFC 3339 with millisecond precision.
    #[schema(example = "2024-05-01T10:15:30.123Z")]
    pub timestamp: String,
}
