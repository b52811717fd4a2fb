use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
