use crate::models::response::ApiErrorResponse;
use crate::services::upstream::UpstreamError;
use crate::services::LookupError;
use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Request},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
    #[error("No country found for code {0}")]
    NotFound(String),
    #[error("Internal Server Error")]
    Upstream(#[source] UpstreamError),
    #[error("Method not allowed, only GET is supported")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(code) => ApiError::NotFound(code),
            LookupError::Upstream(e) => ApiError::Upstream(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream(e) = &self {
            error!("Upstream request failed: {}", e);
        }

        let body = Json(ApiErrorResponse {
            error: self.to_string(),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid("iso2", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid("limit", rejection.body_text())
    }
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// `get` routes also answer HEAD; only GET is served here.
pub async fn reject_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return ApiError::MethodNotAllowed.into_response();
    }
    next.run(request).await
}
