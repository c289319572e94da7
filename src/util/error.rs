use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::repository::catalog_error::CatalogError;

#[derive(Debug)]
pub enum HandlerErrorKind {
    BadRequest,
    Internal,
}

/// Handler-level failure rendered as a plain HTML error page. Only the
/// message reaches the browser; detail stays in the logs.
#[derive(Debug)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        HandlerError {
            error: HandlerErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl From<CatalogError> for HandlerError {
    fn from(err: CatalogError) -> Self {
        tracing::error!("Catalog error: {}", err);
        HandlerError::internal("Something went wrong. Please try again later.")
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Html(crate::view::pages::render_server_error(&self.message));
        (status, body).into_response()
    }
}
