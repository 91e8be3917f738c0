use axum::{http::StatusCode, response::IntoResponse};
use repository::RepositoryError;
use tracing::error;

use crate::not_found;

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    NotFoundError,
    ServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::NotFoundError => not_found::page().into_response(),
            ApiError::ServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::response::Html(format!(
                    "<!doctype html>\n<html><head><title>Internal Server \
                     Error</title></head>\n<body><h1>500 Internal Server \
                     Error</h1>\n<p>{}</p>\n</body></html>\n",
                    message
                )),
            )
                .into_response(),
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{}: {:?}", message, e);
            ApiError::ServerError(message.to_string())
        })
    }
}
