use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    Unauthorized,
    Forbidden,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(resource) => write!(f, "{} not found", resource),
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::Forbidden => write!(f, "Forbidden"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Plain-text body, e.g. "Employee not found".
            ApiError::NotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            // The auth gate answers with status only.
            ApiError::Unauthorized => HttpResponse::Unauthorized().finish(),
            ApiError::Forbidden => HttpResponse::Forbidden().finish(),
        }
    }
}
