use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use serde::Serialize;
use shared::{ErrorCode, ErrorResponse};
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum ApiError {
    #[error("Too many active sessions, try again later")]
    SessionLimit,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::SessionLimit => ErrorCode::SessionLimit,
            ApiError::Internal(_) => ErrorCode::SystemError,
        }
    }

    pub fn status(&self) -> Status {
        Status::from_code(self.code().status()).unwrap_or(Status::InternalServerError)
    }
}

impl From<&ApiError> for shared::Error {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Internal(details) => shared::Error::with_details(err.code(), "An internal server error occurred.", details.clone()),
            other => shared::Error::new(other.code(), other.to_string()),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = ErrorResponse::from(&shared::Error::from(&self));

        rocket::Response::build_from(Json(body).respond_to(req)?)
            .status(status)
            .ok()
    }
}
