// src/presentation/http/response.rs
use crate::application::{ApplicationResult, ResultCode, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Body of every API response: `{code, msg, data}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: ResultCode,
    pub msg: &'static str,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(code: ResultCode, data: T) -> Self {
        Self {
            code,
            msg: code.message(),
            data,
        }
    }
}

/// Successful outcome, always HTTP 200 with code `SUCCESS`.
#[derive(Debug)]
pub struct ApiResponse<T>(pub T);

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::new(ResultCode::Success, self.0))).into_response()
    }
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: ResultCode,
    data: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ResultCode) -> Self {
        Self {
            status,
            code,
            data: Value::Null,
        }
    }

    /// Rejection for input that could not be decoded at all.
    pub fn invalid_params(reason: impl std::fmt::Display) -> Self {
        tracing::info!(%reason, "rejected malformed request");
        Self::new(StatusCode::BAD_REQUEST, ResultCode::InvalidParams)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }

    pub fn from_error(err: ApplicationError) -> Self {
        let code = err.result_code();
        match err {
            ApplicationError::Validation(violations) => {
                tracing::info!(%violations, "request validation failed");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    code,
                    data: serde_json::to_value(&violations).unwrap_or(Value::Null),
                }
            }
            ApplicationError::NotFound(_) | ApplicationError::Conflict(_) => {
                Self::new(StatusCode::OK, code)
            }
            ApplicationError::Unauthorized(_) => Self::new(StatusCode::UNAUTHORIZED, code),
            ApplicationError::Storage { code, source } => {
                tracing::error!(code = code.code(), error = %source, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, code)
            }
            ApplicationError::Infrastructure { code, message } => {
                tracing::error!(code = code.code(), error = %message, "internal failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, code)
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::new(self.code, self.data))).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

pub trait IntoApiResult<T> {
    fn into_api(self) -> ApiResult<T>;
}

impl<T> IntoApiResult<T> for ApplicationResult<T> {
    fn into_api(self) -> ApiResult<T> {
        self.map(ApiResponse).map_err(ApiError::from_error)
    }
}
