use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use launchpad_form::{InputError, SubmitError};
use launchpad_types::{ErrorResponse, FieldErrorResponse};
use thiserror::Error;

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Not found")]
    NotFound,

    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error("Invalid token submission")]
    InvalidSubmission(Vec<FieldErrorResponse>),

    #[error("Error creating token. Please try again.")]
    SubmitFailed(SubmitError),

    #[error("Internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) | HttpError::InvalidSubmission(_) => StatusCode::BAD_REQUEST,
            HttpError::SubmitFailed(_) => StatusCode::BAD_GATEWAY,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SubmitError> for HttpError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => HttpError::InvalidSubmission(
                errors
                    .into_iter()
                    .map(|(field, err)| FieldErrorResponse {
                        field: field.to_string(),
                        message: err.to_string(),
                    })
                    .collect(),
            ),
            err => HttpError::SubmitFailed(err),
        }
    }
}

impl From<InputError> for HttpError {
    fn from(err: InputError) -> Self {
        HttpError::BadRequest(err.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            HttpError::SubmitFailed(err) => tracing::error!("{}: {}", status, err),
            HttpError::Internal(err) => tracing::error!("{}: {:#}", status, err),
            _ => {}
        }

        let fields = match &self {
            HttpError::InvalidSubmission(fields) => fields.clone(),
            _ => Vec::new(),
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
                fields,
            }),
        )
            .into_response()
    }
}
