use axum::response::IntoResponse;

use crate::http::error::HttpError;

pub async fn handle_not_found() -> impl IntoResponse {
    HttpError::NotFound.into_response()
}
