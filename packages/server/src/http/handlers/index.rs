use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::http::{
    error::{HttpError, HttpResult},
    state::HttpState,
};

#[axum::debug_handler]
pub async fn handle_index(State(state): State<HttpState>) -> impl IntoResponse {
    match index_inner(&state).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn index_inner(state: &HttpState) -> HttpResult<String> {
    let path = state.config.static_dir.join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(page),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("No index page at {}", path.display());
            Err(HttpError::NotFound)
        }
        Err(err) => Err(HttpError::Internal(err.into())),
    }
}
