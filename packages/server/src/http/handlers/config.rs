use axum::{extract::State, http::header, response::IntoResponse, Json};
use launchpad_types::FrontendConfig;

use crate::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "Settings shared with the browser UI", body = FrontendConfig),
    ),
    description = "Returns the frontend configuration as JSON"
)]
#[axum::debug_handler]
pub async fn handle_config(State(state): State<HttpState>) -> impl IntoResponse {
    Json(state.config.frontend.clone()).into_response()
}

/// Same settings as `/config`, as a script defining the `CONFIG` global
#[axum::debug_handler]
pub async fn handle_config_script(State(state): State<HttpState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        state.config.frontend.to_browser_script(),
    )
        .into_response()
}
