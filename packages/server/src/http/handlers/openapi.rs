use axum::{response::IntoResponse, Json};
use launchpad_types::{ErrorResponse, FieldErrorResponse, SubmitReceipt, TokenSubmission};
use utoipa::OpenApi;

use super::*;

#[derive(OpenApi)]
#[openapi(
    paths(config::handle_config, tokens::handle_create_token),
    components(schemas(TokenSubmission, SubmitReceipt, ErrorResponse, FieldErrorResponse)),
    info(
        title = "Launchpad API",
        description = "Configuration and token submission endpoints of the launchpad server"
    )
)]
pub struct ApiDoc;

pub async fn handle_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi()).into_response()
}
