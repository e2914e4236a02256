use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use launchpad_form::TokenForm;
use launchpad_types::{ErrorResponse, SubmitReceipt, TokenSubmission};

use crate::http::{
    error::{HttpError, HttpResult},
    state::HttpState,
};

#[utoipa::path(
    post,
    path = "/api/tokens",
    request_body = TokenSubmission,
    responses(
        (status = 200, description = "Token creation initiated", body = SubmitReceipt),
        (status = 400, description = "Malformed or invalid submission", body = ErrorResponse),
        (status = 401, description = "Missing or wrong bearer token"),
        (status = 502, description = "Token creation failed", body = ErrorResponse)
    ),
    description = "Validates a token submission with the form rules and hands it on for creation"
)]
#[axum::debug_handler]
pub async fn handle_create_token(
    State(state): State<HttpState>,
    req: Result<Json<TokenSubmission>, JsonRejection>,
) -> impl IntoResponse {
    let req = match req {
        Ok(Json(req)) => req,
        Err(rejection) => return HttpError::BadRequest(rejection.body_text()).into_response(),
    };

    match create_token_inner(&state, req).await {
        Ok(receipt) => Json(receipt).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn create_token_inner(state: &HttpState, req: TokenSubmission) -> HttpResult<SubmitReceipt> {
    // each request gets its own form, so the rules are the ones the page applies
    let mut form = TokenForm::from_submission(&req)?;

    let receipt = form.submit(state.submitter.as_ref()).await?;

    tracing::info!("Accepted token {}", receipt.token_ticker);

    Ok(receipt)
}
