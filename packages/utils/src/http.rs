use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use launchpad_types::Credential;
use subtle::ConstantTimeEq;

/// State for [`verify_bearer`]: the expected token and the realm reported on failure
#[derive(Clone, Debug)]
pub struct BearerAuth {
    pub token: Credential,
    pub realm: String,
}

impl BearerAuth {
    pub fn new(token: Credential, realm: impl Into<String>) -> Self {
        Self {
            token,
            realm: realm.into(),
        }
    }

    fn unauthorized(&self, error: &str, description: &str) -> Response<Body> {
        let mut response = (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        let challenge = format!(
            "Bearer realm=\"{}\", error=\"{}\", error_description=\"{}\"",
            self.realm, error, description
        );
        if let Ok(value) = challenge.parse() {
            response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
        }
        response
    }
}

/// Middleware rejecting requests without the configured bearer token
pub async fn verify_bearer(
    State(auth): State<BearerAuth>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    req: Request,
    next: Next,
) -> Response<Body> {
    match bearer {
        Ok(TypedHeader(Authorization(bearer))) => {
            if bearer.token().as_bytes().ct_eq(auth.token.as_bytes()).into() {
                next.run(req).await
            } else {
                auth.unauthorized("invalid_token", "token_mismatch")
            }
        }
        Err(_) => auth.unauthorized("invalid_request", "invalid_authorization_header"),
    }
}
