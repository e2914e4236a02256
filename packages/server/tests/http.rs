use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use launchpad_form::{SimulatedSubmitter, SubmitError, TokenSubmitter, SUCCESS_MESSAGE};
use launchpad_server::{
    config::Config,
    http::{server::make_router, state::HttpState},
};
use launchpad_types::{ErrorResponse, FrontendConfig, SubmitReceipt, TokenSubmission};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

const INDEX: &str = "<!doctype html><title>Launchpad</title>";

struct TestHttpApp {
    config: Config,
    submitter: Arc<dyn TokenSubmitter>,
    _static_dir: tempfile::TempDir,
}

impl TestHttpApp {
    fn new() -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(static_dir.path().join("styles.css"), "body {}").unwrap();

        let config = Config {
            static_dir: static_dir.path().to_path_buf(),
            submit_delay_ms: 0,
            ..Default::default()
        };

        Self {
            config,
            submitter: Arc::new(SimulatedSubmitter::new(Duration::ZERO)),
            _static_dir: static_dir,
        }
    }

    fn with_submitter(mut self, submitter: impl TokenSubmitter + 'static) -> Self {
        self.submitter = Arc::new(submitter);
        self
    }

    fn with_bearer_token(mut self, token: &str) -> Self {
        self.config.bearer_token = Some(token.parse().unwrap());
        self
    }

    async fn call(&self, req: Request<Body>) -> Response {
        let state = HttpState::new_with_submitter(self.config.clone(), self.submitter.clone());
        make_router(state).oneshot(req).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.call(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn post_token(&self, body: String, bearer: Option<&str>) -> Response {
        let mut req = Request::builder()
            .method(Method::POST)
            .uri("/api/tokens")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.call(req.body(Body::from(body)).unwrap()).await
    }
}

struct FailingSubmitter;

#[async_trait]
impl TokenSubmitter for FailingSubmitter {
    async fn submit(&self, _submission: TokenSubmission) -> Result<SubmitReceipt, SubmitError> {
        Err(SubmitError::Rejected("factory paused".to_string()))
    }
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn map_response<T: DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn honey() -> serde_json::Value {
    serde_json::json!({
        "tokenName": "Honey",
        "tokenTicker": "HNY",
        "tokenDescription": "sweet",
        "socialMedia": { "twitter": "https://x.com/honey", "telegram": "" },
        "websiteOption": "create",
        "websiteLink": ""
    })
}

#[tokio::test]
async fn http_not_found() {
    let app = TestHttpApp::new();

    let response = app.get("/does_not_exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = map_response(response).await;
    assert_eq!(body.error, "Not found");
}

#[tokio::test]
async fn http_index_and_static_files() {
    let app = TestHttpApp::new();

    let response = app.get("/").await;
    assert!(response.status().is_success());
    assert_eq!(body_bytes(response).await, INDEX.as_bytes());

    let response = app.get("/styles.css").await;
    assert!(response.status().is_success());
    assert_eq!(body_bytes(response).await, b"body {}");
}

#[tokio::test]
async fn http_index_missing() {
    let mut app = TestHttpApp::new();
    app.config.static_dir = app.config.static_dir.join("nope");

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_config() {
    let app = TestHttpApp::new();

    let response = app.get("/config").await;
    assert!(response.status().is_success());

    let config: FrontendConfig = map_response(response).await;
    assert_eq!(config, app.config.frontend);
}

#[tokio::test]
async fn http_config_script() {
    let app = TestHttpApp::new();

    let response = app.get("/config.js").await;
    assert!(response.status().is_success());
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/javascript"));

    let script = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(script.starts_with("const CONFIG = Object.freeze("));
    for key in [
        "TOKEN_FACTORY_ADDRESS",
        "PRICE_FEED_ADDRESS",
        "INITIAL_SUPPLY",
        "CHAIN_ID",
        "NETWORK_NAME",
        "RPC_URL",
        "EXPLORER_URL",
        "CREATION_FEE",
    ] {
        assert!(script.contains(key), "missing {key}");
    }
}

#[tokio::test]
async fn http_openapi() {
    let app = TestHttpApp::new();

    let response = app.get("/api-docs/openapi.json").await;
    assert!(response.status().is_success());

    let doc: serde_json::Value = map_response(response).await;
    assert!(doc["paths"]["/api/tokens"]["post"].is_object());
    assert!(doc["paths"]["/config"]["get"].is_object());
}

#[tokio::test]
async fn http_create_token() {
    let app = TestHttpApp::new();

    let response = app.post_token(honey().to_string(), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let receipt: SubmitReceipt = map_response(response).await;
    assert_eq!(receipt.token_ticker, "HNY");
    assert_eq!(receipt.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn http_create_token_invalid_fields() {
    let app = TestHttpApp::new();

    let mut submission = honey();
    submission["tokenTicker"] = "TOOLONG".into();
    submission["websiteOption"] = "existing".into();
    submission["websiteLink"] = "honey.xyz".into();

    let response = app.post_token(submission.to_string(), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = map_response(response).await;
    let fields: Vec<&str> = body.fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, ["tokenTicker", "websiteLink"]);
}

#[tokio::test]
async fn http_create_token_malformed_body() {
    let app = TestHttpApp::new();

    let response = app.post_token("{not json".to_string(), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = map_response(response).await;
    assert!(body.error.starts_with("Malformed request"));
    assert!(body.fields.is_empty());
}

#[tokio::test]
async fn http_create_token_submitter_fails() {
    let app = TestHttpApp::new().with_submitter(FailingSubmitter);

    let response = app.post_token(honey().to_string(), None).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body: ErrorResponse = map_response(response).await;
    assert_eq!(body.error, "Error creating token. Please try again.");
}

#[tokio::test]
async fn http_create_token_bearer() {
    let app = TestHttpApp::new().with_bearer_token("hunter2");

    let response = app.post_token(honey().to_string(), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.post_token(honey().to_string(), Some("wrong")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.post_token(honey().to_string(), Some("hunter2")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // reads stay public
    let response = app.get("/config").await;
    assert!(response.status().is_success());
}
