use std::time::Duration;

use async_trait::async_trait;
use launchpad_types::{Credential, ErrorResponse, SubmitReceipt, TokenSubmission};
use reqwest::StatusCode;

use crate::{error::SubmitError, form::SUCCESS_MESSAGE};

/// Where a validated submission is handed off to
#[async_trait]
pub trait TokenSubmitter: Send + Sync {
    async fn submit(&self, submission: TokenSubmission) -> Result<SubmitReceipt, SubmitError>;
}

/// Accepts everything after a fixed delay, nothing leaves the process
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl TokenSubmitter for SimulatedSubmitter {
    async fn submit(&self, submission: TokenSubmission) -> Result<SubmitReceipt, SubmitError> {
        tracing::info!(
            "Form data to be submitted: {} ({}), website: {}, logo: {}",
            submission.token_name,
            submission.token_ticker,
            submission.website_option,
            submission.logo.is_some()
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(SubmitReceipt {
            token_ticker: submission.token_ticker,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

/// Posts submissions as json to a launchpad server
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    bearer_token: Option<Credential>,
}

impl HttpSubmitter {
    pub const PATH: &'static str = "api/tokens";

    /// `server` is the base url, e.g. `http://localhost:3000`
    pub fn new(server: &reqwest::Url) -> Result<Self, SubmitError> {
        let mut base = server.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let endpoint = base
            .join(Self::PATH)
            .map_err(|e| SubmitError::Transport(e.into()))?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            bearer_token: None,
        })
    }

    pub fn with_bearer_token(mut self, token: Credential) -> Self {
        self.bearer_token = Some(token);
        self
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

#[async_trait]
impl TokenSubmitter for HttpSubmitter {
    async fn submit(&self, submission: TokenSubmission) -> Result<SubmitReceipt, SubmitError> {
        let mut request = self.client.post(self.endpoint.clone()).json(&submission);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.into()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<SubmitReceipt>()
                .await
                .map_err(|e| SubmitError::Transport(e.into()));
        }

        let body = response.text().await.unwrap_or_default();
        let reason = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(ErrorResponse { error, fields }) if !fields.is_empty() => {
                let fields = fields
                    .into_iter()
                    .map(|field| format!("{}: {}", field.field, field.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{error} ({fields})")
            }
            Ok(ErrorResponse { error, .. }) => error,
            Err(_) if body.is_empty() => status.to_string(),
            Err(_) => body,
        };

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(SubmitError::Rejected(reason))
            }
            _ => Err(SubmitError::Transport(anyhow::anyhow!("{status}: {reason}"))),
        }
    }
}
