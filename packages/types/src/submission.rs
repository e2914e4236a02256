use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether the token ships with a website the creator already has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteOption {
    /// "I have an existing website"
    Existing,
    /// "I will create a website later"
    Create,
}

impl WebsiteOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebsiteOption::Existing => "existing",
            WebsiteOption::Create => "create",
        }
    }
}

impl std::fmt::Display for WebsiteOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WebsiteOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "existing" => Ok(WebsiteOption::Existing),
            "create" => Ok(WebsiteOption::Create),
            other => Err(format!("unknown website option: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialMedia {
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub telegram: String,
}

/// Everything the token creation form collects, as handed off on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenSubmission {
    pub token_name: String,
    pub token_ticker: String,
    pub token_description: String,
    #[serde(default)]
    pub social_media: SocialMedia,
    pub website_option: WebsiteOption,
    #[serde(default)]
    pub website_link: String,
    /// `data:<mime>;base64,<payload>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// What a submitter hands back once a submission has been accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    pub token_ticker: String,
    pub message: String,
}

/// A single field that failed validation, as reported back over http
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

/// Body of every non-2xx json response from the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldErrorResponse>,
}
