use std::{fmt, str::FromStr};

use crate::validation::ValidationError;

/// Every input the token creation form tracks, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    TokenName,
    TokenTicker,
    TokenDescription,
    TwitterLink,
    TelegramLink,
    WebsiteOption,
    WebsiteLink,
    Logo,
}

/// What kind of value a field holds, which decides the checks applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Ticker,
    Url,
    Choice,
    File,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::TokenName,
        FieldId::TokenTicker,
        FieldId::TokenDescription,
        FieldId::TwitterLink,
        FieldId::TelegramLink,
        FieldId::WebsiteOption,
        FieldId::WebsiteLink,
        FieldId::Logo,
    ];

    /// The element id used by the web form and in field error reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::TokenName => "tokenName",
            FieldId::TokenTicker => "tokenTicker",
            FieldId::TokenDescription => "tokenDescription",
            FieldId::TwitterLink => "twitterLink",
            FieldId::TelegramLink => "telegramLink",
            FieldId::WebsiteOption => "websiteOption",
            FieldId::WebsiteLink => "websiteLink",
            FieldId::Logo => "logoUpload",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::TokenName | FieldId::TokenDescription => FieldKind::Text,
            FieldId::TokenTicker => FieldKind::Ticker,
            FieldId::TwitterLink | FieldId::TelegramLink | FieldId::WebsiteLink => FieldKind::Url,
            FieldId::WebsiteOption => FieldKind::Choice,
            FieldId::Logo => FieldKind::File,
        }
    }

    /// The website link is the only field whose requirement changes afterwards.
    /// An unset website choice means "create later", so it is never required.
    pub(crate) fn initially_required(&self) -> bool {
        matches!(
            self,
            FieldId::TokenName | FieldId::TokenTicker | FieldId::TokenDescription
        )
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown form field: {s}"))
    }
}

/// Where a field is in its edit/validate cycle
///
/// A field starts `Empty`, becomes `Touched` on input and settles on
/// `Valid` or `Invalid` when it loses focus. Once invalid, every further
/// input re-validates straight away so the error clears as soon as it is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Empty,
    Touched,
    Valid,
    Invalid(ValidationError),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FieldState::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub state: FieldState,
    pub enabled: bool,
    pub required: bool,
    // set once the field has gone through validation at least once
    pub(crate) validated: bool,
}

impl Field {
    pub(crate) fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            state: FieldState::Empty,
            enabled: true,
            required: id.initially_required(),
            validated: false,
        }
    }

    /// Counts towards progress once it holds anything but whitespace
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.state = FieldState::Empty;
        self.validated = false;
    }
}
