use thiserror::Error;

use crate::field::FieldKind;

/// Longest ticker accepted, counted in characters after trimming
pub const TICKER_MAX_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid URL")]
    InvalidUrl,

    #[error("Ticker must be {max} characters or fewer (got {actual})")]
    TickerTooLong { max: usize, actual: usize },

    #[error("Logo must be a base64 data URL")]
    InvalidDataUrl,
}

/// Checks a single value against the rules for its kind
///
/// Whitespace around the value is ignored everywhere.
pub fn validate_value(kind: FieldKind, required: bool, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();

    if required && value.is_empty() {
        return Err(ValidationError::Required);
    }

    match kind {
        FieldKind::Url if !value.is_empty() && !is_valid_url(value) => {
            Err(ValidationError::InvalidUrl)
        }
        FieldKind::Ticker => {
            let actual = value.chars().count();
            if actual > TICKER_MAX_CHARS {
                Err(ValidationError::TickerTooLong {
                    max: TICKER_MAX_CHARS,
                    actual,
                })
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

/// Absolute URLs only, anything `url` can parse without a base
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
