use thiserror::Error;

use crate::{field::FieldId, validation::ValidationError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0} is disabled")]
    Disabled(FieldId),

    #[error("{0} does not take text input")]
    NotText(FieldId),

    #[error("unknown website option: {0}")]
    UnknownWebsiteOption(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Form has invalid fields: {}", display_field_errors(.0))]
    Invalid(Vec<(FieldId, ValidationError)>),

    #[error("A submission is already in flight")]
    InFlight,

    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission failed: {0:#}")]
    Transport(anyhow::Error),
}

fn display_field_errors(errors: &[(FieldId, ValidationError)]) -> String {
    errors
        .iter()
        .map(|(field, err)| format!("{field}: {err}"))
        .collect::<Vec<_>>()
        .join(", ")
}
