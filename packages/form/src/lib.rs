//! The token creation form, as a plain state machine
//!
//! [`TokenForm`] owns the field values and their validation state, the website
//! toggle, the progress indicator and the submit lifecycle. Submissions are handed
//! to a [`TokenSubmitter`].

mod error;
mod field;
mod form;
mod logo;
mod submitter;
pub mod validation;

pub use error::{InputError, SubmitError};
pub use field::{Field, FieldId, FieldKind, FieldState};
pub use form::{
    Notice, SubmitStatus, TokenForm, FAILURE_MESSAGE, SUBMIT_CAPTION, SUBMIT_CAPTION_IN_FLIGHT,
    SUCCESS_MESSAGE,
};
pub use logo::{is_base64_data_url, Logo, LogoFile};
pub use submitter::{HttpSubmitter, SimulatedSubmitter, TokenSubmitter};
pub use validation::ValidationError;
