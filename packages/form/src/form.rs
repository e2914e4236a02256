use launchpad_types::{SocialMedia, SubmitReceipt, TokenSubmission, WebsiteOption};

use crate::{
    error::{InputError, SubmitError},
    field::{Field, FieldId, FieldKind, FieldState},
    logo::{is_base64_data_url, Logo},
    submitter::TokenSubmitter,
    validation::{validate_value, ValidationError},
};

pub const SUBMIT_CAPTION: &str = "Create Token";
pub const SUBMIT_CAPTION_IN_FLIGHT: &str = "Creating Token...";
pub const SUCCESS_MESSAGE: &str = "Token creation initiated successfully!";
pub const FAILURE_MESSAGE: &str = "Error creating token. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    InFlight,
}

/// The message shown to the user once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// State of the token creation form, independent of any UI
///
/// Every mutation recomputes progress before returning, so [`TokenForm::progress`]
/// is always current.
#[derive(Debug, Clone)]
pub struct TokenForm {
    fields: [Field; 8],
    website_option: Option<WebsiteOption>,
    logo: Option<Logo>,
    status: SubmitStatus,
    notice: Option<Notice>,
    progress: f64,
}

impl Default for TokenForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenForm {
    pub fn new() -> Self {
        let mut form = Self {
            fields: FieldId::ALL.map(Field::new),
            website_option: None,
            logo: None,
            status: SubmitStatus::Idle,
            notice: None,
            progress: 0.0,
        };
        // no choice yet behaves like "create later"
        form.apply_website_option();
        form.refresh_progress();
        form
    }

    /// Loads a submission received from elsewhere so it can be checked with the same rules
    ///
    /// The website link is only taken over when the submission says the website exists.
    pub fn from_submission(submission: &TokenSubmission) -> Result<Self, InputError> {
        let mut form = Self::new();

        form.input(FieldId::TokenName, submission.token_name.as_str())?;
        form.input(FieldId::TokenTicker, submission.token_ticker.as_str())?;
        form.input(FieldId::TokenDescription, submission.token_description.as_str())?;
        form.input(FieldId::TwitterLink, submission.social_media.twitter.as_str())?;
        form.input(FieldId::TelegramLink, submission.social_media.telegram.as_str())?;
        form.choose_website(Some(submission.website_option));
        if submission.website_option == WebsiteOption::Existing {
            form.input(FieldId::WebsiteLink, submission.website_link.as_str())?;
        }
        form.attach_logo(submission.logo.clone().map(Logo::DataUrl));

        Ok(form)
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id.index()]
    }

    pub fn website_option(&self) -> Option<WebsiteOption> {
        self.website_option
    }

    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Percentage of tracked fields holding a value, 0.0 to 100.0
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn filled_count(&self) -> usize {
        self.fields.iter().filter(|field| field.is_filled()).count()
    }

    pub fn submit_caption(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => SUBMIT_CAPTION,
            SubmitStatus::InFlight => SUBMIT_CAPTION_IN_FLIGHT,
        }
    }

    pub fn submit_enabled(&self) -> bool {
        self.status == SubmitStatus::Idle
    }

    /// A keystroke, or any other edit, on a text field
    pub fn input(&mut self, id: FieldId, value: impl Into<String>) -> Result<(), InputError> {
        match id.kind() {
            FieldKind::Choice => {
                let value = value.into();
                let option = match value.trim() {
                    "" => None,
                    other => Some(
                        other
                            .parse::<WebsiteOption>()
                            .map_err(|_| InputError::UnknownWebsiteOption(value.clone()))?,
                    ),
                };
                self.choose_website(option);
                return Ok(());
            }
            FieldKind::File => return Err(InputError::NotText(id)),
            _ => {}
        }

        let field = self.field_mut(id);
        if !field.enabled {
            return Err(InputError::Disabled(id));
        }

        field.value = value.into();

        if field.state.is_invalid() {
            Self::validate_in_place(field);
        } else if !field.is_filled() && !field.validated {
            field.state = FieldState::Empty;
        } else {
            field.state = FieldState::Touched;
        }

        self.refresh_progress();
        Ok(())
    }

    /// Focus left the field
    pub fn blur(&mut self, id: FieldId) -> &FieldState {
        self.validate(id)
    }

    pub fn validate(&mut self, id: FieldId) -> &FieldState {
        let logo_error = match (id, &self.logo) {
            (FieldId::Logo, Some(Logo::DataUrl(url))) if !is_base64_data_url(url) => {
                Some(ValidationError::InvalidDataUrl)
            }
            _ => None,
        };

        let field = self.field_mut(id);
        Self::validate_in_place(field);
        if let Some(err) = logo_error {
            field.state = FieldState::Invalid(err);
        }
        self.refresh_progress();
        &self.field(id).state
    }

    /// Validates every field, returning the ones that failed
    pub fn validate_all(&mut self) -> Result<(), Vec<(FieldId, ValidationError)>> {
        let errors: Vec<_> = FieldId::ALL
            .into_iter()
            .filter_map(|id| self.validate(id).error().cloned().map(|err| (id, err)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_in_place(field: &mut Field) {
        let result = if !field.enabled {
            Ok(())
        } else {
            validate_value(field.id.kind(), field.required, &field.value)
        };

        field.validated = true;
        field.state = match result {
            Ok(()) => FieldState::Valid,
            Err(err) => FieldState::Invalid(err),
        };
    }

    /// Picks whether the website exists already, `None` clears the choice
    pub fn choose_website(&mut self, option: Option<WebsiteOption>) {
        self.website_option = option;

        let choice = self.field_mut(FieldId::WebsiteOption);
        match option {
            Some(option) => {
                choice.value = option.as_str().to_string();
                choice.state = FieldState::Touched;
            }
            None => choice.clear(),
        }

        self.apply_website_option();
        self.refresh_progress();
    }

    fn apply_website_option(&mut self) {
        let existing = self.website_option == Some(WebsiteOption::Existing);
        let link = self.field_mut(FieldId::WebsiteLink);

        link.enabled = existing;
        link.required = existing;
        if !existing {
            link.clear();
        }
    }

    pub fn attach_logo(&mut self, logo: Option<Logo>) {
        let field = self.field_mut(FieldId::Logo);
        match &logo {
            Some(logo) => {
                field.value = logo.display_name().to_string();
                field.state = FieldState::Touched;
            }
            None => field.clear(),
        }
        self.logo = logo;

        // already encoded logos can be checked right away
        if matches!(self.logo, Some(Logo::DataUrl(_))) {
            self.validate(FieldId::Logo);
        }

        self.refresh_progress();
    }

    /// The payload as it would be submitted now, with the logo encoded
    ///
    /// No website choice yet is sent as [`WebsiteOption::Create`].
    pub fn payload(&self) -> TokenSubmission {
        let website_option = self.website_option.unwrap_or(WebsiteOption::Create);
        let value = |id: FieldId| self.field(id).value.clone();

        TokenSubmission {
            token_name: value(FieldId::TokenName),
            token_ticker: value(FieldId::TokenTicker),
            token_description: value(FieldId::TokenDescription),
            social_media: SocialMedia {
                twitter: value(FieldId::TwitterLink),
                telegram: value(FieldId::TelegramLink),
            },
            website_option,
            website_link: value(FieldId::WebsiteLink),
            logo: self.logo.as_ref().map(Logo::to_data_url),
        }
    }

    /// Validates and marks the form in flight, yielding the payload to send
    ///
    /// Must be followed by [`TokenForm::finish_submit`], even when sending fails.
    pub fn begin_submit(&mut self) -> Result<TokenSubmission, SubmitError> {
        if self.status == SubmitStatus::InFlight {
            return Err(SubmitError::InFlight);
        }

        self.validate_all().map_err(SubmitError::Invalid)?;

        let payload = self.payload();

        self.status = SubmitStatus::InFlight;
        self.notice = None;

        Ok(payload)
    }

    /// Settles an in-flight submission: a success resets the form, a failure keeps every value
    pub fn finish_submit(&mut self, result: &Result<SubmitReceipt, SubmitError>) {
        match result {
            Ok(receipt) => {
                tracing::debug!("Submission of {} accepted", receipt.token_ticker);
                self.reset();
                self.notice = Some(Notice::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                tracing::error!("Error creating token: {}", err);
                self.status = SubmitStatus::Idle;
                self.notice = Some(Notice::Error(FAILURE_MESSAGE.to_string()));
            }
        }
    }

    /// The whole lifecycle in one call
    pub async fn submit(
        &mut self,
        submitter: &dyn TokenSubmitter,
    ) -> Result<SubmitReceipt, SubmitError> {
        let payload = self.begin_submit()?;
        let result = submitter.submit(payload).await;
        self.finish_submit(&result);
        result
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn refresh_progress(&mut self) {
        self.progress = self.filled_count() as f64 / self.fields.len() as f64 * 100.0;
    }
}
