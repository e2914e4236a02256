use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use launchpad_form::{FieldId, Logo, LogoFile, TokenForm, TokenSubmitter};
use launchpad_types::{SubmitReceipt, WebsiteOption};

use crate::context::CliContext;

#[derive(Debug, Clone, Default)]
pub struct CreateTokenArgs {
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub website: Option<String>,
    pub logo: Option<PathBuf>,
}

pub struct CreateToken {
    pub receipt: SubmitReceipt,
}

impl std::fmt::Display for CreateToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.receipt.message)?;
        write!(f, "\n\nTicker: {}", self.receipt.token_ticker)
    }
}

impl CreateToken {
    pub async fn run(ctx: &CliContext, args: CreateTokenArgs, simulate: bool) -> Result<Self> {
        let submitter = ctx.submitter(simulate)?;
        Self::run_with(submitter.as_ref(), args).await
    }

    /// Fills the form field by field, the way a user would, then submits it
    pub async fn run_with(submitter: &dyn TokenSubmitter, args: CreateTokenArgs) -> Result<Self> {
        let mut form = fill_form(args).await?;

        tracing::debug!("Form is {}% complete", form.progress());

        let receipt = form.submit(submitter).await?;

        Ok(Self { receipt })
    }
}

async fn fill_form(args: CreateTokenArgs) -> Result<TokenForm> {
    let CreateTokenArgs {
        name,
        ticker,
        description,
        twitter,
        telegram,
        website,
        logo,
    } = args;

    let mut form = TokenForm::new();

    let texts = [
        (FieldId::TokenName, Some(name)),
        (FieldId::TokenTicker, Some(ticker)),
        (FieldId::TokenDescription, Some(description)),
        (FieldId::TwitterLink, twitter),
        (FieldId::TelegramLink, telegram),
    ];

    for (field, value) in texts {
        if let Some(value) = value {
            form.input(field, value)?;
        }
        if let Some(err) = form.blur(field).error() {
            bail!("{}: {}", field, err);
        }
    }

    match website {
        Some(link) => {
            form.choose_website(Some(WebsiteOption::Existing));
            form.input(FieldId::WebsiteLink, link)?;
            if let Some(err) = form.blur(FieldId::WebsiteLink).error() {
                bail!("{}: {}", FieldId::WebsiteLink, err);
            }
        }
        None => form.choose_website(Some(WebsiteOption::Create)),
    }

    if let Some(path) = logo {
        let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string());
        let file = LogoFile::read(&path)
            .await
            .with_context(|| format!("reading logo {}", path.display()))?;
        form.attach_logo(Some(Logo::File(file)));
    }

    Ok(form)
}
