use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

/// A logo image as picked from disk
#[derive(Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub async fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self { file_name, bytes })
    }

    /// Guessed from the file extension, `application/octet-stream` when unknown
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .to_string()
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}

impl std::fmt::Debug for LogoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A logo attached to the form, either still raw or already encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    File(LogoFile),
    DataUrl(String),
}

impl Logo {
    /// What the form shows as the field value
    pub fn display_name(&self) -> &str {
        match self {
            Logo::File(file) => &file.file_name,
            Logo::DataUrl(_) => "logo",
        }
    }

    pub fn to_data_url(&self) -> String {
        match self {
            Logo::File(file) => file.to_data_url(),
            Logo::DataUrl(url) => url.clone(),
        }
    }
}

/// True for `data:<mime>;base64,<payload>` with a decodable payload
pub fn is_base64_data_url(value: &str) -> bool {
    value
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| STANDARD.decode(payload).is_ok())
        .unwrap_or(false)
}
