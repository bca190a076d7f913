use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// The single file currently chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_guess::from_path(&name)
            .first()
            .map(|mime| mime.essence_str().to_string());
        Self {
            name,
            content,
            mime_type,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("path {} has no file name", path.display()),
                )
            })?;
        let content = tokio::fs::read(path).await?;
        Ok(Self::new(name, content))
    }

    pub fn mime_type_or_default(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(DEFAULT_MIME_TYPE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusVariant {
    Info,
    Loading,
    Success,
    Error,
}

impl StatusVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusVariant::Info => "info",
            StatusVariant::Loading => "loading",
            StatusVariant::Success => "success",
            StatusVariant::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub variant: StatusVariant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, variant: StatusVariant) -> Self {
        Self {
            text: text.into(),
            variant,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, StatusVariant::Info)
    }

    pub fn loading(text: impl Into<String>) -> Self {
        Self::new(text, StatusVariant::Loading)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, StatusVariant::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, StatusVariant::Error)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
