use thiserror::Error;

pub const NO_FILE_MESSAGE: &str = "Please choose an audio or video file first.";
pub const SERVER_REJECTED_FALLBACK: &str = "Unable to transcribe the supplied file.";
pub const TRANSPORT_FALLBACK: &str = "Something went wrong while transcribing.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,
    #[error(
        "server rejected upload with status {status}: {}",
        .detail.as_deref().unwrap_or("<no detail>")
    )]
    ServerRejected { status: u16, detail: Option<String> },
    #[error("{0}")]
    Transport(String),
}

impl UploadError {
    /// Text shown to the user for this failure.
    pub fn status_text(&self) -> String {
        match self {
            UploadError::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            UploadError::ServerRejected { detail, .. } => {
                non_empty_or(detail.as_deref(), SERVER_REJECTED_FALLBACK)
            }
            UploadError::Transport(message) => non_empty_or(Some(message), TRANSPORT_FALLBACK),
        }
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
