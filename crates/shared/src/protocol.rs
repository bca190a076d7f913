use serde::{Deserialize, Serialize};

pub const TRANSCRIBE_PATH: &str = "/api/transcribe";
/// Multipart field name the endpoint reads the upload from.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscribeResponse {
    #[serde(default)]
    pub text: Option<String>,
}

impl TranscribeResponse {
    /// Trimmed transcript, or `None` when the server sent nothing usable.
    pub fn transcript(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Lenient parse: anything that is not a JSON object with a string
    /// `detail` becomes an empty body.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
