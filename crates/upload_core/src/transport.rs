//! Network seam: one multipart POST per submission.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::{
    domain::SelectedFile,
    error::UploadError,
    protocol::{ErrorBody, TranscribeResponse, FILE_FIELD, TRANSCRIBE_PATH},
};
use tracing::debug;

#[async_trait]
pub trait TranscriptionTransport: Send + Sync {
    async fn transcribe(&self, file: &SelectedFile) -> Result<TranscribeResponse, UploadError>;
}

#[async_trait]
impl<T: TranscriptionTransport + ?Sized> TranscriptionTransport for Arc<T> {
    async fn transcribe(&self, file: &SelectedFile) -> Result<TranscribeResponse, UploadError> {
        (**self).transcribe(file).await
    }
}

pub struct HttpTranscriptionClient {
    http: Client,
    endpoint: String,
}

impl HttpTranscriptionClient {
    pub fn new(server_url: &str) -> Self {
        Self::with_client(Client::new(), server_url)
    }

    /// No request timeout is set here; callers that want one configure it
    /// on the `Client` they pass in.
    pub fn with_client(http: Client, server_url: &str) -> Self {
        let base = server_url.trim().trim_end_matches('/');
        Self {
            http,
            endpoint: format!("{base}{TRANSCRIBE_PATH}"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(file: &SelectedFile) -> Result<Form, UploadError> {
        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(file.mime_type_or_default())
            .map_err(|err| UploadError::Transport(format!("invalid file part: {err}")))?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

#[async_trait]
impl TranscriptionTransport for HttpTranscriptionClient {
    async fn transcribe(&self, file: &SelectedFile) -> Result<TranscribeResponse, UploadError> {
        let form = Self::build_form(file)?;
        debug!(
            endpoint = %self.endpoint,
            file = %file.name,
            size_bytes = file.content.len(),
            "sending transcription request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(UploadError::ServerRejected {
                status: status.as_u16(),
                detail: ErrorBody::from_bytes(&body).detail,
            });
        }

        response.json::<TranscribeResponse>().await.map_err(|err| {
            UploadError::Transport(format!("failed to parse transcription response: {err}"))
        })
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
