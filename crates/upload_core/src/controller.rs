//! Single-file upload/transcription state machine.
//!
//! Every transition updates the controller's own [`ViewState`] and mirrors the
//! change to the [`Renderer`], so the machine can be driven and asserted
//! without a live presentation surface.

use shared::{
    domain::{SelectedFile, StatusMessage, StatusVariant},
    error::UploadError,
    protocol::TranscribeResponse,
};
use tracing::{debug, error, info, warn};

use crate::{renderer::Renderer, transport::TranscriptionTransport};

pub const LABEL_PLACEHOLDER: &str = "Choose an audio or video file";
pub const SELECT_PROMPT: &str = "Select a file to begin.";
pub const UPLOADING_MESSAGE: &str = "Uploading and transcribing…";
pub const COMPLETE_MESSAGE: &str = "Transcription complete!";
pub const EMPTY_TRANSCRIPT: &str = "No transcript returned.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    IdleNoFile,
    IdleReady,
    Submitting,
    Success,
    Failed,
}

impl UploadState {
    pub fn label(&self) -> &'static str {
        match self {
            UploadState::IdleNoFile => "Idle(no file)",
            UploadState::IdleReady => "Idle(file ready)",
            UploadState::Submitting => "Submitting",
            UploadState::Success => "Success",
            UploadState::Failed => "Error",
        }
    }
}

/// Snapshot of everything currently rendered. `result` is `None` while the
/// transcript panel is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub label: String,
    pub status: StatusMessage,
    pub result: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            label: LABEL_PLACEHOLDER.to_string(),
            status: StatusMessage::info(SELECT_PROMPT),
            result: None,
        }
    }
}

/// A submission that has been started and is waiting on the transport.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    request_id: u64,
    file: SelectedFile,
}

impl PendingUpload {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

pub struct UploadController<R, T> {
    renderer: R,
    transport: T,
    selection: Option<SelectedFile>,
    view: ViewState,
    state: UploadState,
    last_request_id: u64,
}

impl<R: Renderer, T: TranscriptionTransport> UploadController<R, T> {
    pub fn new(renderer: R, transport: T) -> Self {
        let mut controller = Self {
            renderer,
            transport,
            selection: None,
            view: ViewState::default(),
            state: UploadState::IdleNoFile,
            last_request_id: 0,
        };
        controller.renderer.set_label(&controller.view.label);
        controller.renderer.set_status(&controller.view.status);
        controller.renderer.hide_result();
        controller
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Whether the loading status is currently on screen.
    pub fn is_loading(&self) -> bool {
        self.view.status.variant == StatusVariant::Loading
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces the current selection. Never touches the network.
    pub fn on_file_selection_changed(&mut self, selection: Option<SelectedFile>) -> ViewState {
        match selection {
            None => {
                self.selection = None;
                self.set_label(LABEL_PLACEHOLDER);
                self.set_status(StatusMessage::info(SELECT_PROMPT));
                self.hide_result();
                self.state = UploadState::IdleNoFile;
            }
            Some(file) => {
                let name = file.name.clone();
                self.selection = Some(file);
                self.set_label(&name);
                self.set_status(StatusMessage::info(format!("Ready to upload {name}")));
                self.state = UploadState::IdleReady;
            }
        }
        self.view.clone()
    }

    /// Submits the selected file and waits for the outcome. Failures end in a
    /// rendered error status and are never returned to the caller.
    pub async fn on_submit(&mut self) -> ViewState {
        let Some(pending) = self.begin_submit() else {
            return self.view.clone();
        };
        let outcome = self.transport.transcribe(pending.file()).await;
        self.finish_submit(pending, outcome)
    }

    /// First half of a submission. Returns `None` when there is nothing to
    /// upload, after rendering the prompt.
    pub fn begin_submit(&mut self) -> Option<PendingUpload> {
        let Some(file) = self.selection.clone() else {
            self.set_status(StatusMessage::error(UploadError::NoFileSelected.status_text()));
            return None;
        };

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.set_status(StatusMessage::loading(UPLOADING_MESSAGE));
        self.hide_result();
        self.state = UploadState::Submitting;
        debug!(
            request_id,
            file = %file.name,
            state = self.state.label(),
            "transcription submitted"
        );

        Some(PendingUpload { request_id, file })
    }

    /// Second half of a submission. Outcomes are applied in the order they
    /// arrive, so with overlapping submissions the last one to finish wins.
    pub fn finish_submit(
        &mut self,
        pending: PendingUpload,
        outcome: Result<TranscribeResponse, UploadError>,
    ) -> ViewState {
        let request_id = pending.request_id;
        if request_id != self.last_request_id {
            debug!(
                request_id,
                latest = self.last_request_id,
                "applying outcome of an earlier submission"
            );
        }

        match outcome {
            Ok(response) => {
                let transcript = response.transcript().unwrap_or(EMPTY_TRANSCRIPT).to_string();
                info!(
                    request_id,
                    file = %pending.file.name,
                    chars = transcript.len(),
                    "transcription complete"
                );
                self.show_result(transcript);
                self.set_status(StatusMessage::success(COMPLETE_MESSAGE));
                self.state = UploadState::Success;
            }
            Err(err) => {
                if let UploadError::ServerRejected { status, .. } = &err {
                    warn!(
                        request_id,
                        file = %pending.file.name,
                        status = *status,
                        "server rejected upload: {err}"
                    );
                } else {
                    error!(
                        request_id,
                        file = %pending.file.name,
                        "transcription failed: {err}"
                    );
                }
                self.set_status(StatusMessage::error(err.status_text()));
                self.hide_result();
                self.state = UploadState::Failed;
            }
        }
        debug!(request_id, state = self.state.label(), "submission resolved");
        self.view.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.view.label = label.to_string();
        self.renderer.set_label(label);
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.renderer.set_status(&status);
        self.view.status = status;
    }

    fn show_result(&mut self, transcript: String) {
        self.renderer.show_result(&transcript);
        self.view.result = Some(transcript);
    }

    fn hide_result(&mut self) {
        self.view.result = None;
        self.renderer.hide_result();
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
