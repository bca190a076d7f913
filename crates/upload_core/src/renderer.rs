//! Presentation seam between the controller and whatever surface shows it.

use shared::domain::StatusMessage;

pub trait Renderer {
    fn set_label(&mut self, label: &str);
    fn set_status(&mut self, status: &StatusMessage);
    fn show_result(&mut self, transcript: &str);
    fn hide_result(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Label(String),
    Status(StatusMessage),
    ShowResult(String),
    HideResult,
}

/// Headless renderer that keeps every call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn last_status(&self) -> Option<&StatusMessage> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Status(status) => Some(status),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn set_label(&mut self, label: &str) {
        self.calls.push(RenderCall::Label(label.to_string()));
    }

    fn set_status(&mut self, status: &StatusMessage) {
        self.calls.push(RenderCall::Status(status.clone()));
    }

    fn show_result(&mut self, transcript: &str) {
        self.calls.push(RenderCall::ShowResult(transcript.to_string()));
    }

    fn hide_result(&mut self) {
        self.calls.push(RenderCall::HideResult);
    }
}
