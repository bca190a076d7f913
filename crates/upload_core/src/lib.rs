//! Upload/transcription state machine and the seams it talks through.

pub mod controller;
pub mod renderer;
pub mod transport;

pub use controller::{PendingUpload, UploadController, UploadState, ViewState};
pub use renderer::{RecordingRenderer, RenderCall, Renderer};
pub use transport::{HttpTranscriptionClient, TranscriptionTransport};
