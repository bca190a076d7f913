use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use shared::domain::SelectedFile;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use upload_core::{HttpTranscriptionClient, UploadController};

mod config;
mod console;

use config::load_settings;
use console::ConsoleRenderer;

/// Upload audio or video files and print their transcripts.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the transcription server.
    #[arg(long)]
    server_url: Option<String>,
    /// Files to transcribe, submitted one after another.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let mut controller = UploadController::new(
        ConsoleRenderer::new(io::stdout()),
        HttpTranscriptionClient::new(&settings.server_url),
    );

    for path in &args.files {
        match SelectedFile::from_path(path).await {
            Ok(file) => {
                controller.on_file_selection_changed(Some(file));
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "could not read file");
                controller.on_file_selection_changed(None);
            }
        }
        controller.on_submit().await;
    }

    if controller.renderer().result_visible() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
