//! Terminal rendering for the upload controller.

use std::io::Write;

use shared::domain::StatusMessage;
use upload_core::Renderer;

pub struct ConsoleRenderer<W: Write> {
    out: W,
    result_visible: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            result_visible: false,
        }
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

// Write failures on the terminal are not actionable from inside a render call.
impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn set_label(&mut self, label: &str) {
        let _ = writeln!(self.out, "file: {label}");
    }

    fn set_status(&mut self, status: &StatusMessage) {
        let _ = writeln!(self.out, "[{}] {}", status.variant.as_str(), status.text);
    }

    fn show_result(&mut self, transcript: &str) {
        self.result_visible = true;
        let _ = writeln!(self.out, "--- transcript ---\n{transcript}\n------------------");
    }

    fn hide_result(&mut self) {
        self.result_visible = false;
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
