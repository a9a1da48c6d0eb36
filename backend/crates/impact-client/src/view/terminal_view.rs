use crate::{ListContent, Notice, NoticeKind, ProjectView};

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Line-oriented view for the command line.
///
/// List entries and success notices go to `out`; progress lines and error
/// notices go to `err`. Form and dismissal calls have nothing to show.
pub struct TerminalView<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
}

impl TerminalView<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> TerminalView<O, E>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Give back the writers, e.g. to inspect captured output in tests
    pub fn into_inner(self) -> (O, E) {
        (
            self.out.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.err.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn write_out(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{line}") {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn write_err(&self, line: &str) {
        let mut err = self.err.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(err, "{line}") {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<O, E> ProjectView for TerminalView<O, E>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    fn set_submitting(&self, submitting: bool) {
        if submitting {
            self.write_err("Submitting...");
        }
    }

    fn set_loading(&self, visible: bool) {
        if visible {
            self.write_err("Loading projects...");
        }
    }

    fn show_list(&self, content: &ListContent) {
        match content {
            ListContent::Blank => {}
            ListContent::Projects(records) => {
                for record in records {
                    self.write_out(&format!("{} [{}]", record.project_name, record.status));
                }
            }
            ListContent::Empty | ListContent::LoadFailed => {
                self.write_out(content.placeholder().unwrap_or_default());
            }
        }
    }

    fn show_notice(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => self.write_out(&notice.text),
            NoticeKind::Error => self.write_err(&notice.text),
        }
    }

    fn hide_notice(&self) {}

    fn clear_form(&self) {}
}
