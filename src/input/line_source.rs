use super::{LineSource, ReadOutcome};
use crate::error::InputError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Line source backed by rustyline
///
/// Provides:
/// - In-memory history of every non-empty line
/// - Arrow key navigation and basic editing
/// - History seeding from a file
pub struct RustylineSource {
    editor: DefaultEditor,
}

impl RustylineSource {
    pub fn new() -> Result<Self, ReadlineError> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }
}

impl LineSource for RustylineSource {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to add history entry: {e}");
                    }
                }
                ReadOutcome::Line(line)
            }
            Err(ReadlineError::Eof) => ReadOutcome::EndOfInput,
            Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
            Err(e) => {
                warn!("line editor failed, treating as end of input: {e}");
                ReadOutcome::EndOfInput
            }
        }
    }

    fn load_history(&mut self, path: &Path) -> Result<(), InputError> {
        self.editor
            .load_history(path)
            .map_err(|e| InputError::History(format!("{}: {e}", path.display())))
    }

    fn finish_submission(&mut self) {
        if let Err(e) = end_line(&mut io::stdout()) {
            warn!("failed to end the submitted prompt: {e}");
        }
    }
}

fn end_line(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(b"\n")?;
    out.flush()
}
