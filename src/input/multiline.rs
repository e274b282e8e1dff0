use super::{InputStrategy, LineSource, ReadOutcome};
use crate::error::InputError;
use crate::ui::PromptLabels;
use std::path::Path;

/// Buffers physical lines until end-of-input and returns them as one prompt.
///
/// Lines are concatenated with no separator. End-of-input with a non-empty
/// buffer submits the prompt; only an empty buffer reports
/// [`ReadOutcome::EndOfInput`].
pub struct MultilineInputStrategy {
    source: Box<dyn LineSource>,
    labels: PromptLabels,
}

impl MultilineInputStrategy {
    pub fn new(source: Box<dyn LineSource>, labels: PromptLabels) -> Self {
        Self { source, labels }
    }
}

impl InputStrategy for MultilineInputStrategy {
    fn input(&mut self, labels: Option<&PromptLabels>) -> ReadOutcome {
        let labels = labels.unwrap_or(&self.labels);
        let mut prompt = labels.primary();
        let mut buffer: Vec<String> = Vec::new();

        loop {
            match self.source.read_line(&prompt) {
                ReadOutcome::Line(line) => {
                    buffer.push(line);
                    prompt = labels.continuation();
                }
                ReadOutcome::EndOfInput if !buffer.is_empty() => {
                    self.source.finish_submission();
                    return ReadOutcome::Line(buffer.concat());
                }
                other => return other,
            }
        }
    }

    fn labels(&self) -> Option<&PromptLabels> {
        Some(&self.labels)
    }

    fn load_history(&mut self, path: &Path) -> Result<(), InputError> {
        self.source.load_history(path)
    }
}
