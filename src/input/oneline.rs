use super::{InputStrategy, LineSource, ReadOutcome};
use crate::error::InputError;
use crate::ui::PromptLabels;
use std::path::Path;

/// Consumes exactly one physical line per prompt.
pub struct OnelineInputStrategy {
    source: Box<dyn LineSource>,
    labels: PromptLabels,
}

impl OnelineInputStrategy {
    pub fn new(source: Box<dyn LineSource>, labels: PromptLabels) -> Self {
        Self { source, labels }
    }
}

impl InputStrategy for OnelineInputStrategy {
    fn input(&mut self, labels: Option<&PromptLabels>) -> ReadOutcome {
        let prompt = labels.unwrap_or(&self.labels).primary();
        self.source.read_line(&prompt)
    }

    fn labels(&self) -> Option<&PromptLabels> {
        Some(&self.labels)
    }

    fn load_history(&mut self, path: &Path) -> Result<(), InputError> {
        self.source.load_history(path)
    }
}
