//! Input acquisition
//!
//! An [`InputStrategy`] turns one or more physical lines into one logical
//! prompt. Interactive strategies pull physical lines from a [`LineSource`]
//! (rustyline in the binary, scripted sources in tests).
//!
//! ## Module Structure
//!
//! - **line_source.rs**: rustyline wrapper
//! - **oneline.rs**: one physical line per prompt
//! - **multiline.rs**: lines buffered until end-of-input
//! - **direct.rs**: text already in hand (non-interactive)

use crate::error::InputError;
use crate::ui::PromptLabels;
use std::path::Path;

pub mod direct;
pub mod line_source;
pub mod multiline;
pub mod oneline;

pub use direct::DirectInputStrategy;
pub use line_source::RustylineSource;
pub use multiline::MultilineInputStrategy;
pub use oneline::OnelineInputStrategy;

/// Result of one blocking read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The source is exhausted (Ctrl-D on a terminal)
    EndOfInput,
    /// The user sent an interrupt (Ctrl-C) during the read
    Interrupted,
}

/// Where physical lines come from
pub trait LineSource {
    /// Blocks until a line, end-of-input or an interrupt arrives.
    fn read_line(&mut self, prompt: &str) -> ReadOutcome;

    /// Seeds the line editor's history from a file with one entry per line.
    fn load_history(&mut self, _path: &Path) -> Result<(), InputError> {
        Ok(())
    }

    /// Called when a multi-line prompt was submitted with end-of-input.
    fn finish_submission(&mut self) {}
}

/// How one logical prompt is obtained from the user
pub trait InputStrategy {
    /// Reads one logical prompt. `labels` overrides the strategy's own labels
    /// for this call only.
    fn input(&mut self, labels: Option<&PromptLabels>) -> ReadOutcome;

    /// Labels used when no override is given; `None` for non-interactive input.
    fn labels(&self) -> Option<&PromptLabels> {
        None
    }

    fn load_history(&mut self, _path: &Path) -> Result<(), InputError> {
        Ok(())
    }
}
