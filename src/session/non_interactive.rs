use super::{Lifecycle, SessionHook, SessionOutcome, SingleExecutor};
use crate::input::{InputStrategy, ReadOutcome};
use std::io::{self, Write};
use tracing::{error, warn};

/// Reads one prompt, executes it once and writes the result without a banner.
///
/// The callback always runs: when the read is interrupted or finds no input,
/// an empty prompt is executed, its output is still written, and the outcome
/// is [`SessionOutcome::Interrupted`].
pub struct NonInteractiveSession {
    strategy: Box<dyn InputStrategy>,
    execute: SingleExecutor,
    lifecycle: Lifecycle,
}

impl NonInteractiveSession {
    pub fn new(strategy: Box<dyn InputStrategy>, execute: SingleExecutor) -> Self {
        Self {
            strategy,
            execute,
            lifecycle: Lifecycle::new(false),
        }
    }

    pub fn with_hook(mut self, hook: Box<dyn SessionHook>) -> Self {
        self.lifecycle.push(hook);
        self
    }

    pub fn run(&mut self, out: &mut dyn Write) -> io::Result<SessionOutcome> {
        self.lifecycle.init(self.strategy.as_mut(), out)?;
        let result = self.run_once(out);
        self.lifecycle.exit();
        result
    }

    fn run_once(&mut self, out: &mut dyn Write) -> io::Result<SessionOutcome> {
        let (sentence, outcome) = match self.strategy.input(None) {
            ReadOutcome::Line(text) => (text.trim().to_string(), SessionOutcome::Completed),
            ReadOutcome::Interrupted | ReadOutcome::EndOfInput => {
                warn!("no input was read, executing an empty prompt");
                (String::new(), SessionOutcome::Interrupted)
            }
        };

        match (self.execute)(&sentence) {
            Ok(result) => {
                writeln!(out, "{result}")?;
                out.flush()?;
                self.lifecycle.result(&result);
            }
            Err(e) => error!("error: {e}"),
        }
        Ok(outcome)
    }
}
