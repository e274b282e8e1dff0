use super::{Lifecycle, SessionHook, SessionOutcome, SingleExecutor, INTERRUPT_NOTICE};
use crate::input::{InputStrategy, ReadOutcome};
use std::io::{self, Write};
use tracing::error;

/// Interactive loop executing every non-empty prompt on its own.
///
/// Execution failures are logged and the loop keeps going; it ends only on
/// end-of-input.
pub struct SingleInputSession {
    strategy: Box<dyn InputStrategy>,
    execute: SingleExecutor,
    lifecycle: Lifecycle,
}

impl SingleInputSession {
    pub fn new(strategy: Box<dyn InputStrategy>, execute: SingleExecutor) -> Self {
        Self {
            strategy,
            execute,
            lifecycle: Lifecycle::new(true),
        }
    }

    pub fn with_hook(mut self, hook: Box<dyn SessionHook>) -> Self {
        self.lifecycle.push(hook);
        self
    }

    pub fn banner(mut self, banner: bool) -> Self {
        self.lifecycle.set_banner(banner);
        self
    }

    pub fn run(&mut self, out: &mut dyn Write) -> io::Result<SessionOutcome> {
        self.lifecycle.init(self.strategy.as_mut(), out)?;
        let result = self.start_loop(out);
        self.lifecycle.exit();
        result.map(|_| SessionOutcome::Completed)
    }

    fn start_loop(&mut self, out: &mut dyn Write) -> io::Result<()> {
        loop {
            match self.strategy.input(None) {
                ReadOutcome::Line(source) => {
                    if source.is_empty() {
                        continue;
                    }
                    match (self.execute)(&source) {
                        Ok(result) => {
                            writeln!(out, "{result}")?;
                            out.flush()?;
                            self.lifecycle.result(&result);
                        }
                        Err(e) => error!("error: {e}"),
                    }
                }
                ReadOutcome::Interrupted => {
                    out.write_all(INTERRUPT_NOTICE.as_bytes())?;
                    out.flush()?;
                }
                ReadOutcome::EndOfInput => break,
            }
        }
        writeln!(out)?;
        Ok(())
    }
}
