//! Session engine
//!
//! A session owns the read-execute-write loop. Three shapes share one
//! [`Session::run`] contract:
//!
//! - **single.rs**: one prompt per execution, until end-of-input
//! - **dual.rs**: two prompts per execution, collected by an explicit state machine
//! - **non_interactive.rs**: exactly one read and one execution

use crate::error::ExecError;
use crate::input::InputStrategy;
use std::io::{self, Write};
use std::process::ExitCode;

pub mod dual;
pub mod hooks;
pub mod non_interactive;
pub mod single;

pub use dual::{DualInputSession, DualMachine, DualState, Transition};
pub use hooks::{ClipboardHook, HistorySeed, SessionHook};
pub use non_interactive::NonInteractiveSession;
pub use single::SingleInputSession;

/// Execution callback for single-prompt sessions
pub type SingleExecutor = Box<dyn FnMut(&str) -> Result<String, ExecError>>;

/// Execution callback for dual-prompt sessions
pub type DualExecutor = Box<dyn FnMut(&str, &str) -> Result<String, ExecError>>;

/// Notice written when a read is interrupted
pub const INTERRUPT_NOTICE: &str = "\nInterrupted\n";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    /// The single non-interactive read was interrupted or found no input
    Interrupted,
}

impl SessionOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SessionOutcome::Completed => ExitCode::SUCCESS,
            SessionOutcome::Interrupted => ExitCode::FAILURE,
        }
    }
}

pub enum Session {
    Single(SingleInputSession),
    Dual(DualInputSession),
    NonInteractive(NonInteractiveSession),
}

impl Session {
    /// Runs the session to completion, writing results to `out`.
    ///
    /// End-of-input and interrupts are handled inside; only write failures
    /// are returned.
    pub fn run(&mut self, out: &mut dyn Write) -> io::Result<SessionOutcome> {
        match self {
            Session::Single(session) => session.run(out),
            Session::Dual(session) => session.run(out),
            Session::NonInteractive(session) => session.run(out),
        }
    }
}

/// Hooks and banner handling shared by every variant
pub(crate) struct Lifecycle {
    hooks: Vec<Box<dyn SessionHook>>,
    banner: bool,
}

impl Lifecycle {
    pub(crate) fn new(banner: bool) -> Self {
        Self {
            hooks: Vec::new(),
            banner,
        }
    }

    pub(crate) fn push(&mut self, hook: Box<dyn SessionHook>) {
        self.hooks.push(hook);
    }

    pub(crate) fn set_banner(&mut self, banner: bool) {
        self.banner = banner;
    }

    pub(crate) fn init(
        &mut self,
        strategy: &mut dyn InputStrategy,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if self.banner {
            out.write_all(banner().as_bytes())?;
            out.flush()?;
        }
        for hook in &mut self.hooks {
            hook.on_init(strategy);
        }
        Ok(())
    }

    pub(crate) fn result(&mut self, output: &str) {
        for hook in &mut self.hooks {
            hook.on_result(output);
        }
    }

    pub(crate) fn exit(&mut self) {
        for hook in &mut self.hooks {
            hook.on_exit();
        }
    }
}

pub fn banner() -> String {
    format!(
        "{} {} in interactive mode\nSend EOF (Ctrl-D) on an empty prompt to quit.\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
