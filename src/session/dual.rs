//! Dual-input session
//!
//! Collects two prompts before every execution:
//!
//! | state            | event          | next             |
//! |------------------|----------------|------------------|
//! | `AwaitingFirst`  | non-empty line | `AwaitingSecond` |
//! | `AwaitingFirst`  | end-of-input   | session ends     |
//! | `AwaitingSecond` | non-empty line | `Ready`          |
//! | `AwaitingSecond` | end-of-input   | `AwaitingFirst`  |
//! | `Ready`          | executed       | `AwaitingFirst`  |
//!
//! Empty lines and interrupts leave the state as it is. While the second
//! prompt is pending, labels are painted with [`PENDING_FOREGROUND`].

use super::{DualExecutor, Lifecycle, SessionHook, SessionOutcome, INTERRUPT_NOTICE};
use crate::input::{InputStrategy, ReadOutcome};
use crate::ui::{DEFAULT_FOREGROUND, PENDING_FOREGROUND};
use crossterm::style::Color;
use std::io::{self, Write};
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DualState {
    AwaitingFirst,
    AwaitingSecond { first: String },
    Ready { first: String, second: String },
}

/// What a read did to the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed (empty line, or a read while `Ready`)
    Stayed,
    /// A prompt was stored
    Advanced,
    /// End-of-input while the second prompt was pending; the first is dropped
    Abandoned,
    Interrupted,
    /// End-of-input with no pair in progress
    Terminated,
}

/// State of the dual-input protocol plus the prompt cue it implies
#[derive(Debug, Clone)]
pub struct DualMachine {
    state: DualState,
    default_foreground: Color,
    foreground: Color,
}

impl Default for DualMachine {
    fn default() -> Self {
        Self::new(DEFAULT_FOREGROUND)
    }
}

impl DualMachine {
    pub fn new(default_foreground: Color) -> Self {
        Self {
            state: DualState::AwaitingFirst,
            default_foreground,
            foreground: default_foreground,
        }
    }

    pub fn state(&self) -> &DualState {
        &self.state
    }

    /// Foreground the next prompt label should be painted with.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn on_input(&mut self, outcome: ReadOutcome) -> Transition {
        let state = std::mem::replace(&mut self.state, DualState::AwaitingFirst);

        let (next, transition) = match (state, outcome) {
            (state @ DualState::Ready { .. }, _) => (state, Transition::Stayed),
            (state, ReadOutcome::Interrupted) => (state, Transition::Interrupted),
            (state, ReadOutcome::Line(line)) if line.is_empty() => (state, Transition::Stayed),

            (DualState::AwaitingFirst, ReadOutcome::Line(first)) => {
                self.foreground = PENDING_FOREGROUND;
                (DualState::AwaitingSecond { first }, Transition::Advanced)
            }
            (DualState::AwaitingFirst, ReadOutcome::EndOfInput) => {
                (DualState::AwaitingFirst, Transition::Terminated)
            }

            (DualState::AwaitingSecond { first }, ReadOutcome::Line(second)) => {
                (DualState::Ready { first, second }, Transition::Advanced)
            }
            (DualState::AwaitingSecond { .. }, ReadOutcome::EndOfInput) => {
                self.foreground = self.default_foreground;
                (DualState::AwaitingFirst, Transition::Abandoned)
            }
        };

        self.state = next;
        transition
    }

    /// Takes the pair out of a `Ready` machine and starts over.
    pub fn take_ready(&mut self) -> Option<(String, String)> {
        match std::mem::replace(&mut self.state, DualState::AwaitingFirst) {
            DualState::Ready { first, second } => {
                self.foreground = self.default_foreground;
                Some((first, second))
            }
            other => {
                self.state = other;
                None
            }
        }
    }
}

/// Interactive loop executing a callback on pairs of prompts.
pub struct DualInputSession {
    strategy: Box<dyn InputStrategy>,
    execute: DualExecutor,
    machine: DualMachine,
    lifecycle: Lifecycle,
}

impl DualInputSession {
    pub fn new(strategy: Box<dyn InputStrategy>, execute: DualExecutor) -> Self {
        let default_foreground = strategy
            .labels()
            .map(|labels| labels.style().foreground)
            .unwrap_or(DEFAULT_FOREGROUND);
        Self {
            strategy,
            execute,
            machine: DualMachine::new(default_foreground),
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

    pub fn machine(&self) -> &DualMachine {
        &self.machine
    }

    pub fn run(&mut self, out: &mut dyn Write) -> io::Result<SessionOutcome> {
        self.lifecycle.init(self.strategy.as_mut(), out)?;
        let result = self.start_loop(out);
        self.lifecycle.exit();
        result.map(|_| SessionOutcome::Completed)
    }

    fn start_loop(&mut self, out: &mut dyn Write) -> io::Result<()> {
        loop {
            let labels = self.strategy.labels().map(|labels| {
                labels.with_style(labels.style().with_foreground(self.machine.foreground()))
            });
            let outcome = self.strategy.input(labels.as_ref());

            match self.machine.on_input(outcome) {
                Transition::Terminated => break,
                Transition::Interrupted => {
                    out.write_all(INTERRUPT_NOTICE.as_bytes())?;
                    out.flush()?;
                }
                Transition::Abandoned => debug!("pending prompt abandoned"),
                Transition::Stayed => {}
                Transition::Advanced => {
                    let Some((first, second)) = self.machine.take_ready() else {
                        continue;
                    };
                    match (self.execute)(&first, &second) {
                        Ok(result) => {
                            writeln!(out, "{result}")?;
                            out.flush()?;
                            self.lifecycle.result(&result);
                        }
                        Err(e) => error!("error: {e}"),
                    }
                }
            }
        }
        writeln!(out)?;
        Ok(())
    }
}
