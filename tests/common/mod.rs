use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Read};
use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use tagfind::error::InputError;
use tagfind::input::{LineSource, ReadOutcome};

/// Feeds a fixed script to an input strategy, then end-of-input forever.
pub struct ScriptedSource {
    outcomes: VecDeque<ReadOutcome>,
    pub prompts: Rc<RefCell<Vec<String>>>,
    pub history: Rc<RefCell<Vec<String>>>,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<ReadOutcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            prompts: Rc::default(),
            history: Rc::default(),
        }
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.outcomes.pop_front().unwrap_or(ReadOutcome::EndOfInput)
    }

    fn load_history(&mut self, path: &Path) -> Result<(), InputError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| InputError::History(e.to_string()))?;
        self.history.borrow_mut().push(contents);
        Ok(())
    }
}

pub fn line(text: &str) -> ReadOutcome {
    ReadOutcome::Line(text.to_string())
}

/// Stdin with nothing typed: blocks until the returned sender is dropped.
pub struct StalledReader(Receiver<()>);

impl Read for StalledReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        let _ = self.0.recv();
        Ok(0)
    }
}

pub fn stalled() -> (Sender<()>, StalledReader) {
    let (tx, rx) = mpsc::channel();
    (tx, StalledReader(rx))
}
