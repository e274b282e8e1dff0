use crate::error::InputError;
use crate::input::{LineSource, ReadOutcome};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

/// Replays a fixed list of read outcomes, then reports end-of-input forever.
pub struct ScriptedSource {
    outcomes: VecDeque<ReadOutcome>,
    prompts: Rc<RefCell<Vec<String>>>,
    history: Rc<RefCell<Vec<String>>>,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<ReadOutcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            prompts: Rc::default(),
            history: Rc::default(),
        }
    }

    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| line(l)).collect())
    }

    /// Every prompt label shown so far, in order.
    pub fn prompts(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.prompts)
    }

    /// Contents of every history file loaded so far.
    pub fn history(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.history)
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.outcomes.pop_front().unwrap_or(ReadOutcome::EndOfInput)
    }

    fn load_history(&mut self, path: &Path) -> Result<(), InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InputError::History(format!("{}: {e}", path.display())))?;
        self.history.borrow_mut().push(contents);
        Ok(())
    }
}

pub fn line(text: &str) -> ReadOutcome {
    ReadOutcome::Line(text.to_string())
}
