use crate::clipboard::SystemClipboard;
use crate::input::InputStrategy;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};
use tracing::{debug, warn};

/// Lifecycle callbacks shared by every session variant
pub trait SessionHook {
    /// Runs once before the first read.
    fn on_init(&mut self, _strategy: &mut dyn InputStrategy) {}

    /// Runs after every successful execution with the text written out.
    fn on_result(&mut self, _output: &str) {}

    /// Runs once after the loop, whatever ended it.
    fn on_exit(&mut self) {}
}

/// Seeds line-editing history with every known tag through a scratch file.
///
/// The file lives in `dir` for the whole session and is removed on exit (or
/// on drop). Creation, loading and removal failures are logged only.
pub struct HistorySeed {
    dir: PathBuf,
    tags: Vec<String>,
    file: Option<TempPath>,
}

impl HistorySeed {
    pub fn new<I, S>(dir: impl Into<PathBuf>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dir: dir.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            file: None,
        }
    }

    /// Path of the scratch file while the session is running.
    pub fn path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    fn dump(&self) -> std::io::Result<TempPath> {
        let mut file = NamedTempFile::new_in(&self.dir)?;
        for tag in &self.tags {
            writeln!(file, "{tag}")?;
        }
        file.flush()?;
        Ok(file.into_temp_path())
    }
}

impl SessionHook for HistorySeed {
    fn on_init(&mut self, strategy: &mut dyn InputStrategy) {
        let path = match self.dump() {
            Ok(path) => path,
            Err(e) => {
                warn!("{}: failed to create history file: {e}", self.dir.display());
                return;
            }
        };

        match strategy.load_history(&path) {
            Ok(()) => debug!(entries = self.tags.len(), "history seeded from {}", path.display()),
            Err(e) => warn!("{e}"),
        }
        self.file = Some(path);
    }

    fn on_exit(&mut self) {
        if let Some(path) = self.file.take() {
            let shown = path.display().to_string();
            if let Err(e) = path.close() {
                warn!("{shown}: history file was not deleted: {e}");
            }
        }
    }
}

/// Copies every result to the system clipboard, keeping one handle open for
/// the whole session.
#[derive(Default)]
pub struct ClipboardHook {
    clipboard: SystemClipboard,
}

impl SessionHook for ClipboardHook {
    fn on_result(&mut self, output: &str) {
        self.clipboard.copy(output);
    }
}
