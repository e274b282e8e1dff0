use super::{InputStrategy, ReadOutcome};
use crate::ui::PromptLabels;
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::{debug, warn};

enum Pending {
    Text(String),
    Reader(Box<dyn Read + Send>),
    Consumed,
}

enum Delivery {
    Read(io::Result<String>),
    Interrupted,
}

/// Hands over text that is already available, exactly once.
///
/// A reader-backed strategy reads the whole stream on the first call; an
/// interrupted read is reported as [`ReadOutcome::Interrupted`]. With
/// [`DirectInputStrategy::interruptible`], a message on the interrupt channel
/// ends the wait even while the stream is still blocked.
pub struct DirectInputStrategy {
    pending: Pending,
    interrupts: Option<Receiver<()>>,
}

impl DirectInputStrategy {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            pending: Pending::Text(text.into()),
            interrupts: None,
        }
    }

    pub fn from_reader(reader: Box<dyn Read + Send>) -> Self {
        Self {
            pending: Pending::Reader(reader),
            interrupts: None,
        }
    }

    /// Reads the stream on a helper thread and returns
    /// [`ReadOutcome::Interrupted`] as soon as `interrupts` receives a message.
    pub fn interruptible(mut self, interrupts: Receiver<()>) -> Self {
        self.interrupts = Some(interrupts);
        self
    }
}

impl InputStrategy for DirectInputStrategy {
    fn input(&mut self, _labels: Option<&PromptLabels>) -> ReadOutcome {
        match std::mem::replace(&mut self.pending, Pending::Consumed) {
            Pending::Text(text) => ReadOutcome::Line(text),
            Pending::Reader(reader) => {
                let result = match self.interrupts.take() {
                    Some(interrupts) => race_interrupt(reader, interrupts),
                    None => Delivery::Read(read_all(reader)),
                };
                match result {
                    Delivery::Read(Ok(text)) => ReadOutcome::Line(text),
                    Delivery::Interrupted => ReadOutcome::Interrupted,
                    Delivery::Read(Err(e)) if e.kind() == io::ErrorKind::Interrupted => {
                        ReadOutcome::Interrupted
                    }
                    Delivery::Read(Err(e)) => {
                        warn!("failed to read input: {e}");
                        ReadOutcome::EndOfInput
                    }
                }
            }
            Pending::Consumed => ReadOutcome::EndOfInput,
        }
    }
}

// The reader thread is left blocked when the interrupt wins.
fn race_interrupt(reader: Box<dyn Read + Send>, interrupts: Receiver<()>) -> Delivery {
    let (tx, rx) = mpsc::channel();

    let reads = tx.clone();
    thread::spawn(move || {
        if reads.send(Delivery::Read(read_all(reader))).is_err() {
            debug!("input arrived after the wait ended");
        }
    });
    thread::spawn(move || {
        if interrupts.recv().is_ok() && tx.send(Delivery::Interrupted).is_err() {
            debug!("interrupt arrived after the wait ended");
        }
    });

    match rx.recv() {
        Ok(delivery) => delivery,
        Err(_) => Delivery::Read(Err(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "input thread ended without a result",
        ))),
    }
}

// Unlike `read_to_string`, an interrupted read is reported instead of retried.
fn read_all(mut reader: Box<dyn Read + Send>) -> io::Result<String> {
    let mut bytes = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        match reader.read(&mut chunk)? {
            0 => break,
            n => bytes.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::Sender;

    struct InterruptedReader;

    impl Read for InterruptedReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
        }
    }

    /// Blocks like a terminal with nothing typed until its sender is dropped.
    struct StalledReader(Receiver<()>);

    impl Read for StalledReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    fn stalled() -> (Sender<()>, StalledReader) {
        let (tx, rx) = mpsc::channel();
        (tx, StalledReader(rx))
    }

    #[test]
    fn test_second_call_is_end_of_input() {
        let mut strategy = DirectInputStrategy::new("cat, dog");
        assert_eq!(strategy.input(None), ReadOutcome::Line("cat, dog".to_string()));
        assert_eq!(strategy.input(None), ReadOutcome::EndOfInput);
    }

    #[test]
    fn test_reads_whole_stream() {
        let reader = io::Cursor::new(b"cat\ndog\n".to_vec());
        let mut strategy = DirectInputStrategy::from_reader(Box::new(reader));
        assert_eq!(strategy.input(None), ReadOutcome::Line("cat\ndog\n".to_string()));
        assert_eq!(strategy.input(None), ReadOutcome::EndOfInput);
    }

    #[test]
    fn test_interrupted_read() {
        let mut strategy = DirectInputStrategy::from_reader(Box::new(InterruptedReader));
        assert_eq!(strategy.input(None), ReadOutcome::Interrupted);
    }

    #[test]
    fn test_interrupt_ends_blocked_read() {
        let (release, reader) = stalled();
        let (interrupt, interrupts) = mpsc::channel();
        let mut strategy =
            DirectInputStrategy::from_reader(Box::new(reader)).interruptible(interrupts);

        interrupt.send(()).unwrap();
        assert_eq!(strategy.input(None), ReadOutcome::Interrupted);
        assert_eq!(strategy.input(None), ReadOutcome::EndOfInput);
        drop(release);
    }

    #[test]
    fn test_interruptible_read_without_interrupt() {
        let (_interrupt, interrupts) = mpsc::channel();
        let reader = io::Cursor::new(b"cat, dog".to_vec());
        let mut strategy =
            DirectInputStrategy::from_reader(Box::new(reader)).interruptible(interrupts);
        assert_eq!(strategy.input(None), ReadOutcome::Line("cat, dog".to_string()));
    }

    #[test]
    fn test_has_no_labels() {
        let strategy = DirectInputStrategy::new("");
        assert!(strategy.labels().is_none());
    }
}
