//! Output sink and terminal capability probing.
//!
//! Detection failures always fall back to the safe answer: not
//! interactive, default width.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use console::Term;

/// Narrowest width used for sections and banners.
pub const MIN_WIDTH: usize = 40;
/// Widest width used for sections and banners.
pub const MAX_WIDTH: usize = 120;
/// Width used when the terminal cannot be queried.
pub const DEFAULT_WIDTH: usize = 80;

/// Clamp a detected terminal width into `[MIN_WIDTH, MAX_WIDTH]`.
pub fn clamp_width(detected: Option<usize>) -> usize {
    detected.unwrap_or(DEFAULT_WIDTH).clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Source of terminal facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalProbe {
    /// Ask the real standard output on every query.
    Stdout,
    /// Fixed answers, for piping into buffers and for tests.
    Fixed {
        interactive: bool,
        width: Option<usize>,
    },
}

impl TerminalProbe {
    pub fn stdout() -> Self {
        Self::Stdout
    }

    pub fn fixed(interactive: bool, width: Option<usize>) -> Self {
        Self::Fixed { interactive, width }
    }

    /// Whether stdout is attached to an interactive terminal.
    pub fn is_interactive(&self) -> bool {
        match self {
            Self::Stdout => atty::is(atty::Stream::Stdout),
            Self::Fixed { interactive, .. } => *interactive,
        }
    }

    /// Current column count, if it can be determined. Never cached.
    pub fn width(&self) -> Option<usize> {
        match self {
            Self::Stdout => Term::stdout()
                .size_checked()
                .map(|(_rows, cols)| cols as usize)
                .filter(|cols| *cols > 0),
            Self::Fixed { width, .. } => *width,
        }
    }
}

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Shared, line-oriented output stream.
///
/// Clones write to the same underlying writer. Each write holds the lock
/// for its whole duration, so a spinner frame and a status line never
/// interleave mid-line.
#[derive(Clone)]
pub struct Console {
    sink: Sink,
    probe: TerminalProbe,
}

impl Console {
    /// Standard output with live terminal detection.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), TerminalProbe::stdout())
    }

    pub fn new<W>(writer: W, probe: TerminalProbe) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
            probe,
        }
    }

    /// An in-memory console, returned with a handle for reading what was
    /// written.
    pub fn capture(probe: TerminalProbe) -> (Self, Captured) {
        let captured = Captured::default();
        (Self::new(captured.clone(), probe), captured)
    }

    pub fn probe(&self) -> &TerminalProbe {
        &self.probe
    }

    /// Write one line followed by a newline.
    pub fn write_line(&self, line: &str) {
        self.write_with(|w| writeln!(w, "{line}"));
    }

    /// Write several lines under a single lock.
    pub fn write_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write_with(|w| {
            for line in lines {
                writeln!(w, "{}", line.as_ref())?;
            }
            Ok(())
        });
    }

    /// Run `f` against the locked writer and flush.
    ///
    /// Write errors (closed pipe and the like) are logged and dropped:
    /// terminal output is never allowed to fail the caller.
    pub(crate) fn write_with<F>(&self, f: F)
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut guard = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let writer: &mut (dyn Write + Send) = guard.as_mut();
        let result = f(writer).and_then(|()| writer.flush());
        if let Err(err) = result {
            tracing::debug!(error = %err, "console write failed");
        }
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("probe", &self.probe)
            .finish_non_exhaustive()
    }
}

/// Read side of [`Console::capture`].
#[derive(Debug, Clone, Default)]
pub struct Captured {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Captured {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for Captured {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
