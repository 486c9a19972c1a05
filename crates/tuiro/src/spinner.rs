//! Spinner for long-running operations.
//!
//! Lifecycle is `Spinner` (idle) → [`RunningSpinner`] → stopped. Starting
//! consumes the idle spinner and stopping consumes the running one, so a
//! spinner can never be restarted.
//!
//! In an interactive terminal a background thread redraws the current line
//! with the next frame until the spinner is stopped. Otherwise (CI mode,
//! colors off, or output that is not a terminal) the spinner prints plain
//! tagged lines and never starts a thread.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::context::{paint, ColorState, DisplayContext};
use crate::palette::{Palette, Role};
use crate::printer::{plain_status_line, status_line, Status};
use crate::terminal::Console;

/// Default rotation.
pub const FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Rotation for terminals without Unicode glyphs.
pub const ASCII_FRAMES: &[&str] = &["-", "\\", "|", "/"];

/// Default delay between frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// How a spinner session renders, decided once at start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerMode {
    /// Animated in place by a background thread.
    Interactive,
    /// Plain lines, no animation, no cursor control.
    Static,
}

/// An idle spinner.
#[derive(Debug)]
pub struct Spinner<'a> {
    ctx: &'a DisplayContext,
    console: Console,
    message: String,
    frames: &'static [&'static str],
    interval: Duration,
}

impl<'a> Spinner<'a> {
    pub fn new(ctx: &'a DisplayContext, console: &Console, message: impl Into<String>) -> Self {
        Self {
            ctx,
            console: console.clone(),
            message: message.into(),
            frames: FRAMES,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Use a different frame rotation. An empty rotation is ignored.
    pub fn frames(mut self, frames: &'static [&'static str]) -> Self {
        if !frames.is_empty() {
            self.frames = frames;
        }
        self
    }

    /// Change the delay between frames.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start the spinner.
    ///
    /// Static mode prints `[*] <message>` and returns. Interactive mode draws
    /// the first frame before returning and leaves a thread animating the
    /// rest.
    pub fn start(self) -> RunningSpinner<'a> {
        let Spinner {
            ctx,
            console,
            message,
            frames,
            interval,
        } = self;

        let interactive = !ctx.is_plain() && console.probe().is_interactive();
        let running = Arc::new(AtomicBool::new(true));

        let mut spinner = RunningSpinner {
            ctx,
            console,
            message,
            mode: SpinnerMode::Static,
            running,
            worker: None,
            finished: false,
        };

        if !interactive {
            tracing::debug!(message = %spinner.message, "spinner started in static mode");
            spinner
                .console
                .write_line(&plain_status_line(Status::Info, &spinner.message));
            return spinner;
        }

        let frame = FrameWriter {
            console: spinner.console.clone(),
            color: ctx.color().clone(),
            palette: *ctx.palette(),
            message: spinner.message.clone(),
            frames,
        };
        frame.draw(0);

        let running = Arc::clone(&spinner.running);
        let spawned = thread::Builder::new()
            .name("tuiro-spinner".to_string())
            .spawn(move || animate(frame, interval, running));

        match spawned {
            Ok(handle) => {
                tracing::debug!(message = %spinner.message, "spinner started in interactive mode");
                spinner.mode = SpinnerMode::Interactive;
                spinner.worker = Some(handle);
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not spawn spinner thread, falling back to static output");
                spinner.console.write_with(|w| {
                    w.write_all(b"\r")?;
                    w.queue(Clear(ClearType::UntilNewLine))?;
                    writeln!(w, "{}", plain_status_line(Status::Info, &spinner.message))
                });
            }
        }

        spinner
    }
}

/// A started spinner.
///
/// Dropping it without calling one of the stopping methods stops it with
/// [`Status::Error`]: the thread is joined and the failure is reported.
#[derive(Debug)]
pub struct RunningSpinner<'a> {
    ctx: &'a DisplayContext,
    console: Console,
    message: String,
    mode: SpinnerMode,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

impl RunningSpinner<'_> {
    pub fn mode(&self) -> SpinnerMode {
        self.mode
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stop and print the final status line.
    ///
    /// Returns only after the animation thread has exited, so no frame can
    /// follow the status line. `final_message` defaults to the start message.
    pub fn stop(mut self, status: Status, final_message: Option<&str>) {
        self.finish(status, final_message);
    }

    pub fn succeed(self, final_message: Option<&str>) {
        self.stop(Status::Success, final_message);
    }

    pub fn fail(self, final_message: Option<&str>) {
        self.stop(Status::Error, final_message);
    }

    pub fn warn(self, final_message: Option<&str>) {
        self.stop(Status::Warning, final_message);
    }

    fn finish(&mut self, status: Status, final_message: Option<&str>) {
        if self.finished {
            return;
        }
        self.finished = true;

        self.running.store(false, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            worker.thread().unpark();
            if worker.join().is_err() {
                tracing::warn!("spinner thread panicked");
            }
        }

        let message = final_message.unwrap_or(&self.message);
        tracing::debug!(%status, mode = ?self.mode, "spinner stopped");

        match self.mode {
            SpinnerMode::Static => {
                self.console.write_line(&plain_status_line(status, message));
            }
            SpinnerMode::Interactive => {
                let line = status_line(self.ctx, status, message);
                self.console.write_with(|w| {
                    w.write_all(b"\r")?;
                    w.queue(Clear(ClearType::UntilNewLine))?;
                    writeln!(w, "{line}")
                });
            }
        }
    }
}

impl Drop for RunningSpinner<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!(message = %self.message, "spinner dropped while running");
            self.finish(Status::Error, None);
        }
    }
}

/// Everything the animation thread needs, owned.
struct FrameWriter {
    console: Console,
    color: ColorState,
    palette: Palette,
    message: String,
    frames: &'static [&'static str],
}

impl FrameWriter {
    fn draw(&self, index: usize) {
        let glyph = self.frames[index % self.frames.len()];
        let glyph = paint(&self.color, &self.palette, Role::Info, glyph, false);
        tracing::trace!(index, "spinner frame");
        self.console
            .write_with(|w| write!(w, "\r{glyph} {}", self.message));
    }
}

fn animate(frame: FrameWriter, interval: Duration, running: Arc<AtomicBool>) {
    let mut index = 1;
    loop {
        thread::park_timeout(interval);
        if !running.load(Ordering::Acquire) {
            break;
        }
        frame.draw(index);
        index = index.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::TerminalProbe;

    #[test]
    fn test_static_when_not_a_terminal() {
        let ctx = DisplayContext::default();
        let (console, captured) = Console::capture(TerminalProbe::fixed(false, None));

        let spinner = Spinner::new(&ctx, &console, "Compiling").start();
        assert_eq!(spinner.mode(), SpinnerMode::Static);
        spinner.warn(Some("slow"));

        assert_eq!(captured.contents(), "[*] Compiling\n[!] slow\n");
    }

    #[test]
    fn test_ci_forces_static_on_a_terminal() {
        let ctx = DisplayContext::default().with_ci(true);
        let (console, captured) = Console::capture(TerminalProbe::fixed(true, Some(80)));

        let spinner = Spinner::new(&ctx, &console, "Linting").start();
        assert_eq!(spinner.mode(), SpinnerMode::Static);
        spinner.stop(Status::parse("nonsense"), None);

        assert_eq!(captured.contents(), "[*] Linting\n[*] Linting\n");
    }

    #[test]
    fn test_interactive_draws_first_frame_before_returning() {
        let ctx = DisplayContext::default();
        let (console, captured) = Console::capture(TerminalProbe::fixed(true, Some(80)));

        let spinner = Spinner::new(&ctx, &console, "Fetching")
            .interval(Duration::from_secs(60))
            .start();
        assert_eq!(spinner.mode(), SpinnerMode::Interactive);
        let contents = captured.contents();
        assert!(contents.starts_with('\r'));
        assert!(contents.contains(FRAMES[0]));
        assert!(contents.ends_with(" Fetching"));

        spinner.succeed(None);
    }

    #[test]
    fn test_stop_wakes_a_sleeping_worker() {
        let ctx = DisplayContext::default();
        let (console, _captured) = Console::capture(TerminalProbe::fixed(true, None));

        let spinner = Spinner::new(&ctx, &console, "Waiting")
            .interval(Duration::from_secs(60))
            .start();
        let started = std::time::Instant::now();
        spinner.succeed(None);
        assert!(started.elapsed() < Duration::from_secs(30));
    }

    #[test]
    fn test_drop_reports_failure() {
        let ctx = DisplayContext::default().with_ci(true);
        let (console, captured) = Console::capture(TerminalProbe::fixed(false, None));

        {
            let _spinner = Spinner::new(&ctx, &console, "Deploying").start();
        }

        assert_eq!(captured.contents(), "[*] Deploying\n[ERROR] Deploying\n");
    }

    #[test]
    fn test_ascii_frames_and_empty_frames_ignored() {
        let ctx = DisplayContext::default().with_ci(true);
        let (console, _captured) = Console::capture(TerminalProbe::fixed(true, None));

        let spinner = Spinner::new(&ctx, &console, "x").frames(&[]);
        assert_eq!(spinner.frames, FRAMES);
        let spinner = spinner.frames(ASCII_FRAMES);
        assert_eq!(spinner.frames, ASCII_FRAMES);
    }
}
