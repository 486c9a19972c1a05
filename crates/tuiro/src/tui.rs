//! Caller-facing output handle.

use crate::config::DisplayConfig;
use crate::context::DisplayContext;
use crate::printer::{self, Status};
use crate::spinner::Spinner;
use crate::terminal::{clamp_width, Console};

/// Display context plus the console it writes to.
#[derive(Debug, Clone)]
pub struct Tui {
    ctx: DisplayContext,
    console: Console,
}

impl Tui {
    pub fn new(ctx: DisplayContext, console: Console) -> Self {
        Self { ctx, console }
    }

    /// Standard output, configured from `config` and the detected terminal.
    pub fn from_config(config: &DisplayConfig) -> Self {
        let console = Console::stdout();
        let ctx = DisplayContext::from_config(config, console.probe());
        Self::new(ctx, console)
    }

    pub fn context(&self) -> &DisplayContext {
        &self.ctx
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Current clamped width. Queried on every call.
    pub fn width(&self) -> usize {
        clamp_width(self.console.probe().width())
    }

    pub fn status(&self, status: Status, message: &str) {
        self.console
            .write_line(&printer::status_line(&self.ctx, status, message));
    }

    pub fn success(&self, message: &str) {
        self.status(Status::Success, message);
    }

    pub fn info(&self, message: &str) {
        self.status(Status::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.status(Status::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.status(Status::Error, message);
    }

    pub fn section(&self, title: &str) {
        self.console
            .write_lines(printer::section(&self.ctx, title, self.width()));
    }

    pub fn subsection(&self, title: &str) {
        self.console
            .write_lines(printer::subsection(&self.ctx, title));
    }

    pub fn banner(&self, title: &str) {
        self.console
            .write_lines(printer::banner(&self.ctx, title, self.width()));
    }

    pub fn command(&self, cmd: &str) {
        self.console.write_line(&printer::command(&self.ctx, cmd));
    }

    pub fn command_args<S: AsRef<str>>(&self, args: &[S]) {
        self.console
            .write_line(&printer::command_args(&self.ctx, args));
    }

    pub fn result(&self, label: &str, value: &str) {
        self.console
            .write_line(&printer::result(&self.ctx, label, value));
    }

    pub fn table<L, V>(&self, rows: &[(L, V)])
    where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        self.console.write_lines(printer::table(rows));
    }

    /// An idle spinner bound to this handle.
    pub fn spinner(&self, message: impl Into<String>) -> Spinner<'_> {
        Spinner::new(&self.ctx, &self.console, message)
    }

    /// Run `op` under a spinner.
    ///
    /// `Ok` stops the spinner with success, `Err` with failure; either way
    /// the result is handed back untouched. A panic inside `op` also reports
    /// failure while unwinding.
    pub fn spin<T, E, F>(&self, message: &str, op: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let spinner = self.spinner(message).start();
        let result = op();
        match &result {
            Ok(_) => spinner.succeed(None),
            Err(_) => spinner.fail(None),
        }
        result
    }

    /// Run `op` between an announcement and a completion line.
    pub fn step<T, E, F>(&self, title: &str, op: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.info(&format!("{title}..."));
        let result = op();
        match &result {
            Ok(_) => self.success(&format!("{title} completed")),
            Err(_) => self.error(&format!("{title} failed")),
        }
        result
    }
}
