//! Line formatting.
//!
//! Every function here is pure: it takes a [`DisplayContext`] and returns
//! the finished lines without a trailing newline. Writing them is the
//! caller's business (see [`Tui`](crate::Tui)).

use std::fmt;

use console::measure_text_width;

use crate::context::DisplayContext;
use crate::palette::Role;

/// Outcome category for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Status {
    /// Parse a status name. Only the exact names `success`, `error`,
    /// `warning` and `info` are recognized; anything else is `Info`.
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Fixed tag printed in front of the message.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Success => "[OK]",
            Self::Error => "[ERROR]",
            Self::Warning => "[!]",
            Self::Info => "[*]",
        }
    }

    pub fn role(self) -> Role {
        match self {
            Self::Success => Role::Success,
            Self::Error => Role::Error,
            Self::Warning => Role::Warning,
            Self::Info => Role::Info,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// `<tag> <message>`, tag painted with the status role.
pub fn status_line(ctx: &DisplayContext, status: Status, message: &str) -> String {
    format!("{} {}", ctx.paint(status.role(), status.tag()), message)
}

/// `<tag> <message>` without any escape sequence, regardless of color state.
pub fn plain_status_line(status: Status, message: &str) -> String {
    format!("{} {}", status.tag(), message)
}

pub fn success(ctx: &DisplayContext, message: &str) -> String {
    status_line(ctx, Status::Success, message)
}

pub fn info(ctx: &DisplayContext, message: &str) -> String {
    status_line(ctx, Status::Info, message)
}

pub fn warning(ctx: &DisplayContext, message: &str) -> String {
    status_line(ctx, Status::Warning, message)
}

pub fn error(ctx: &DisplayContext, message: &str) -> String {
    status_line(ctx, Status::Error, message)
}

/// Section heading framed by two horizontal rules of `width` columns.
pub fn section(ctx: &DisplayContext, title: &str, width: usize) -> Vec<String> {
    let rule = "─".repeat(width);
    vec![
        String::new(),
        ctx.paint_bold(Role::Accent, &rule),
        ctx.paint_bold(Role::Accent, &format!("  {title}")),
        ctx.paint_bold(Role::Accent, &rule),
    ]
}

/// Lightweight heading: `▶ <title>`.
pub fn subsection(ctx: &DisplayContext, title: &str) -> Vec<String> {
    vec![
        String::new(),
        ctx.paint_bold(Role::Accent, &format!("▶ {title}")),
    ]
}

/// Double-line box `width` columns wide with the title centered inside.
///
/// Titles wider than the box are kept whole and simply overflow it.
pub fn banner(ctx: &DisplayContext, title: &str, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(2);
    let title_width = measure_text_width(title);
    let left = inner.saturating_sub(title_width) / 2;
    let right = inner.saturating_sub(left + title_width);

    let top = format!("╔{}╗", "═".repeat(inner));
    let middle = format!("║{}{}{}║", " ".repeat(left), title, " ".repeat(right));
    let bottom = format!("╚{}╝", "═".repeat(inner));

    vec![
        String::new(),
        ctx.paint_bold(Role::Accent, &top),
        ctx.paint_bold(Role::Accent, &middle),
        ctx.paint_bold(Role::Accent, &bottom),
        String::new(),
    ]
}

/// `$ <cmd>` in the dim role.
pub fn command(ctx: &DisplayContext, cmd: &str) -> String {
    ctx.paint(Role::Dim, &format!("$ {cmd}"))
}

/// Join arguments the way they would be typed.
pub fn command_args<S: AsRef<str>>(ctx: &DisplayContext, args: &[S]) -> String {
    let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
    command(ctx, &args.join(" "))
}

/// `<label>: <value>`, label in the text role.
pub fn result(ctx: &DisplayContext, label: &str, value: &str) -> String {
    format!("{} {}", ctx.paint(Role::Text, &format!("{label}:")), value)
}

/// Two-column table aligned on the longest label. Empty input yields no
/// lines.
pub fn table<L, V>(rows: &[(L, V)]) -> Vec<String>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    let Some(label_width) = rows
        .iter()
        .map(|(label, _)| measure_text_width(label.as_ref()))
        .max()
    else {
        return Vec::new();
    };

    rows.iter()
        .map(|(label, value)| {
            let label = label.as_ref();
            let pad = label_width - measure_text_width(label);
            format!("{label}{}  {}", " ".repeat(pad), value.as_ref())
        })
        .collect()
}
