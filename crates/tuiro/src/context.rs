//! Display context: color switch, palette and CI flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::DisplayConfig;
use crate::palette::{Palette, Role};
use crate::terminal::TerminalProbe;

/// One-way switch for ANSI escape sequences.
///
/// Clones share the same switch. Once [`disable`](Self::disable) has been
/// called, every clone paints plain text for the rest of the session.
#[derive(Debug, Clone)]
pub struct ColorState {
    enabled: Arc<AtomicBool>,
}

impl ColorState {
    /// A switch with colors on.
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Turn escape sequences off. There is no way back.
    pub fn disable(&self) {
        if self.enabled.swap(false, Ordering::AcqRel) {
            tracing::debug!("color output disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the formatting functions need to know about the display.
#[derive(Debug, Clone)]
pub struct DisplayContext {
    color: ColorState,
    palette: Palette,
    ci: bool,
}

impl DisplayContext {
    /// A context with colors enabled and CI mode off.
    pub fn new(palette: Palette) -> Self {
        Self {
            color: ColorState::new(),
            palette,
            ci: false,
        }
    }

    /// Share an existing color switch instead of creating a fresh one.
    pub fn with_color_state(mut self, color: ColorState) -> Self {
        self.color = color;
        self
    }

    /// Enter CI mode: non-interactive and colorless.
    pub fn with_ci(mut self, ci: bool) -> Self {
        self.ci = ci;
        if ci {
            self.color.disable();
        }
        self
    }

    /// Build a context from configuration and the detected terminal.
    ///
    /// Color is disabled when CI mode or no-color is requested, or when the
    /// probe does not report an interactive terminal.
    pub fn from_config(config: &DisplayConfig, probe: &TerminalProbe) -> Self {
        let palette = config
            .theme
            .as_deref()
            .map(Palette::resolve)
            .unwrap_or_default();
        let ctx = Self::new(palette).with_ci(config.ci);

        let interactive = probe.is_interactive();
        if config.no_color || !interactive {
            ctx.color.disable();
        }
        tracing::debug!(
            ci = config.ci,
            no_color = config.no_color,
            interactive,
            color = ctx.color.is_enabled(),
            "display context ready"
        );
        ctx
    }

    pub fn color(&self) -> &ColorState {
        &self.color
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_ci(&self) -> bool {
        self.ci
    }

    /// CI mode or colors switched off: output must stay free of escape
    /// sequences, cursor control included.
    pub fn is_plain(&self) -> bool {
        self.ci || !self.color.is_enabled()
    }

    /// Paint `text` with a role's tone, or return it untouched when color
    /// is off. The switch is read here, at format time.
    pub fn paint(&self, role: Role, text: &str) -> String {
        paint(&self.color, &self.palette, role, text, false)
    }

    /// Like [`paint`](Self::paint), bold.
    pub fn paint_bold(&self, role: Role, text: &str) -> String {
        paint(&self.color, &self.palette, role, text, true)
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

/// Shared by the context and the spinner thread, which owns copies of the
/// color switch and palette rather than the context itself.
pub(crate) fn paint(
    color: &ColorState,
    palette: &Palette,
    role: Role,
    text: &str,
    bold: bool,
) -> String {
    if !color.is_enabled() {
        return text.to_string();
    }
    let mut style = palette.tone(role).style();
    if bold {
        style = style.bold();
    }
    style.apply_to(text).to_string()
}
