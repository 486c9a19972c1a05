//! Color palettes.
//!
//! A palette maps each semantic [`Role`] to a [`Tone`]. Palettes are plain
//! `Copy` values kept in a closed registry; themes that share a tone with
//! the default copy it explicitly when the table is built.

use console::{Color, Style};

/// Semantic output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Info,
    Success,
    Warning,
    Error,
    Accent,
    Dim,
    Text,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Info,
        Role::Success,
        Role::Warning,
        Role::Error,
        Role::Accent,
        Role::Dim,
        Role::Text,
    ];
}

/// The display color assigned to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Standard ANSI foreground color.
    Normal(Color),
    /// High-intensity variant of an ANSI foreground color.
    Bright(Color),
    /// Faint text in the terminal's default color.
    Dim,
}

impl Tone {
    /// The console style for this tone.
    ///
    /// Styling is forced on: whether escapes are emitted at all is decided
    /// by [`ColorState`](crate::ColorState), not by console's own detection.
    pub fn style(self) -> Style {
        let style = match self {
            Tone::Normal(color) => Style::new().fg(color),
            Tone::Bright(color) => Style::new().fg(color).bright(),
            Tone::Dim => Style::new().dim(),
        };
        style.force_styling(true)
    }
}

/// Role to tone mapping for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub info: Tone,
    pub success: Tone,
    pub warning: Tone,
    pub error: Tone,
    pub accent: Tone,
    pub dim: Tone,
    pub text: Tone,
}

impl Palette {
    /// Tone for a role.
    pub fn tone(&self, role: Role) -> Tone {
        match role {
            Role::Info => self.info,
            Role::Success => self.success,
            Role::Warning => self.warning,
            Role::Error => self.error,
            Role::Accent => self.accent,
            Role::Dim => self.dim,
            Role::Text => self.text,
        }
    }

    /// Resolve a theme name, falling back to [`DEFAULT`] for unknown names.
    pub fn resolve(name: &str) -> Palette {
        match Self::lookup(name) {
            Some(palette) => palette,
            None => {
                tracing::debug!(theme = name, "unknown theme, using default");
                DEFAULT
            }
        }
    }

    /// Strict lookup. Matching ignores surrounding whitespace and ASCII case.
    pub fn lookup(name: &str) -> Option<Palette> {
        let name = name.trim();
        REGISTRY
            .iter()
            .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
            .map(|(_, palette)| *palette)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|(_, palette)| *palette)
            })
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT
    }
}

/// The base palette.
pub const DEFAULT: Palette = Palette {
    info: Tone::Normal(Color::Cyan),
    success: Tone::Normal(Color::Green),
    warning: Tone::Normal(Color::Yellow),
    error: Tone::Normal(Color::Red),
    accent: Tone::Bright(Color::Blue),
    dim: Tone::Dim,
    text: Tone::Bright(Color::White),
};

/// Every role in the same neutral color.
pub const MONOCHROME: Palette = Palette {
    info: Tone::Normal(Color::White),
    success: Tone::Normal(Color::White),
    warning: Tone::Normal(Color::White),
    error: Tone::Normal(Color::White),
    accent: Tone::Normal(Color::White),
    dim: Tone::Normal(Color::White),
    text: Tone::Normal(Color::White),
};

/// Soft bright colors; keeps the default dim tone.
pub const PASTEL: Palette = Palette {
    info: Tone::Bright(Color::Cyan),
    success: Tone::Bright(Color::Green),
    warning: Tone::Bright(Color::Yellow),
    error: Tone::Bright(Color::Magenta),
    accent: Tone::Bright(Color::Blue),
    dim: DEFAULT.dim,
    text: Tone::Bright(Color::White),
};

/// Registered themes, in the order they are listed to users.
const REGISTRY: &[(&str, Palette)] = &[
    ("default", DEFAULT),
    ("monochrome", MONOCHROME),
    ("pastel", PASTEL),
];

/// Alternate spellings accepted by [`Palette::lookup`] but not listed.
const ALIASES: &[(&str, Palette)] = &[("mono", MONOCHROME)];

/// Names of the registered themes.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}
