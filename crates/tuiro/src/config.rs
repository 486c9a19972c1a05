//! Display configuration.
//!
//! Priority order:
//! 1. CLI flags (applied with [`DisplayConfig::merge_flags`])
//! 2. Environment variables (`CI`, `NO_COLOR`, `TUIRO_THEME`)
//! 3. Defaults

/// Theme override environment variable.
pub const THEME_ENV: &str = "TUIRO_THEME";

/// Requested display behavior, before terminal detection is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Force non-interactive, colorless output.
    pub ci: bool,

    /// Disable colors without changing interactivity.
    pub no_color: bool,

    /// Theme name. `None` means the default palette.
    pub theme: Option<String>,
}

impl DisplayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ci = lookup("CI").map(|v| is_truthy(&v)).unwrap_or(false);
        // https://no-color.org: any non-empty value
        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        let theme = lookup(THEME_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            ci,
            no_color,
            theme,
        }
    }

    /// Apply command-line flags on top of this configuration.
    ///
    /// Boolean flags can only switch a setting on; an explicit theme
    /// replaces the one from the environment.
    pub fn merge_flags(mut self, ci: bool, no_color: bool, theme: Option<String>) -> Self {
        self.ci |= ci;
        self.no_color |= no_color;
        if theme.is_some() {
            self.theme = theme;
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
