//! # tuiro
//!
//! Tiny terminal UI helper for build scripts and small CLIs: colored status
//! lines, section headings, banners, aligned tables and spinners.
//!
//! ## Architecture
//!
//! ```text
//! DisplayConfig ──► DisplayContext ──► printer (pure line formatting)
//!  (flags, env)      (ColorState,          │
//!                     Palette, CI)         ▼
//!                          │             Tui ──► Console (shared writer)
//!                          └──────────► Spinner ──► animation thread
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tuiro::{DisplayConfig, Tui};
//!
//! let tui = Tui::from_config(&DisplayConfig::from_env());
//! tui.banner("release");
//! tui.section("Build");
//!
//! let artifacts: Result<u32, std::io::Error> = tui.spin("Compiling", || Ok(3));
//! if let Ok(count) = artifacts {
//!     tui.table(&[("artifacts", count.to_string())]);
//! }
//! ```

pub mod config;
pub mod context;
pub mod palette;
pub mod printer;
pub mod spinner;
pub mod terminal;
pub mod tui;

pub use config::DisplayConfig;
pub use context::{ColorState, DisplayContext};
pub use palette::{theme_names, Palette, Role, Tone};
pub use printer::Status;
pub use spinner::{RunningSpinner, Spinner, SpinnerMode};
pub use terminal::{Captured, Console, TerminalProbe};
pub use tui::Tui;
