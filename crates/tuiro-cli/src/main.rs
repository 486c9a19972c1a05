//! tuiro demo CLI.
//!
//! Prints a banner, a section, the four status kinds, a table and two
//! spinner steps, honoring `--ci`, `--no-color` and `--theme`.

use std::thread;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;
use tuiro::{theme_names, DisplayConfig, Tui};

mod error;

use error::DemoError;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "TUIRO_LOG";

#[derive(Parser, Debug)]
#[command(name = "tuiro", version)]
#[command(about = "tuiro - tiny terminal UI helper for clean, colorful build output")]
struct Cli {
    /// CI mode: no colors, no animation
    #[arg(long)]
    ci: bool,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Color theme (unknown names use the default theme)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Make the last demo step fail
    #[arg(long)]
    fail: bool,
}

impl Cli {
    /// Parse arguments, with the theme registry listed in `--help`.
    fn parse_with_themes() -> Self {
        let themes = theme_names().collect::<Vec<_>>().join(", ");
        let matches = Self::command()
            .after_help(format!("Available themes: {themes}"))
            .get_matches();
        match Self::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(err) => err.exit(),
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse_with_themes();

    // Diagnostics go to stderr so they never mix with demo output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = DisplayConfig::from_env().merge_flags(cli.ci, cli.no_color, cli.theme);
    tracing::debug!(?config, "starting demo");

    let tui = Tui::from_config(&config);
    run_demo(&tui, config.ci, cli.fail)?;
    Ok(())
}

fn run_demo(tui: &Tui, ci: bool, fail: bool) -> Result<(), DemoError> {
    tui.banner("tuiro");
    tui.section("Demo");
    tui.success("tuiro is installed and working!");
    tui.info("You're ready to build beautiful CLI scripts.");
    if ci {
        tui.warning("CI mode active!");
    }

    tui.subsection("Environment");
    let themes = theme_names().collect::<Vec<_>>().join(", ");
    tui.table(&[
        ("version", env!("CARGO_PKG_VERSION")),
        ("themes", themes.as_str()),
    ]);
    tui.command_args(&["tuiro", "--theme", "pastel"]);

    tui.step("Resolve palette", || {
        tui.result("theme", &palette_label(tui));
        Ok::<_, DemoError>(())
    })?;

    tui.spin("Warming up", || {
        thread::sleep(Duration::from_millis(600));
        Ok::<_, DemoError>(())
    })?;

    tui.spin("Running checks", || {
        thread::sleep(Duration::from_millis(600));
        if fail {
            return Err(DemoError::CheckFailed {
                check: "demo".to_string(),
            });
        }
        Ok(())
    })?;

    tui.success("All done.");
    Ok(())
}

fn palette_label(tui: &Tui) -> String {
    let palette = *tui.context().palette();
    theme_names()
        .find(|name| tuiro::Palette::lookup(name) == Some(palette))
        .unwrap_or("default")
        .to_string()
}
