use std::thread;
use std::time::Duration;

use tuiro::{Console, DisplayConfig, DisplayContext, SpinnerMode, Status, TerminalProbe, Tui};

fn tui_with(interactive: bool, ci: bool) -> (Tui, tuiro::Captured) {
    let (console, captured) = Console::capture(TerminalProbe::fixed(interactive, Some(80)));
    let ctx = DisplayContext::default().with_ci(ci);
    (Tui::new(ctx, console), captured)
}

#[derive(Debug, PartialEq)]
struct BuildError {
    code: i32,
}

#[test]
fn non_interactive_start_then_succeed_prints_two_plain_lines() {
    let (tui, captured) = tui_with(false, false);

    let spinner = tui.spinner("Installing dependencies").start();
    spinner.succeed(Some("done"));

    let output = captured.contents();
    assert_eq!(output, "[*] Installing dependencies\n[OK] done\n");
    assert!(!output.contains('\r'));
    assert!(!output.contains('\x1b'));
}

#[test]
fn interactive_spinner_animates_until_stopped() {
    let (tui, captured) = tui_with(true, false);

    let spinner = tui
        .spinner("Downloading")
        .interval(Duration::from_millis(5))
        .start();
    assert_eq!(spinner.mode(), SpinnerMode::Interactive);
    assert!(!captured.is_empty(), "a frame is drawn before start returns");

    thread::sleep(Duration::from_millis(60));
    spinner.stop(Status::Success, Some("Downloaded"));

    let after_stop = captured.contents();
    thread::sleep(Duration::from_millis(60));
    assert_eq!(captured.contents(), after_stop, "no writes after stop returns");

    // Several frames, then the erase sequence, then the final line last.
    assert!(after_stop.matches('\r').count() > 2);
    let erase = after_stop.rfind("\r\x1b[K").expect("line erased before final status");
    let final_line = &after_stop[erase + 4..];
    assert!(final_line.contains("[OK]"));
    assert!(final_line.ends_with(" Downloaded\n"));
    assert_eq!(final_line.matches('\n').count(), 1);
}

#[test]
fn interactive_stop_defaults_to_start_message() {
    let (tui, captured) = tui_with(true, false);

    tui.spinner("Packaging").start().warn(None);

    let output = captured.contents();
    assert!(output.contains("[!]"));
    assert!(output.ends_with(" Packaging\n"));
}

#[test]
fn scoped_spinner_reports_failure_and_returns_original_error() {
    let (tui, captured) = tui_with(false, true);

    let result: Result<(), BuildError> = tui.spin("Running tests", || Err(BuildError { code: 101 }));

    assert_eq!(result, Err(BuildError { code: 101 }));
    assert_eq!(
        captured.contents(),
        "[*] Running tests\n[ERROR] Running tests\n"
    );
}

#[test]
fn scoped_spinner_reports_success() {
    let (tui, captured) = tui_with(false, true);

    let value: Result<&str, BuildError> = tui.spin("Linking", || Ok("app.bin"));

    assert_eq!(value, Ok("app.bin"));
    assert_eq!(captured.contents(), "[*] Linking\n[OK] Linking\n");
}

#[test]
fn panic_inside_scoped_spinner_still_reports_failure() {
    let (tui, captured) = tui_with(true, false);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _: Result<(), BuildError> = tui.spin("Migrating", || panic!("disk full"));
    }));

    let payload = outcome.expect_err("panic propagates");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"disk full"));
    let output = captured.contents();
    assert!(output.contains("[ERROR]"));
    assert!(output.ends_with(" Migrating\n"));
}

#[test]
fn no_color_on_a_terminal_spins_statically() {
    let probe = TerminalProbe::fixed(true, Some(80));
    let config = DisplayConfig {
        no_color: true,
        ..DisplayConfig::default()
    };
    let ctx = DisplayContext::from_config(&config, &probe);
    let (console, captured) = Console::capture(probe);
    let tui = Tui::new(ctx, console);

    let spinner = tui.spinner("Indexing").start();
    assert_eq!(spinner.mode(), SpinnerMode::Static);
    spinner.succeed(None);

    let output = captured.contents();
    assert_eq!(output, "[*] Indexing\n[OK] Indexing\n");
    assert!(!output.contains('\r'));
    assert!(!output.contains('\x1b'));
}

#[test]
fn color_disabled_after_construction_spins_statically() {
    let (console, captured) = Console::capture(TerminalProbe::fixed(true, None));
    let ctx = DisplayContext::default();
    ctx.color().disable();
    let tui = Tui::new(ctx, console);

    let spinner = tui.spinner("Indexing").start();
    assert_eq!(spinner.mode(), SpinnerMode::Static);
    spinner.fail(Some("Index corrupt"));

    assert_eq!(captured.contents(), "[*] Indexing\n[ERROR] Index corrupt\n");
}
