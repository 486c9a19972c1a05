use assert_cmd::Command;

fn tuiro() -> Command {
    let mut cmd = Command::cargo_bin("tuiro").unwrap();
    cmd.env_remove("CI")
        .env_remove("NO_COLOR")
        .env_remove("TUIRO_THEME")
        .env_remove("TUIRO_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn ci_run_is_plain_and_static() {
    let stdout = stdout_of(tuiro().arg("--ci"));

    assert!(!stdout.contains('\x1b'));
    assert!(!stdout.contains('\r'));
    assert!(stdout.contains("[OK] tuiro is installed and working!"));
    assert!(stdout.contains("[!] CI mode active!"));
    assert!(stdout.contains("[*] Warming up\n[OK] Warming up\n"));
    assert!(stdout.contains("[*] Running checks\n[OK] Running checks\n"));
    assert!(stdout.ends_with("[OK] All done.\n"));
}

#[test]
fn theme_flag_selects_palette_and_unknown_names_fall_back() {
    let pastel = stdout_of(tuiro().args(["--theme", "pastel"]));
    assert!(pastel.contains("theme: pastel\n"));

    let mono = stdout_of(tuiro().args(["--theme", "monochrome"]));
    assert!(mono.contains("theme: monochrome\n"));

    let unknown = stdout_of(tuiro().args(["--theme", "no-such-theme"]));
    assert!(unknown.contains("theme: default\n"));
}

#[test]
fn theme_env_is_used_when_flag_is_absent() {
    let stdout = stdout_of(tuiro().env("TUIRO_THEME", "pastel"));
    assert!(stdout.contains("theme: pastel\n"));

    let stdout = stdout_of(tuiro().env("TUIRO_THEME", "pastel").args(["--theme", "monochrome"]));
    assert!(stdout.contains("theme: monochrome\n"));
}

#[test]
fn piped_output_is_colorless_without_flags() {
    // stdout is a pipe under the test harness, so color is disabled.
    let stdout = stdout_of(&mut tuiro());
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("[*] You're ready to build beautiful CLI scripts."));
    assert!(!stdout.contains("CI mode active"));
}

#[test]
fn help_lists_themes() {
    let stdout = stdout_of(tuiro().arg("--help"));
    assert!(stdout.contains("--theme <NAME>"));
    assert!(stdout.contains("Available themes: default, monochrome, pastel"));
}

#[test]
fn version_flag_prints_version() {
    let stdout = stdout_of(tuiro().arg("--version"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn fail_flag_reports_and_exits_non_zero() {
    let output = tuiro().args(["--ci", "--fail"]).output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[*] Running checks\n[ERROR] Running checks\n"));
    assert!(!stdout.contains("All done."));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Check 'demo' failed"));
}
