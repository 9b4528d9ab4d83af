use std::path::Path;
use std::process::{Command, Output};

fn run_calc(dir: &Path, args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_relcalc");
    Command::new(exe)
        .arg("--settings")
        .arg(dir.join("absent.toml"))
        .arg("--log-file")
        .arg(dir.join("transcript.log"))
        .arg("calc")
        .args(args)
        .output()
        .expect("run relcalc calc")
}

#[test]
fn calc_prints_set_fill_and_clone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_calc(
        dir.path(),
        &[
            "--origin",
            "0 0 0",
            "--source-a",
            "1 2 3",
            "--source-b",
            "x=4, y=5, z=6",
            "--destination",
            "-1 0 1",
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "setblock ~-1 ~ ~1",
            "fill ~1 ~2 ~3 ~-1 ~ ~1",
            "clone ~1 ~2 ~3 ~4 ~5 ~6 ~-1 ~ ~1",
        ]
    );
}

#[test]
fn calc_arguments_only_strips_tag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_calc(
        dir.path(),
        &["--origin", "0 0 0", "--destination", "5 -3 0", "--arguments-only"],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "~5 ~-3 ~");
}

#[test]
fn malformed_origin_prints_info_and_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_calc(dir.path(), &["--origin", "12, 7", "--destination", "1 2 3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[relcalc][INFO] No command produced"));
}

#[test]
fn transcript_file_records_launch_inputs_and_results() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("transcript.log");
    std::fs::write(&log_path, "stale line from a previous run\n").expect("seed log");

    let output = run_calc(dir.path(), &["--origin", "10 20 30", "--destination", "15 20 30"]);
    assert!(output.status.success());

    let transcript = std::fs::read_to_string(&log_path).expect("read transcript");
    assert!(!transcript.contains("stale line"));
    let messages: Vec<&str> = transcript
        .lines()
        .map(|line| line.splitn(3, " - ").nth(2).unwrap_or_default())
        .collect();
    assert_eq!(
        messages,
        [
            "App Launched",
            "CMD Block: 10 20 30",
            "Destination: 15 20 30",
            "RESULT (setblock): setblock ~5 ~ ~",
        ]
    );
    assert!(transcript.lines().all(|line| line.contains(" - INFO - ")));
}

#[test]
fn invalid_settings_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("relcalc.toml");
    std::fs::write(&settings, "copy_policy = 3\n").expect("write settings");
    let output = Command::new(env!("CARGO_BIN_EXE_relcalc"))
        .arg("--settings")
        .arg(&settings)
        .args(["calc", "--origin", "0 0 0", "--destination", "1 1 1"])
        .output()
        .expect("run relcalc");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[relcalc][ERROR]"));
}

#[test]
fn calc_accepts_negative_leading_coordinates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_calc(
        dir.path(),
        &[
            "--origin",
            "-10 64 -10",
            "--source-a",
            "-12 60 -8",
            "--destination",
            "-5 64 -10",
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["setblock ~5 ~ ~", "fill ~-2 ~-4 ~2 ~5 ~ ~"]);
}

#[test]
fn debug_transcript_notes_settings_fallback() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("transcript.log");
    let output = Command::new(env!("CARGO_BIN_EXE_relcalc"))
        .arg("--settings")
        .arg(dir.path().join("absent.toml"))
        .arg("--log-file")
        .arg(&log_path)
        .args(["--log-level", "debug"])
        .args(["calc", "--origin", "0 0 0", "--destination", "1 1 1"])
        .output()
        .expect("run relcalc");
    assert!(output.status.success());

    let transcript = std::fs::read_to_string(&log_path).expect("read transcript");
    let fallback = transcript
        .lines()
        .find(|line| line.contains("no settings file at"))
        .expect("settings fallback line");
    assert!(fallback.contains(" - DEBUG - "));
    assert!(fallback.contains("absent.toml"));
}

#[test]
fn invalid_log_level_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_relcalc"))
        .arg("--settings")
        .arg(dir.path().join("absent.toml"))
        .arg("--log-file")
        .arg(dir.path().join("transcript.log"))
        .args(["--log-level", "verbose"])
        .args(["calc", "--origin", "0 0 0", "--destination", "1 1 1"])
        .output()
        .expect("run relcalc");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("verbose"));
}

fn run_init_settings(dir: &Path, settings: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relcalc"))
        .arg("--settings")
        .arg(settings)
        .arg("--log-file")
        .arg(dir.join("transcript.log"))
        .arg("init-settings")
        .args(extra)
        .output()
        .expect("run relcalc init-settings")
}

#[test]
fn init_settings_writes_loadable_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("relcalc.toml");

    let output = run_init_settings(dir.path(), &settings, &[]);
    assert!(output.status.success());
    let written = std::fs::read_to_string(&settings).expect("read settings");
    assert!(written.contains("copy_policy = \"full_command\""));

    std::fs::write(&settings, "always_on_top = false\n").expect("edit settings");
    let output = run_init_settings(dir.path(), &settings, &[]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(
        std::fs::read_to_string(&settings).expect("read settings"),
        "always_on_top = false\n"
    );

    let output = run_init_settings(dir.path(), &settings, &["--force"]);
    assert!(output.status.success());
    let rewritten = std::fs::read_to_string(&settings).expect("read settings");
    assert!(rewritten.contains("always_on_top = false"));
    assert!(rewritten.contains("copy_policy"));
}
