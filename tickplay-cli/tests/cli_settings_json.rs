use assert_cmd::Command;
use predicates::prelude::*;

fn tickplay() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tickplay"));
    cmd.env("RUST_LOG", "info").env_remove("TICKPLAY_LOG_STDERR");
    cmd
}

#[test]
fn create_settings_json_outputs_defaults() {
    tickplay()
        .args(["create", "settings-json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tick_ms\": 1000"))
        .stdout(predicate::str::contains("\"log_path\": \"playback.log\""))
        .stdout(predicate::str::contains("\"reject_empty_tracks\": true"));
}

#[test]
fn short_run_writes_progress_to_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("p.log");

    tickplay()
        .args([
            "demo.wav",
            "--duration",
            "2",
            "--tick-ms",
            "10",
            "--log-file",
            log_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded track: demo.wav (2s)"))
        .stdout(predicate::str::contains("Playing: demo.wav - 2s"));

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["Playing: demo.wav - 1s", "Playing: demo.wav - 2s"]);
}

#[test]
fn quiet_run_prints_nothing() {
    tickplay()
        .args(["--duration", "1", "--tick-ms", "5", "--no-log-file", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_settings_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    std::fs::write(&settings, "{ not json").unwrap();

    tickplay()
        .args(["--settings", settings.to_str().unwrap(), "--no-log-file"])
        .assert()
        .failure();
}

#[test]
fn zero_tick_length_is_rejected() {
    tickplay().args(["--tick-ms", "0"]).assert().failure();
}

#[test]
fn empty_track_fails_by_default() {
    tickplay()
        .args(["--duration", "0", "--tick-ms", "5", "--no-log-file"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid track"));
}
