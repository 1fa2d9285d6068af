mod common;

use common::{run_meeting_prep, TestEnv};

#[test]
fn help_shows_usage() {
    let output = run_meeting_prep(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("prepare"));
}

#[test]
fn version_shows_version() {
    let output = run_meeting_prep(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("meeting-prep "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_meeting_prep(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("meeting-prep"));
}

#[test]
fn config_show_lists_sections() {
    let output = run_meeting_prep(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("[search]"));
    assert!(stdout.contains("delay_ms = 2000"));
}

#[test]
fn config_show_masks_keys_from_env() {
    let env = TestEnv::new();
    let output = env.run_with_env(&["config", "show"], &[("GROQ_API_KEY", "gsk-secret")]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.contains("gsk-secret"));
    assert!(stdout.contains("********"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_meeting_prep(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(
        first.status.success(),
        "first init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&first.stderr)
    );
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn config_file_values_are_used() {
    let env = TestEnv::new();
    env.write_config("[llm]\nmodel = \"llama-3.3-70b-versatile\"\n");

    let output = env.run(&["doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("model: llama-3.3-70b-versatile"));
}

#[test]
fn doctor_reports_missing_keys() {
    let output = run_meeting_prep(&["doctor", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "doctor should run successfully\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("doctor --json output");
    assert_eq!(report["status"], "missing keys: GROQ_API_KEY, SERPER_API_KEY");
}

#[test]
fn doctor_is_healthy_with_keys_from_env() {
    let env = TestEnv::new();
    let output = env.run_with_env(
        &["doctor", "--json"],
        &[("GROQ_API_KEY", "gsk"), ("SERPER_API_KEY", "serp")],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("doctor --json output");
    assert_eq!(report["status"], "healthy");
}

#[test]
fn prepare_without_keys_fails_upfront() {
    let output = run_meeting_prep(&[
        "prepare",
        "--company",
        "Acme",
        "--objective",
        "Pilot",
        "--attendees",
        "Jane",
        "--duration",
        "30",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Missing required API keys: GROQ_API_KEY, SERPER_API_KEY"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[test]
fn prepare_rejects_bad_duration_before_network() {
    let env = TestEnv::new();
    let output = env.run_with_env(
        &[
            "prepare",
            "--company",
            "Acme",
            "--objective",
            "Pilot",
            "--attendees",
            "Jane",
            "--duration",
            "abc",
        ],
        &[
            ("GROQ_API_KEY", "gsk"),
            ("SERPER_API_KEY", "serp"),
            ("MEETING_PREP_DELAY_MS", "0"),
        ],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Meeting duration must be a positive whole number of minutes."),
        "expected duration error, got:\n{}",
        stderr
    );
}
