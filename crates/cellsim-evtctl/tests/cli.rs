use std::io::Write;

use assert_cmd::Command;

/// Builds a command isolated from any ambient configuration.
fn evtctl() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cellsim-evtctl"));
    cmd.env("CELLSIM_CONFIG_PATH", "does-not-exist/cellsim.toml")
        .env("CELLSIM_LOG_LEVEL", "info")
        .env_remove("CELLSIM_LOG_JSON")
        .env_remove("CELLSIM_SELF_CHECK")
        .env_remove("CELLSIM_OUTPUT_FORMAT");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── resolve ──────────────────────────────────────────────────────────

#[test]
fn resolve_prints_registration_request_name() {
    let assert = evtctl().args(["resolve", "0x02000041"]).assert().success();
    let stdout = stdout_of(assert.get_output());
    assert_eq!(stdout, "0x02000041  REGESTRATION-REQUEST-EVENT\n");
}

#[test]
fn resolve_of_base_marker_terminates_with_value() {
    let assert = evtctl()
        .args(["resolve", "0x02000041", "0x02000000"])
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    assert!(stderr_of(output).contains("0x02000000"));
    assert!(!stdout_of(output).contains("REGESTRATION"));
}

#[test]
fn resolve_of_unknown_band_terminates() {
    let assert = evtctl()
        .args(["resolve", "0x09000001"])
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(assert.get_output()).contains("0x09000001"));
}

#[test]
fn resolve_reports_value_with_logging_off() {
    let assert = evtctl()
        .env("CELLSIM_LOG_LEVEL", "off")
        .args(["resolve", "0x02000000"])
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(assert.get_output()).contains("0x02000000"));
}

#[test]
fn resolve_reports_value_when_filter_excludes_registry() {
    let assert = evtctl()
        .env("CELLSIM_LOG_LEVEL", "cellsim_evtctl=debug")
        .args(["resolve", "0x02000000"])
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(assert.get_output()).contains("0x02000000"));
}

#[test]
fn resolve_of_garbage_is_a_usage_error() {
    evtctl()
        .args(["resolve", "registration"])
        .assert()
        .failure()
        .code(2);
}

// ── list / decode / lookup / check ───────────────────────────────────

#[test]
fn list_json_for_one_channel() {
    let assert = evtctl()
        .args(["list", "--channel", "N3", "--format", "json"])
        .assert()
        .success();
    let rows: serde_json::Value =
        serde_json::from_str(&stdout_of(assert.get_output())).expect("stdout should be JSON");
    let rows = rows.as_array().expect("list output should be an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["raw"], 0x0400_0001_u32);
    assert_eq!(rows[0]["name"], "DL-UE-DATA-TRANSPORT-EVENT");
}

#[test]
fn list_rejects_unknown_channel() {
    evtctl()
        .args(["list", "--channel", "N9"])
        .assert()
        .failure();
}

#[test]
fn decode_shows_nas_code() {
    let assert = evtctl()
        .args(["decode", "0x020000c1"])
        .assert()
        .success();
    let stdout = stdout_of(assert.get_output());
    assert!(stdout.contains("N1"));
    assert!(stdout.contains("5GSM:0xc1"));
    assert!(stdout.contains("PDU-SESSION-ESTABLISHMENT-REQUEST-EVENT"));
}

#[test]
fn lookup_unknown_name_exits_with_usage_error() {
    let assert = evtctl()
        .args(["lookup", "REGISTRATION-REQUEST-EVENT"])
        .assert()
        .failure()
        .code(2);
    assert!(stderr_of(assert.get_output()).contains("no event named"));
}

#[test]
fn check_reports_entries() {
    let assert = evtctl().arg("check").assert().success();
    assert_eq!(
        stdout_of(assert.get_output()),
        "event registry consistent: 67 entries\n"
    );
}

// ── configuration ────────────────────────────────────────────────────

#[test]
fn config_file_selects_json_output() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "[output]\nformat = \"json\"\n\n[registry]\nself_check_on_start = false")
        .expect("should write config");

    let assert = evtctl()
        .env("CELLSIM_CONFIG_PATH", file.path())
        .args(["lookup", "QUIT"])
        .assert()
        .success();
    let row: serde_json::Value =
        serde_json::from_str(&stdout_of(assert.get_output())).expect("stdout should be JSON");
    assert_eq!(row["name"], "QUIT-EVENT");
    assert_eq!(row["channel"], "COMMON");
}

#[test]
fn environment_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "[output]\nformat = \"json\"").expect("should write config");

    let assert = evtctl()
        .env("CELLSIM_CONFIG_PATH", file.path())
        .env("CELLSIM_OUTPUT_FORMAT", "text")
        .args(["resolve", "0x07000003"])
        .assert()
        .success();
    assert_eq!(stdout_of(assert.get_output()), "0x07000003  ERROR-EVENT\n");
}

#[test]
fn environment_format_ignores_case() {
    let assert = evtctl()
        .env("CELLSIM_OUTPUT_FORMAT", "JSON")
        .args(["lookup", "QUIT"])
        .assert()
        .success();
    let row: serde_json::Value =
        serde_json::from_str(&stdout_of(assert.get_output())).expect("stdout should be JSON");
    assert_eq!(row["name"], "QUIT-EVENT");
}

#[test]
fn invalid_log_level_warns_and_falls_back() {
    let assert = evtctl()
        .env("CELLSIM_LOG_LEVEL", "cellsim=verbose")
        .arg("check")
        .assert()
        .success();
    let output = assert.get_output();
    assert!(stderr_of(output).contains("falling back to info"));
    assert!(stderr_of(output).contains("cellsim=verbose"));
    assert_eq!(stdout_of(output), "event registry consistent: 67 entries\n");
}

#[test]
fn malformed_config_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "[logging\nlevel = ").expect("should write config");

    let assert = evtctl()
        .arg("--config")
        .arg(file.path())
        .arg("check")
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(assert.get_output()).contains("failed to parse config file"));
}
