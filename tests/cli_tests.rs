use assert_cmd::cargo;
use assert_cmd::prelude::*;
use netdiag::{DiagnosticReport, OverallStatus};
use predicates::prelude::*;
use std::net::TcpListener;
use std::process::Command;

// Loopback-only invocations so these run without external network access.
// UDP port 1 on loopback rejects quickly via ICMP, so no timeout is spent
// waiting on it.

#[test]
fn json_mode_writes_exactly_one_document_to_stdout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let output = Command::new(cargo::cargo_bin!("netdiag"))
        .args([
            "127.0.0.1",
            "--tcp",
            &port.to_string(),
            "--udp",
            "1",
            "--timeout",
            "1",
            "--json",
            "--verbose",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    // The whole of stdout must parse as a single report; from_str rejects
    // any trailing content.
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: DiagnosticReport =
        serde_json::from_str(stdout.trim()).expect("stdout should hold one JSON report and nothing else");
    assert_eq!(report.target, "127.0.0.1");
    assert_eq!(report.overall_status, OverallStatus::Reachable);

    // Narration stays on the diagnostic stream.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[TCP]"));
    assert!(!stdout.contains("Diagnostic Summary"));
}

#[test]
fn text_mode_leaves_stdout_empty_for_redirection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let mut cmd = Command::new(cargo::cargo_bin!("netdiag"));
    cmd.args([
        "127.0.0.1",
        "--tcp",
        &port.to_string(),
        "--udp",
        "1",
        "--timeout",
        "1",
    ])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Diagnostic Summary"))
    .stderr(predicate::str::contains("Overall Status"));
}

#[test]
fn unreachable_result_still_exits_zero() {
    let mut cmd = Command::new(cargo::cargo_bin!("netdiag"));
    cmd.args(["no-such-host.invalid", "--json", "--timeout", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall_status\": \"UNREACHABLE\""));
}

#[test]
fn missing_target_is_a_usage_error() {
    let mut cmd = Command::new(cargo::cargo_bin!("netdiag"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
