use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_propcrm_cli"))
        .args(args)
        .env_remove("PROPCRM_LOG_DIR")
        .env_remove("PROPCRM_LOG_LEVEL")
        .output()
        .expect("cli runs")
}

#[test]
fn unknown_payment_method_degrades_with_stderr_diagnostic() {
    let output = run_cli(&["decode", "payment_method", "xyz"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "payment_method\tlocal\tLOCAL\tLocal");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("event=vocabulary_fallback").count(), 1);
    assert!(stderr.contains("vocabulary=payment_method"));
    assert!(stderr.contains("code=xyz"));
}

#[test]
fn unknown_beneficiary_type_reports_fallback_on_stderr() {
    let output = run_cli(&["decode", "beneficiary_type", "landlord"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("event=vocabulary_fallback"));
    assert!(stderr.contains("fallback=BENEFICIARY"));
}

#[test]
fn unknown_lead_type_defaults_quietly() {
    let output = run_cli(&["decode", "lead_type", "xyz"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("lead_type\tbusiness\t"));
    assert!(output.stderr.is_empty());
}

#[test]
fn strict_rejection_exits_with_usage_error() {
    let output = run_cli(&["decode", "frequency_code", "X"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("propcrm: "));
}

#[test]
fn unknown_vocabulary_exits_with_usage_error() {
    let output = run_cli(&["list", "colour"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("colour"));
}
