use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(binary: &str) -> Output {
    run_with_fixtures(binary, None)
}

fn run_with_fixtures(binary: &str, fixtures: Option<&Path>) -> Output {
    let mut command = Command::new(binary);
    command.env("NO_COLOR", "1").env_remove("RUST_LOG");
    if let Some(dir) = fixtures {
        command.env("LESSONS_FIXTURES_DIR", dir);
    }
    command.output().expect("Failed to execute command")
}

fn assert_ran(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert!(stdout.contains("Key Points"), "no summary in:\n{}", stdout);
    stdout
}

#[test]
fn test_error_binaries_run() {
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_e01_basic_errors")));
    assert!(!stdout.trim().is_empty());
    assert_ran(&run(env!("CARGO_BIN_EXE_e02_checking_errors")));
    assert_ran(&run(env!("CARGO_BIN_EXE_e03_wrapping")));
    assert_ran(&run(env!("CARGO_BIN_EXE_e04_custom_error_type")));
    assert_ran(&run(env!("CARGO_BIN_EXE_e05_advanced_error_handling")));
    assert_ran(&run(env!("CARGO_BIN_EXE_e06_adding_info")));
    assert_ran(&run(env!("CARGO_BIN_EXE_e09_order_of_error_chains")));
}

#[test]
fn test_interrogating_errors_with_bundled_fixtures() {
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_e08_interrogating_errors")));
    assert!(stdout.contains("falling back to"));
    assert!(stdout.contains("this is our data:"));
}

#[test]
fn test_interrogating_errors_gives_up_without_fixtures() {
    let empty = TempDir::new().unwrap();
    let output = run_with_fixtures(
        env!("CARGO_BIN_EXE_e08_interrogating_errors"),
        Some(empty.path()),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("giving up"), "stderr was:\n{}", stderr);
}

#[test]
fn test_interrogating_errors_uses_configured_fixtures() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("malformed.json"), r#"{"name": "fixed"}"#).unwrap();

    let output = run_with_fixtures(
        env!("CARGO_BIN_EXE_e08_interrogating_errors"),
        Some(dir.path()),
    );

    let stdout = assert_ran(&output);
    assert!(stdout.contains("\"fixed\""));
}

#[test]
fn test_interrogating_errors_reports_json_of_wrong_shape() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("malformed.json"), "[1, 2, 3]").unwrap();

    let output = run_with_fixtures(
        env!("CARGO_BIN_EXE_e08_interrogating_errors"),
        Some(dir.path()),
    );

    let stdout = assert_ran(&output);
    assert!(stdout.contains("uh-oh: "));
    assert!(stdout.contains("nothing to fall back to"));
}

#[test]
fn test_concurrency_binaries_run() {
    assert_ran(&run(env!("CARGO_BIN_EXE_c01_threads")));
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_c02_channels")));
    assert!(stdout.contains("Cumulative Value:"));
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_c03_contexts")));
    assert!(stdout.contains("Context cancelled!"));
}

#[test]
fn test_footgun_binaries_run() {
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_f01_race_conditions")));
    assert!(stdout.contains("With mutexes: [55, 55, 55, 55, 55, 55, 55, 55, 55, 55, 55]"));
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_f02_captured_loop_variables")));
    assert!(stdout.contains("Is mutated? true"));
}

#[test]
fn test_trait_binaries_run() {
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_i01_naive_temperature")));
    assert!(stdout.contains("100.000000 °???"));
    assert_ran(&run(env!("CARGO_BIN_EXE_i02_typed_temperatures")));
    let stdout = assert_ran(&run(env!("CARGO_BIN_EXE_i03_temperature_trait")));
    assert!(stdout.contains("Found 3 Fahrenheits, 2 Celsiuses, 2 Kelvins"));
    assert!(stdout.contains("Got a Smoot: 5.50 smoots"));
    assert_ran(&run(env!("CARGO_BIN_EXE_i04_error_traits")));
}
