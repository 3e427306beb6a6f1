use assert_cmd::Command;
use predicates::str::contains;

fn toolbridge() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("toolbridge"));
    // Isolate from the developer's environment and any .env file
    cmd.env_remove("GOOGLE_API_KEY")
        .env_remove("SERP_API_KEY")
        .env_remove("GEMINI_MODEL");
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn test_cli_help() {
    toolbridge()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("flights"))
        .stdout(contains("markdown"));
}

#[test]
fn test_cli_version() {
    toolbridge().arg("--version").assert().success();
}

#[test]
fn test_flights_without_google_key_fails_with_descriptive_error() {
    toolbridge()
        .arg("flights")
        .assert()
        .failure()
        .stderr(contains("GOOGLE_API_KEY"));
}

#[test]
fn test_flights_without_serp_key_fails_before_spawning() {
    toolbridge()
        .arg("flights")
        .env("GOOGLE_API_KEY", "test-google-key")
        .assert()
        .failure()
        .stderr(contains("SERP_API_KEY"));
}

#[test]
fn test_markdown_without_google_key_fails_with_descriptive_error() {
    toolbridge()
        .arg("markdown")
        .assert()
        .failure()
        .stderr(contains("GOOGLE_API_KEY"));
}
