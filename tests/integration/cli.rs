use std::fs;

use shoplist::config::Config;

use crate::common::{make_temp_dir, normalized_lines, run_desk, run_with_input, write_valid_config};

#[test]
fn desk_exits_cleanly_on_exit() {
    let dir = make_temp_dir("cli");
    write_valid_config(&dir);

    let output = run_desk(&dir, "exit\n");
    assert!(output.status.success(), "desk should exit cleanly");
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l.contains("Type 'help' for commands")));
}

#[test]
fn desk_stops_at_end_of_input() {
    let dir = make_temp_dir("cli");
    write_valid_config(&dir);

    let output = run_desk(&dir, "list\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("The list is empty."), "stdout: {stdout}");
}

#[test]
fn unknown_argument_fails() {
    let dir = make_temp_dir("cli");
    write_valid_config(&dir);

    let output = run_with_input(&dir, &["--verbose"], "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --verbose"), "stderr: {stderr}");
}

#[test]
fn unknown_mode_fails() {
    let dir = make_temp_dir("cli");
    write_valid_config(&dir);

    let output = run_with_input(&dir, &["server"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported mode: 'server'"), "stderr: {stderr}");
}

#[test]
fn malformed_config_fails_before_the_desk_starts() {
    let dir = make_temp_dir("cli");
    fs::write(dir.join("config.json"), "{ not json").unwrap();

    let output = run_desk(&dir, "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not start with config"), "stderr: {stderr}");
    assert!(stderr.contains("Invalid JSON"), "stderr: {stderr}");
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = make_temp_dir("cli");

    let output = run_desk(&dir, "exit\n");
    assert!(output.status.success());

    let cfg = Config::load_from(dir.join("config.json")).expect("default config should load");
    assert_eq!(cfg.list_path().to_str(), Some("shared_shopping_list.json"));
    assert_eq!(cfg.categories_path().to_str(), Some("categories.json"));
    assert_eq!(cfg.poll_timeout_secs(), 30);
    assert!(cfg.file_logging_enabled());
}

#[test]
fn config_flag_selects_another_file() {
    let dir = make_temp_dir("cli");
    let nested = dir.join("conf");
    fs::create_dir_all(&nested).unwrap();
    write_valid_config(&nested);

    let output = run_with_input(&dir, &["desk", "--config", "conf/config.json"], "exit\n");
    assert!(output.status.success());
    assert!(!dir.join("config.json").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config path: conf/config.json"), "stdout: {stdout}");
}

#[test]
fn bot_mode_without_token_reports_missing_item() {
    let dir = make_temp_dir("cli");
    write_valid_config(&dir);

    let output = run_with_input(&dir, &["bot"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bot mode stopped"), "stderr: {stderr}");
    assert!(stderr.contains("Missing configuration item: BOT_TOKEN"), "stderr: {stderr}");
}
