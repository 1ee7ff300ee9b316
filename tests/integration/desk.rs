use std::fs;

use shoplist::core::persist::load_categories;

use crate::common::{
    make_temp_dir, read_log_contents, run_desk, saved_list, write_config, write_valid_config,
};

#[test]
fn add_form_writes_the_shared_list() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let output = run_desk(&dir, "add\nעגבניות\n4\nירקות\n3.5\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added עגבניות x4 [ירקות] @ 3.50 ₪."), "stdout: {stdout}");

    let list = saved_list(&dir);
    let item = list.get("עגבניות").expect("item should be saved");
    assert_eq!(item.quantity, 4);
    assert_eq!(item.price, Some(3.5));
    let book = load_categories(&dir.join("categories.json")).unwrap();
    assert_eq!(book.get("עגבניות"), Some("ירקות"));
}

#[test]
fn list_and_total_show_what_was_added() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let input = "add\nחלב\n2\nמקרר\n6\nadd\nלחם\n\n\n\nlist\ntotal\nexit\n";
    let output = run_desk(&dir, input);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Items: 2   Total: 12.00 ₪"), "stdout: {stdout}");
    assert!(stdout.contains("Total: 12.00 ₪"));
    assert!(stdout.contains("מקרר"));
}

#[test]
fn del_decreases_then_removes() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let output = run_desk(&dir, "add\nביצים\n12\n\n\ndel ביצים 10\nexit\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Removed 10 ביצים; 2 left."));
    assert_eq!(saved_list(&dir).get("ביצים").unwrap().quantity, 2);

    let output = run_desk(&dir, "del ביצים 5\nexit\n");
    assert!(output.status.success());
    assert!(saved_list(&dir).is_empty());
}

#[test]
fn bad_command_prints_usage_and_keeps_running() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let output = run_desk(&dir, "load\nfrobnicate\nlist\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Usage: load"), "stdout: {stdout}");
    assert!(stderr.contains("frobnicate"), "stderr: {stderr}");
    assert!(stdout.contains("The list is empty."));
}

#[test]
fn snapshot_lands_in_configured_directory() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let output = run_desk(&dir, "add\nקפה\n1\n\n\nsnapshot\nexit\n");
    assert!(output.status.success());
    let files: Vec<_> = fs::read_dir(dir.join("snapshots"))
        .expect("snapshot dir should exist")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("shopping_list_"));
}

#[test]
fn commands_are_written_to_the_log_file() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let output = run_desk(&dir, "list\nexit\n");
    assert!(output.status.success());
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Command run: list"), "log: {log}");
}

#[test]
fn disabled_file_logging_writes_no_log() {
    let dir = make_temp_dir("desk");
    write_config(&dir, "False");

    let output = run_desk(&dir, "list\nexit\n");
    assert!(output.status.success());
    assert!(read_log_contents(&dir).is_none());
}

#[test]
fn config_change_is_persisted_and_logged() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let output = run_desk(&dir, "config poll_timeout_secs 12\nexit\n");
    assert!(output.status.success());
    let cfg = shoplist::config::Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(cfg.poll_timeout_secs(), 12);
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Config 'POLL_TIMEOUT_SECS' updated: '5' -> '12'"), "log: {log}");
}

#[test]
fn summary_groups_items_by_category() {
    let dir = make_temp_dir("desk");
    write_valid_config(&dir);

    let input = "add\nחלב\n2\nמקרר\n5.5\nadd\nנייר\n1\n\n\nsummary\nexit\n";
    let output = run_desk(&dir, input);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("רשימת הקניות שלך:"), "stdout: {stdout}");
    assert!(stdout.contains("קטגוריה: מקרר"));
    assert!(stdout.contains("- חלב: 2 (מחיר: 5.50 ₪ ליחידה)"));
    assert!(stdout.contains("ללא קטגוריה"));
    assert!(stdout.contains("סכום כולל: 11.00 ₪"));
}
