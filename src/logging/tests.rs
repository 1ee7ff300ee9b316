use crate::logging::{LogLevel, LogTarget, Logger};
use chrono::{Local, TimeZone};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_log_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("shoplist-logs-{nanos}-{uniq}"))
}

fn logger_in_temp() -> Logger {
    let logger = Logger::new();
    logger.set_log_dir(temp_log_dir());
    logger
}

#[test]
fn file_is_opened_on_first_file_line() {
    let logger = logger_in_temp();
    assert!(logger.log_path().is_none());

    logger.info("console only", LogTarget::ConsoleOnly);
    assert!(logger.log_path().is_none());
    assert!(!logger.log_dir().unwrap().exists());

    logger.info("file line", LogTarget::FileOnly);
    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("INFO  file line"));
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    let today = Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(name, format!("shoplist-{today}.log"));
}

#[test]
fn levels_and_combined_targets_reach_the_file() {
    let logger = logger_in_temp();

    logger.warn("warn line", LogTarget::FileOnly);
    logger.error("error line", LogTarget::ConsoleAndFile);

    let contents = fs::read_to_string(logger.log_path().unwrap()).unwrap();
    assert!(contents.contains("WARN  warn line"));
    assert!(contents.contains("ERROR error line"));
}

#[test]
fn disabled_file_logging_writes_nothing() {
    let logger = logger_in_temp();
    logger.set_file_logging_enabled(false);
    assert!(!logger.file_logging_enabled());

    logger.info("file should not exist", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());

    logger.set_file_logging_enabled(true);
    logger.info("now write", LogTarget::FileOnly);
    assert!(logger.log_path().is_some());
}

#[test]
fn scoped_logger_shares_file_and_tags_lines() {
    let logger = logger_in_temp();
    let bot = logger.scoped("bot");

    bot.info("polling started", LogTarget::FileOnly);
    logger.info("plain line", LogTarget::FileOnly);

    assert_eq!(bot.log_path(), logger.log_path());
    let contents = fs::read_to_string(logger.log_path().unwrap()).unwrap();
    assert!(contents.contains("[bot] polling started"));
    assert!(contents.contains("plain line"));
    assert!(!contents.contains("[bot] plain line"));
}

#[test]
fn a_new_day_opens_a_new_file() {
    let logger = logger_in_temp();
    let before = Local.with_ymd_and_hms(2026, 3, 1, 23, 59, 0).unwrap();
    let after = Local.with_ymd_and_hms(2026, 3, 2, 0, 1, 0).unwrap();

    logger.write_at(LogLevel::Info, "late", LogTarget::FileOnly, before);
    let first = logger.log_path().unwrap();
    logger.write_at(LogLevel::Info, "early", LogTarget::FileOnly, after);
    let second = logger.log_path().unwrap();

    assert!(first.ends_with("shoplist-2026-03-01.log"));
    assert!(second.ends_with("shoplist-2026-03-02.log"));
    assert!(fs::read_to_string(&first).unwrap().contains("[2026-03-01 23:59:00] INFO  late"));
    assert!(!fs::read_to_string(&second).unwrap().contains("late"));
}

#[test]
fn same_day_runs_append_to_one_file() {
    let dir = temp_log_dir();
    let desk = Logger::new();
    desk.set_log_dir(&dir);
    let bot = Logger::new();
    bot.set_log_dir(&dir);

    desk.info("from desk", LogTarget::FileOnly);
    bot.info("from bot", LogTarget::FileOnly);

    assert_eq!(desk.log_path(), bot.log_path());
    let contents = fs::read_to_string(desk.log_path().unwrap()).unwrap();
    assert!(contents.contains("from desk"));
    assert!(contents.contains("from bot"));
}

#[test]
fn set_log_dir_moves_later_lines() {
    let logger = logger_in_temp();
    logger.info("first", LogTarget::FileOnly);
    let first = logger.log_path().unwrap();

    let next = temp_log_dir();
    logger.set_log_dir(&next);
    assert!(logger.log_path().is_none());
    logger.info("second", LogTarget::FileOnly);

    let second = logger.log_path().unwrap();
    assert!(second.starts_with(&next));
    assert!(!fs::read_to_string(first).unwrap().contains("second"));
}

#[test]
fn unwritable_dir_is_skipped_quietly() {
    let blocker = temp_log_dir();
    fs::write(&blocker, "not a directory").unwrap();
    let logger = Logger::new();
    logger.set_log_dir(blocker.join("logs"));

    logger.info("dropped", LogTarget::FileOnly);
    logger.info("dropped again", LogTarget::FileOnly);
    assert!(logger.log_path().is_none());
}
