use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;
use shoplist::core::context::AppContext;
use shoplist::core::models::ShoppingList;
use shoplist::core::persist::load_list;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_shoplist"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "shoplist-it-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Points every stored path into `dir`, so the binary and a library-side
/// context share the same files.
pub fn write_valid_config(dir: &Path) {
    write_config(dir, "True");
}

pub fn write_config(dir: &Path, file_logging: &str) {
    let abs = |name: &str| dir.join(name).to_string_lossy().into_owned();
    let cfg = json!({
        "list_path": { "value": abs("list.json"), "description": "shared list" },
        "categories_path": { "value": abs("categories.json"), "description": "categories" },
        "snapshot_dir": { "value": abs("snapshots"), "description": "snapshots" },
        "poll_timeout_secs": { "value": 5, "description": "poll" },
        "file_logging_enabled": { "value": file_logging, "description": "file logging" }
    });
    fs::write(
        dir.join("config.json"),
        serde_json::to_string_pretty(&cfg).unwrap(),
    )
    .unwrap();
}

pub fn run_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .current_dir(dir)
        .env_remove("BOT_TOKEN")
        .env_remove("PARTNER_CHAT_ID")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // The binary may exit before reading stdin (e.g. on a bad config);
    // a broken pipe here is not a test failure.
    if let Err(e) = child.stdin.as_mut().unwrap().write_all(input.as_bytes()) {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "stdin write failed: {e}");
    }

    child.wait_with_output().unwrap()
}

pub fn run_desk(dir: &Path, input: &str) -> Output {
    run_with_input(dir, &[], input)
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' && matches!(chars.peek(), Some('[')) {
            chars.next();
            for nc in chars.by_ref() {
                if nc.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if c.is_control() {
            continue;
        }
        out.push(c);
    }

    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn saved_list(dir: &Path) -> ShoppingList {
    load_list(&dir.join("list.json")).expect("list file should parse")
}

pub fn build_context(dir: &Path) -> AppContext {
    let ctx = AppContext::new_with_paths(dir.join("config.json"), dir.join("logs"))
        .expect("context should build");
    ctx.logger.set_file_logging_enabled(false);
    ctx
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
