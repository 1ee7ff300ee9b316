//! Shared helpers for unit tests.

use crate::core::context::AppContext;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("shoplist-{prefix}-{nanos}-{uniq}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A context whose config, list, categories and snapshots all live in a
/// fresh temp directory, with file logging off.
pub fn temp_context(prefix: &str) -> (AppContext, PathBuf) {
    let dir = temp_dir(prefix);
    let mut ctx = AppContext::new_with_paths(dir.join("config.json"), dir.join("logs")).unwrap();
    let path = |name: &str| dir.join(name).to_string_lossy().into_owned();
    ctx.config.set("FILE_LOGGING_ENABLED", "False").unwrap();
    ctx.config.set("LIST_PATH", &path("list.json")).unwrap();
    ctx.config
        .set("CATEGORIES_PATH", &path("categories.json"))
        .unwrap();
    ctx.config.set("SNAPSHOT_DIR", &path("snapshots")).unwrap();
    ctx.logger.set_file_logging_enabled(false);
    ctx.reload().unwrap();
    (ctx, dir)
}
