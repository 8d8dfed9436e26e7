use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Directory under the system temp dir, removed when dropped (including
/// when a test panics).
pub(crate) struct TempDir(PathBuf);

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// A fresh, empty directory for one test.
pub(crate) fn unique_temp_dir() -> TempDir {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "tile-extender-test-{}-{nanos}-{seq}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    TempDir(dir)
}

#[test]
fn test_temp_dir_removed_on_drop() {
    let dir = unique_temp_dir();
    let path = dir.to_path_buf();
    std::fs::write(dir.join("file"), b"x").unwrap();
    assert!(path.is_dir());

    drop(dir);
    assert!(!path.exists());
}

#[test]
fn test_temp_dir_removed_when_test_panics() {
    let path = std::panic::catch_unwind(|| {
        let dir = unique_temp_dir();
        let path = dir.to_path_buf();
        std::panic::panic_any(path);
    })
    .unwrap_err()
    .downcast::<PathBuf>()
    .unwrap();
    assert!(!path.exists());
}
