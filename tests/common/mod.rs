// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Create a temporary directory populated with `files` (path, size in bytes).
///
/// Parent directories are created as needed; paths ending in `/` become
/// empty directories.
pub fn create_tree(files: &[(&str, usize)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, size) in files {
        add_entry(dir.path(), path, *size);
    }
    dir
}

/// Add a file (or an empty directory for a trailing `/`) below `root`
pub fn add_entry(root: &Path, path: &str, size: usize) {
    let full_path = root.join(path);
    if path.ends_with('/') {
        fs::create_dir_all(&full_path).unwrap();
        return;
    }
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full_path, vec![b'x'; size]).unwrap();
}

/// Sample project layout; 2200 bytes across three top-level entries plus an empty dir
pub fn create_project_tree() -> TempDir {
    create_tree(&[
        ("src/main.rs", 1000),
        ("src/lib.rs", 800),
        ("src/utils/helper.rs", 300),
        ("README.md", 100),
        ("target/", 0),
    ])
}

/// Remove all permissions from `path`. Returns false when the current user can
/// still read it anyway (e.g. running as root), so the caller can skip.
#[cfg(unix)]
pub fn lock_dir(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
    fs::read_dir(path).is_err()
}

/// Restore permissions so TempDir cleanup can delete the directory
#[cfg(unix)]
pub fn unlock_dir(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Shared buffer the test subscriber writes formatted events into
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber on this thread that records every event, and
/// return its output alongside the log text
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let output = tracing::subscriber::with_default(subscriber, f);
    (output, buffer.contents())
}
