//! Size walk of one path
//!
//! A walk never fails: stat and listing errors are logged and the affected
//! subtree counts as zero bytes. Traversal is depth-first over an explicit
//! stack of paths, and each listing is read completely and closed before any
//! of its entries is visited, so neither open directories nor call depth grow
//! with the tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, trace, warn};

use crate::model::{EntryKind, SizeResult};

/// Total byte size of `path` and everything below it.
///
/// When `results` is given, exactly one [`SizeResult`] for `path` is sent on it
/// once the walk is done. Nothing below `path` is ever reported.
pub fn walk_size(path: &Path, results: Option<&UnboundedSender<SizeResult>>) -> u64 {
    let start = Instant::now();
    let (size, kind) = measure(path);

    if let Some(tx) = results {
        let result = SizeResult::new(path.to_path_buf(), size, kind, start.elapsed());
        if tx.send(result).is_err() {
            warn!(path = %path.display(), "Result receiver dropped before walk finished");
        }
    }

    size
}

fn measure(path: &Path) -> (u64, EntryKind) {
    let mut pending = Vec::new();
    let (mut total, kind) = visit(path, &mut pending);

    while let Some(next) = pending.pop() {
        total += visit(&next, &mut pending).0;
    }
    trace!(path = %path.display(), size = total, "Walk finished");

    (total, kind)
}

/// Size of `path` alone; a directory contributes nothing itself and queues its
/// entries on `pending` instead
fn visit(path: &Path, pending: &mut Vec<PathBuf>) -> (u64, EntryKind) {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to stat entry");
            return (0, EntryKind::Unreadable);
        }
    };

    if !metadata.is_dir() {
        return (metadata.len(), EntryKind::File);
    }

    match list_dir(path) {
        Ok(children) => {
            pending.extend(children);
            (0, EntryKind::Directory)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read directory");
            (0, EntryKind::Unreadable)
        }
    }
}

/// Whole listing or nothing: one bad entry fails the directory. The handle is
/// closed before this returns.
fn list_dir(path: &Path) -> io::Result<Vec<PathBuf>> {
    fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect()
}
