use std::cmp::Ordering;
use std::path::PathBuf;
use std::time::Duration;

/// How a path looked when it was stat'd
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    /// Stat or listing failed; the entry counts as zero bytes
    Unreadable,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::Unreadable => "unreadable",
        }
    }
}

/// Terminal report of one top-level walk
#[derive(Debug, Clone)]
pub struct SizeResult {
    pub path: PathBuf,
    pub size: u64,
    pub elapsed: Duration,
    /// Classification of `path` itself. Unreadable descendants are not reflected here.
    pub kind: EntryKind,
}

impl SizeResult {
    pub fn new(path: PathBuf, size: u64, kind: EntryKind, elapsed: Duration) -> Self {
        Self {
            path,
            size,
            elapsed,
            kind,
        }
    }

    #[inline]
    pub fn is_readable(&self) -> bool {
        self.kind != EntryKind::Unreadable
    }

    /// Report order: largest first, ties broken by path
    pub fn largest_first(a: &SizeResult, b: &SizeResult) -> Ordering {
        b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path))
    }
}
