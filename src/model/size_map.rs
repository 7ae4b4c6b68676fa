use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Sizes of the immediate children of one root, keyed by path relative to that root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeMap {
    sizes: FxHashMap<PathBuf, u64>,
}

impl SizeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sizes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records a child's size. Returns false, keeping the first value, if the
    /// child was already present.
    pub fn insert(&mut self, path: PathBuf, size: u64) -> bool {
        match self.sizes.entry(path) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(size);
                true
            }
        }
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<u64> {
        self.sizes.get(path.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.sizes.values().sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Path> {
        self.sizes.keys().map(PathBuf::as_path)
    }
}
