// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Generate a directory tree with `num_files` files spread over `top_level` entries
pub fn generate_tree(num_files: usize, top_level: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let dirs = ["src", "lib", "test", "pkg", "mod"];

    for i in 0..num_files {
        let depth = (i % 5) + 1;
        let mut path = dir.path().join(format!("top_{}", i % top_level));
        for d in 0..depth {
            path.push(format!("{}_{}", dirs[d], i / 1000));
        }
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join(format!("file_{}.rs", i)), vec![b'x'; i % 512]).unwrap();
    }
    dir
}
