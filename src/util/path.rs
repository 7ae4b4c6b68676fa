use std::path::{Path, PathBuf};

/// Double-quoted, escaped rendering of a path for report lines.
///
/// Non-UTF-8 components are replaced lossily before quoting.
pub fn quoted(path: &Path) -> String {
    format!("{:?}", path.to_string_lossy())
}

/// Key under which a child of `root` is stored in a size map.
///
/// Children are keyed relative to the root (`/data/a.txt` under `/data` is
/// `a.txt`). A path that is not below `root` keeps its full form, which is
/// how a plain-file root ends up keyed by its own path.
pub fn relative_key(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_plain() {
        assert_eq!(quoted(Path::new("data/a.txt")), "\"data/a.txt\"");
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted(Path::new("say \"hi\"")), "\"say \\\"hi\\\"\"");
        assert_eq!(quoted(Path::new("tab\there")), "\"tab\\there\"");
    }

    #[test]
    fn test_relative_key_child() {
        let key = relative_key(Path::new("/data"), Path::new("/data/a.txt"));
        assert_eq!(key, PathBuf::from("a.txt"));

        let key = relative_key(Path::new("data"), Path::new("data/b"));
        assert_eq!(key, PathBuf::from("b"));
    }

    #[test]
    fn test_relative_key_root_itself() {
        let key = relative_key(Path::new("/data/f.bin"), Path::new("/data/f.bin"));
        assert_eq!(key, PathBuf::from("/data/f.bin"));
    }

    #[test]
    fn test_relative_key_unrelated() {
        let key = relative_key(Path::new("/data"), Path::new("/other/x"));
        assert_eq!(key, PathBuf::from("/other/x"));
    }
}
