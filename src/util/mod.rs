mod format;
mod path;

pub use format::{bytes_to_mb, format_size, MB_PER_BYTE};
pub use path::{quoted, relative_key};
