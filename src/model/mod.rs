mod entry;
mod size_map;

pub use entry::{EntryKind, SizeResult};
pub use size_map::SizeMap;
