/// Bytes-to-megabytes factor used in every distribution report
pub const MB_PER_BYTE: f64 = 9.5367e-7;

/// Convert a byte count to (approximate) mebibytes
#[inline]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 * MB_PER_BYTE
}

/// Format a byte count as a human-readable string (B, KB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
