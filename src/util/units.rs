//! Size units and human-readable formatting

/// Bytes per megabyte (binary, as used for all file sizes)
pub const MIB: u64 = 1024 * 1024;

/// Bytes per gigabyte (binary)
pub const GIB: u64 = 1024 * MIB;

/// Convert whole megabytes to bytes
///
/// # Examples
///
/// ```
/// use bulkgen::util::units::mb_to_bytes;
///
/// assert_eq!(mb_to_bytes(1), 1_048_576);
/// assert_eq!(mb_to_bytes(3), 3_145_728);
/// ```
#[inline]
pub fn mb_to_bytes(mb: u64) -> u64 {
    mb * MIB
}

/// Convert a byte count to fractional gigabytes
pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

/// Format a byte count in human-readable form (B, KB, MB, GB, TB)
///
/// # Examples
///
/// ```
/// use bulkgen::util::units::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
