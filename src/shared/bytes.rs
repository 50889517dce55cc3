/// Binary (1024-based) byte units, most significant first.
const UNITS: [&str; 5] = ["PiB", "TiB", "GiB", "MiB", "KiB"];

/// Formats a byte count using binary units with one decimal of precision.
///
/// Values below 1 KiB are rendered as plain bytes without a decimal,
/// so an empty inventory reads as "0 B".
///
/// # Examples
///
/// ```
/// use pip_inventory::shared::bytes::format_binary_size;
///
/// assert_eq!(format_binary_size(0), "0 B");
/// assert_eq!(format_binary_size(6144), "6.0 KiB");
/// ```
pub fn format_binary_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut threshold = 1u64 << 50;
    for unit in UNITS {
        if bytes >= threshold {
            return format!("{:.1} {}", bytes as f64 / threshold as f64, unit);
        }
        threshold >>= 10;
    }

    // Unreachable: bytes >= 1024 always matches the KiB threshold.
    format!("{} B", bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_binary_size(0), "0 B");
    }

    #[test]
    fn test_below_one_kibibyte() {
        assert_eq!(format_binary_size(1), "1 B");
        assert_eq!(format_binary_size(512), "512 B");
        assert_eq!(format_binary_size(1023), "1023 B");
    }

    #[test]
    fn test_kibibytes() {
        assert_eq!(format_binary_size(1024), "1.0 KiB");
        assert_eq!(format_binary_size(1536), "1.5 KiB");
        assert_eq!(format_binary_size(6144), "6.0 KiB");
    }

    #[test]
    fn test_mebibytes() {
        assert_eq!(format_binary_size(1024 * 1024), "1.0 MiB");
        assert_eq!(format_binary_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MiB");
    }

    #[test]
    fn test_gibibytes() {
        assert_eq!(format_binary_size(3 * 1024 * 1024 * 1024), "3.0 GiB");
    }

    #[test]
    fn test_tebibytes_and_up() {
        assert_eq!(format_binary_size(1u64 << 40), "1.0 TiB");
        assert_eq!(format_binary_size(2u64 << 50), "2.0 PiB");
    }

    #[test]
    fn test_single_most_significant_unit() {
        // 1 GiB + 1 KiB still renders in GiB, not a compound form
        assert_eq!(format_binary_size((1u64 << 30) + 1024), "1.0 GiB");
    }
}
