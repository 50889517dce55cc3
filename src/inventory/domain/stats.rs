use crate::inventory::domain::PackageRecord;
use crate::shared::bytes::format_binary_size;

/// Aggregate statistics derived from a package record set.
///
/// Pure function of the records; the average is guarded so an empty
/// inventory never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryStats {
    pub total_packages: usize,
    pub total_size_bytes: u64,
    pub average_size_bytes: u64,
}

impl InventoryStats {
    pub fn from_records(records: &[PackageRecord]) -> Self {
        let total_packages = records.len();
        let total_size_bytes: u64 = records.iter().map(|r| r.size_bytes).sum();
        let average_size_bytes = if total_packages == 0 {
            0
        } else {
            total_size_bytes / total_packages as u64
        };

        Self {
            total_packages,
            total_size_bytes,
            average_size_bytes,
        }
    }

    pub fn total_size_human(&self) -> String {
        format_binary_size(self.total_size_bytes)
    }

    pub fn average_size_human(&self) -> String {
        format_binary_size(self.average_size_bytes)
    }

    /// One-line operator summary, printed to stderr after every render.
    pub fn summary_line(&self) -> String {
        format!(
            "📦 {} packages | 💾 Total: {} | 🧮 Average: {}",
            self.total_packages,
            self.total_size_human(),
            self.average_size_human()
        )
    }
}
