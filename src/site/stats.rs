//! Aggregate numbers for one build.

use serde::Serialize;

/// What a build read, wrote, and how long it took.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildStats {
    // Import stats
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub listings: usize,

    // Catalog shape
    pub distinct_categories: usize,
    pub distinct_statuses: usize,

    // Output stats
    pub pages_written: usize,
    pub pages_failed: usize,
    pub assets_written: usize,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl BuildStats {
    /// Pages per second over the whole build.
    pub fn pages_per_sec(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        let seconds = self.duration_ms as f64 / 1000.0;
        self.pages_written as f64 / seconds
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!(
            "{} listings → {} pages, {} in {}",
            self.listings,
            self.pages_written,
            format_bytes(self.bytes_written),
            format_duration(self.duration_ms),
        )
    }
}

/// Human-readable byte count.
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    match bytes {
        0..KIB => format!("{bytes} B"),
        KIB..MIB => format!("{:.1} KiB", bytes as f64 / KIB as f64),
        _ => format!("{:.1} MiB", bytes as f64 / MIB as f64),
    }
}

/// Human-readable duration from milliseconds.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}
