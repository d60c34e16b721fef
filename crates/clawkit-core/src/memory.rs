//! System memory snapshot and human-readable byte formatting.
//!
//! Formatting is a pure function of the byte count so it is testable
//! without OS access; the sysinfo-backed reader lives in `clawkit-probe`.

use serde::{Deserialize, Serialize};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Total and available physical memory at one point in time.
///
/// The human strings are derived from the byte counts, never set
/// independently. Invariant: `available_bytes <= total_bytes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub total_human: String,
    pub available_human: String,
}

impl MemorySnapshot {
    /// Build a snapshot from raw byte counts, deriving the human strings.
    ///
    /// Available memory is clamped to total; some platforms briefly report
    /// reclaimable caches above the physical total.
    #[must_use]
    pub fn from_bytes(total_bytes: u64, available_bytes: u64) -> Self {
        let available_bytes = available_bytes.min(total_bytes);
        Self {
            total_bytes,
            available_bytes,
            total_human: bytes_to_human(total_bytes),
            available_human: bytes_to_human(available_bytes),
        }
    }
}

/// Convert a byte count to a short human string (e.g. "16.0 GB").
///
/// Uses binary prefixes with one decimal place, picking the largest unit
/// where the magnitude is at least 1.
#[must_use]
pub fn bytes_to_human(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.1} GB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
