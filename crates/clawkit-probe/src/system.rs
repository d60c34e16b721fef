//! System memory reading via sysinfo.

use sysinfo::System;

use clawkit_core::MemorySnapshot;

/// Read total and available physical memory.
///
/// Refreshes once per call; cheap enough to run on every probe cycle.
#[must_use]
pub fn memory_snapshot() -> MemorySnapshot {
    let mut sys = System::new();
    sys.refresh_memory();
    MemorySnapshot::from_bytes(sys.total_memory(), sys.available_memory())
}
