//! Port definitions (traits) implemented by adapter crates.

mod hardware_fit;
mod runtime_probe;

pub use hardware_fit::HardwareFitPort;
pub use runtime_probe::RuntimeProbePort;
