//! Active probing adapters for clawkit.
//!
//! Implements the `clawkit-core` ports by actually touching the system:
//! TCP connects, command execution, HTTP calls and memory queries. All
//! probes are side-effect-free on persisted state, carry explicit timeouts
//! and degrade to "no data" on failure.

pub mod detect;
pub mod llmfit;
pub mod models;
pub mod probe;
pub mod system;

pub use detect::DefaultRuntimeProbe;
pub use llmfit::DefaultHardwareFit;
