//! Hardware-fit advisor port.

use async_trait::async_trait;

use crate::fit::{Recommendation, SystemDescription};

/// Port for the optional external hardware-fit advisor.
///
/// Absence of the advisor, a non-zero exit or unparsable output all resolve
/// to `None` ("no data"); this capability is an enhancement, never an error
/// source.
#[async_trait]
pub trait HardwareFitPort: Send + Sync {
    /// Query the advisor for a system description and ranked model
    /// recommendations. `limit` bounds the recommendation count.
    async fn hardware_fit(&self, limit: u8) -> Option<(SystemDescription, Vec<Recommendation>)>;
}
