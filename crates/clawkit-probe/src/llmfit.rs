//! llmfit hardware-fit adapter.
//!
//! Shells out to the external `llmfit` advisor when it resolves on PATH.
//! Absence, non-zero exits and unparsable output all collapse to "no
//! data"; the advisor is an optional enhancement, never an error source.

use async_trait::async_trait;
use tracing::debug;

use clawkit_core::{HardwareFitPort, Recommendation, SystemDescription};

use crate::probe::{COMMAND_TIMEOUT, command_output, find_executable};

const ADVISOR_PROGRAM: &str = "llmfit";
const MAX_RECOMMENDATIONS: u8 = 20;

/// Query `llmfit --json system`.
pub async fn advisor_system() -> Option<SystemDescription> {
    let stdout = command_output(ADVISOR_PROGRAM, &["--json", "system"], COMMAND_TIMEOUT).await?;
    match serde_json::from_str(&stdout) {
        Ok(desc) => Some(desc),
        Err(e) => {
            debug!(error = %e, "llmfit system output was not parsable");
            None
        }
    }
}

/// Query `llmfit recommend --json --limit N`. `limit` is clamped to 1..=20.
pub async fn advisor_recommendations(limit: u8) -> Vec<Recommendation> {
    let limit = limit.clamp(1, MAX_RECOMMENDATIONS).to_string();
    let Some(stdout) =
        command_output(ADVISOR_PROGRAM, &["recommend", "--json", "--limit", &limit], COMMAND_TIMEOUT).await
    else {
        return Vec::new();
    };
    match serde_json::from_str(&stdout) {
        Ok(recs) => recs,
        Err(e) => {
            debug!(error = %e, "llmfit recommend output was not parsable");
            Vec::new()
        }
    }
}

/// Full advisor query: system description plus ranked recommendations.
///
/// `None` when the advisor is absent or its system output is unusable.
pub async fn hardware_fit(limit: u8) -> Option<(SystemDescription, Vec<Recommendation>)> {
    if find_executable(ADVISOR_PROGRAM).is_none() {
        debug!("llmfit not on PATH, skipping hardware fit");
        return None;
    }
    let system = advisor_system().await?;
    let recommendations = advisor_recommendations(limit).await;
    Some((system, recommendations))
}

/// Default implementation of `HardwareFitPort`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHardwareFit;

impl DefaultHardwareFit {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HardwareFitPort for DefaultHardwareFit {
    async fn hardware_fit(&self, limit: u8) -> Option<(SystemDescription, Vec<Recommendation>)> {
        hardware_fit(limit).await
    }
}
