//! Provider definitions as they appear in the global and agent files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One named model-backend definition.
///
/// The on-disk shape is camelCase (`baseUrl`, `apiKey`, `api`, `models`).
/// Unknown keys are captured in `extra` so a load/save cycle never strips
/// fields this engine doesn't know about. The provider name is the map key
/// in its owning document, not a field of the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Secret; owned by the agent, never overwritten by a sync.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Wire protocol dialect (e.g. "openai-completions", "anthropic-messages").
    #[serde(rename = "api", skip_serializing_if = "Option::is_none")]
    pub api_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
    /// Round-trip storage for operator-added keys we don't model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProviderEntry {
    /// True if a non-empty API key is present.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
