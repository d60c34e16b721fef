//! Hardware-fit advisor records (llmfit JSON output).
//!
//! The advisor is an optional external program; these types only describe
//! its parsed output. Field aliases cover the naming drift between llmfit
//! releases. Invocation and parsing live in `clawkit-probe`.

use serde::{Deserialize, Serialize};

/// Machine description as reported by the advisor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemDescription {
    #[serde(alias = "total_ram")]
    pub total_ram_gb: Option<f64>,
    #[serde(alias = "available_ram")]
    pub available_ram_gb: Option<f64>,
    pub cpu_cores: Option<u32>,
    pub gpu_name: Option<String>,
    pub vram_gb: Option<f64>,
    /// Inference backend the advisor expects (e.g. "metal", "cuda", "cpu").
    pub backend: Option<String>,
}

/// One ranked model recommendation from the advisor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub name: Option<String>,
    /// Parameter count in billions.
    #[serde(alias = "params")]
    pub params_b: Option<f64>,
    /// Qualitative fit (e.g. "comfortable", "tight", "too-big").
    pub fit: Option<String>,
    pub score: Option<f64>,
    pub use_case: Option<String>,
    /// Estimated memory footprint in GB.
    pub mem_gb: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_description_aliases() {
        let json = r#"{"total_ram": 32.0, "available_ram": 20.5, "gpu_name": "Apple M3"}"#;
        let desc: SystemDescription = serde_json::from_str(json).unwrap();
        assert_eq!(desc.total_ram_gb, Some(32.0));
        assert_eq!(desc.available_ram_gb, Some(20.5));
        assert_eq!(desc.gpu_name.as_deref(), Some("Apple M3"));
        assert!(desc.backend.is_none());
    }

    #[test]
    fn test_recommendation_tolerates_missing_fields() {
        let rec: Recommendation = serde_json::from_str("{}").unwrap();
        assert!(rec.name.is_none());
        assert!(rec.score.is_none());

        let json = r#"{"name": "qwen2.5:7b", "params": 7.6, "fit": "comfortable", "score": 0.91}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.name.as_deref(), Some("qwen2.5:7b"));
        assert_eq!(rec.params_b, Some(7.6));
    }
}
