//! Model listings for runtimes that expose one.
//!
//! Listing is best-effort decoration on top of detection: malformed or
//! unreachable responses yield an empty list, never an error. Parsing is
//! separated from fetching for unit testing.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::detect::lms_install_path;
use crate::probe::{COMMAND_TIMEOUT, command_output};

const OLLAMA_TAGS_URL: &str = "http://127.0.0.1:11434/api/tags";
const HTTP_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Deserialize)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: Option<String>,
}

/// Parse the Ollama `/api/tags` response body into model names.
#[must_use]
pub fn parse_ollama_tags(body: &str) -> Vec<String> {
    let Ok(resp) = serde_json::from_str::<OllamaTagsResponse>(body) else {
        return Vec::new();
    };
    resp.models
        .into_iter()
        .filter_map(|m| m.name)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Fetch the model list from the local Ollama API.
///
/// Empty when Ollama is not running or the response is malformed.
pub async fn ollama_models() -> Vec<String> {
    let client = match reqwest::Client::builder().timeout(HTTP_TIMEOUT).build() {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "failed to build http client");
            return Vec::new();
        }
    };
    match client.get(OLLAMA_TAGS_URL).send().await {
        Ok(resp) => {
            let body = resp.text().await.unwrap_or_default();
            parse_ollama_tags(&body)
        }
        Err(e) => {
            debug!(error = %e, "ollama tags request failed");
            Vec::new()
        }
    }
}

/// Parse `lms ls` tabular output into model identifiers.
///
/// The first whitespace-delimited token of each row is the identifier.
/// Header rows, separator rows, summary lines, blank lines and extra
/// columns are all tolerated.
#[must_use]
pub fn parse_lms_table(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_separator_row(line))
        .filter_map(|line| line.split_whitespace().next())
        .filter(|token| !is_header_token(token))
        .map(String::from)
        .collect()
}

/// Rows made only of box-drawing/rule characters.
fn is_separator_row(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '-' | '=' | '_' | '─' | '│' | '┼' | '+' | ' '))
}

/// Column titles and summary prefixes `lms ls` prints around the table.
fn is_header_token(token: &str) -> bool {
    matches!(
        token,
        "LLM" | "LLMS" | "EMBEDDING" | "MODEL" | "MODELS" | "NAME" | "PARAMS" | "You"
    )
}

/// Fetch model identifiers from the LM Studio CLI (`lms ls`).
///
/// Empty when the CLI is missing or exits non-zero.
pub async fn lm_studio_models() -> Vec<String> {
    let cmd = lms_install_path()
        .map_or_else(|| "lms".to_string(), |p| p.display().to_string());
    match command_output(&cmd, &["ls"], COMMAND_TIMEOUT).await {
        Some(stdout) => parse_lms_table(&stdout),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ollama_tags() {
        let json = r#"{"models":[{"name":"llama3.2"},{"name":"qwen2.5:7b"}]}"#;
        assert_eq!(parse_ollama_tags(json), ["llama3.2", "qwen2.5:7b"]);
    }

    #[test]
    fn test_parse_ollama_tags_degenerate() {
        assert!(parse_ollama_tags(r#"{"models":[]}"#).is_empty());
        assert!(parse_ollama_tags("{}").is_empty());
        assert!(parse_ollama_tags("not json").is_empty());
        assert!(parse_ollama_tags(r#"{"models":[{"size": 3}]}"#).is_empty());
    }

    #[test]
    fn test_parse_lms_table() {
        let out = "LLM                      PARAMS   ARCH\n\
                   ----------------------------------------\n\
                   qwen2.5-7b-instruct      7B       qwen2\n\
                   llama-3.2-3b-instruct    3B       llama\n\n";
        assert_eq!(
            parse_lms_table(out),
            ["qwen2.5-7b-instruct", "llama-3.2-3b-instruct"]
        );
    }

    #[test]
    fn test_parse_lms_table_tolerates_noise() {
        let out = "\nMODEL  SIZE\n=====\na-model extra columns here\n   \nYou have 1 model\n";
        assert_eq!(parse_lms_table(out), ["a-model"]);
        assert!(parse_lms_table("").is_empty());
        assert!(parse_lms_table("\n\n  \n").is_empty());
    }
}
