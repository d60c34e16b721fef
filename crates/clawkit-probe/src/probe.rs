//! Low-level, runtime-agnostic probes.
//!
//! Port checks, bounded command execution and version-string extraction.
//! Nothing here knows about any specific runtime.

use std::net::{SocketAddr, TcpStream};
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Upper bound for a single TCP connect attempt.
pub const PORT_PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound for a probing subprocess (version checks, CLI listings).
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Check whether something is listening on `host:port`.
///
/// Returns `false` on any failure (refused, timeout, unreachable, bad
/// address); never returns an error and never blocks past `timeout`.
#[must_use]
pub fn port_open(host: &str, port: u16, timeout: Duration) -> bool {
    format!("{host}:{port}")
        .parse::<SocketAddr>()
        .ok()
        .and_then(|addr| TcpStream::connect_timeout(&addr, timeout).ok())
        .is_some()
}

/// Locate an executable on PATH.
#[must_use]
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Run a command and capture stdout, bounded by `timeout`.
///
/// Returns `None` if the program is missing, exits non-zero, or doesn't
/// finish in time. The child is killed when the timeout fires
/// (`kill_on_drop`), so a wedged probe can't outlive its deadline.
pub async fn command_output(program: &str, args: &[&str], deadline: Duration) -> Option<String> {
    let child = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output();

    match timeout(deadline, child).await {
        Ok(Ok(output)) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(Ok(output)) => {
            debug!(program, status = ?output.status.code(), "probe command exited non-zero");
            None
        }
        Ok(Err(e)) => {
            debug!(program, error = %e, "probe command failed to run");
            None
        }
        Err(_) => {
            debug!(program, timeout = ?deadline, "probe command timed out");
            None
        }
    }
}

/// Run `program version_flag` and extract a version string.
///
/// Returns `None` if the executable is missing, exits non-zero, or its
/// output contains nothing version-shaped.
pub async fn executable_version(program: &str, version_flag: &str) -> Option<String> {
    let stdout = command_output(program, &[version_flag], COMMAND_TIMEOUT).await?;
    extract_version(&stdout)
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+\.\d+(?:\.\d+)?").unwrap())
}

/// Extract a semantic-version-like token from command output.
///
/// Scans lines in order and returns the first `X.Y` or `X.Y.Z` match.
/// Output with no such token yields `None` ("version unknown") rather
/// than a guess.
#[must_use]
pub fn extract_version(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| version_pattern().find(line))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_open_nothing_listening() {
        use std::time::Instant;
        // High port that is very unlikely to be in use.
        let started = Instant::now();
        assert!(!port_open("127.0.0.1", 65431, PORT_PROBE_TIMEOUT));
        // Bounded: refused/timed-out connects return promptly.
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_port_open_bad_host() {
        assert!(!port_open("not-an-address", 80, PORT_PROBE_TIMEOUT));
    }

    #[test]
    fn test_extract_version_formats() {
        assert_eq!(
            extract_version("ollama version is 0.5.7").as_deref(),
            Some("0.5.7")
        );
        assert_eq!(extract_version("lms v0.3.12\n").as_deref(), Some("0.3.12"));
        assert_eq!(
            extract_version("banner line\nrelease 12.4, V12.4.1").as_deref(),
            Some("12.4")
        );
        assert_eq!(extract_version("two.part 1.2").as_deref(), Some("1.2"));
    }

    #[test]
    fn test_extract_version_no_match() {
        assert_eq!(extract_version(""), None);
        assert_eq!(extract_version("no digits here"), None);
        assert_eq!(extract_version("just 42"), None);
    }

    #[tokio::test]
    async fn test_command_output_missing_program() {
        let out = command_output("clawkit-no-such-binary", &["--version"], COMMAND_TIMEOUT).await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn test_executable_version_missing_program() {
        assert!(executable_version("clawkit-no-such-binary", "--version").await.is_none());
    }
}
