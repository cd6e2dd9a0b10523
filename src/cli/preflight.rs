//! Pre-flight checks before expensive operations.
//!
//! Validates that required tools and credentials are available before
//! starting operations that would otherwise fail midway.

use crate::error::{PlukkError, Result};
use std::process::Command;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// The full search-and-rank workflow requires yt-dlp and an API key.
    Find,
    /// Fetching metadata for a single video only requires yt-dlp.
    Info,
    /// Transcript fetching needs no external requirements.
    Transcript,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Find => {
            check_api_key()?;
            check_tool("yt-dlp")?;
        }
        Operation::Info => {
            check_tool("yt-dlp")?;
        }
        Operation::Transcript => {}
    }
    Ok(())
}

/// Check if OpenAI API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(PlukkError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(PlukkError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    match Command::new(name).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(PlukkError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(PlukkError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(PlukkError::ToolNotFound(format!("{}: {}", name, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_has_no_requirements() {
        assert!(check(Operation::Transcript).is_ok());
    }
}
