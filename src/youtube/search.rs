//! YouTube search via yt-dlp.

use crate::error::{PlukkError, Result};
use async_trait::async_trait;
use tracing::debug;

/// Trait for video search providers.
///
/// The tool output is a JSON array of watch URLs encoded as text, which is
/// what gets handed back to the conversation as the tool result.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search for videos and return a JSON array of watch URLs as a string.
    async fn search(&self, query: &str, count: usize) -> Result<String>;
}

/// YouTube search backed by yt-dlp's `ytsearch` extractor.
pub struct YtDlpSearch;

impl YtDlpSearch {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YtDlpSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoSearch for YtDlpSearch {
    async fn search(&self, query: &str, count: usize) -> Result<String> {
        let search_spec = format!("ytsearch{}:{}", count, query);
        debug!("Running yt-dlp search: {}", search_spec);

        let output = tokio::process::Command::new("yt-dlp")
            .args([
                "--dump-json",
                "--no-download",
                "--no-warnings",
                "--flat-playlist",
                &search_spec,
            ])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlukkError::ToolNotFound("yt-dlp".to_string())
                } else {
                    PlukkError::Search(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlukkError::Search(format!(
                "yt-dlp search failed: {}",
                stderr
            )));
        }

        // yt-dlp emits one JSON object per line in flat-playlist mode
        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut urls = Vec::new();

        for line in stdout.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Ok(json) = serde_json::from_str::<serde_json::Value>(line) {
                let url = json["url"]
                    .as_str()
                    .map(|s| s.to_string())
                    .or_else(|| json["id"].as_str().map(super::watch_url));

                if let Some(url) = url {
                    urls.push(url);
                }
            }
        }

        if urls.is_empty() {
            return Err(PlukkError::Search(format!(
                "No videos found for query: {}",
                query
            )));
        }

        debug!("Search returned {} candidate URLs", urls.len());
        Ok(serde_json::to_string(&urls)?)
    }
}
