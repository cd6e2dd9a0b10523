//! Transcript fetching via YouTube's timedtext endpoint.
//!
//! Transcript failures are never fatal: a video without captions (or a
//! transient fetch error) yields `None` rather than an error.

use crate::error::{PlukkError, Result};
use tracing::warn;

/// Fetches video transcripts over HTTP.
pub struct TranscriptFetcher {
    client: reqwest::Client,
    language: String,
}

impl TranscriptFetcher {
    pub fn new() -> Self {
        Self::with_language("en")
    }

    pub fn with_language(language: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            language: language.to_string(),
        }
    }

    /// Fetch a transcript for a video URL or ID.
    ///
    /// Returns `None` when the video has no captions or the fetch fails;
    /// the error is logged, not propagated.
    pub async fn fetch(&self, input: &str) -> Option<String> {
        let video_id = match super::extract_video_id(input) {
            Some(id) => id,
            None => {
                warn!("Cannot extract video ID from: {}", input);
                return None;
            }
        };

        match self.try_fetch(&video_id).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                warn!("Transcript for {} was empty", video_id);
                None
            }
            Err(e) => {
                warn!("Error fetching transcript for {}: {}", video_id, e);
                None
            }
        }
    }

    async fn try_fetch(&self, video_id: &str) -> Result<String> {
        let url = format!(
            "https://www.youtube.com/api/timedtext?v={}&lang={}&fmt=json3",
            video_id, self.language
        );

        let resp = self.client.get(&url).send().await?;
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| PlukkError::Metadata(format!("Failed to parse timedtext: {}", e)))?;

        Ok(format_transcript(&body))
    }
}

impl Default for TranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten a timedtext json3 body into plain text.
fn format_transcript(body: &serde_json::Value) -> String {
    body["events"]
        .as_array()
        .map(|events| {
            events
                .iter()
                .filter_map(|event| {
                    event["segs"].as_array().map(|segs| {
                        segs.iter()
                            .filter_map(|seg| seg["utf8"].as_str())
                            .collect::<Vec<_>>()
                            .join("")
                    })
                })
                .filter(|s| !s.trim().is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_transcript() {
        let body = serde_json::json!({
            "events": [
                {"segs": [{"utf8": "hello "}, {"utf8": "world"}]},
                {"segs": [{"utf8": "\n"}]},
                {"segs": [{"utf8": "second line"}]}
            ]
        });
        assert_eq!(format_transcript(&body), "hello world second line");
    }

    #[test]
    fn test_format_transcript_empty_body() {
        assert_eq!(format_transcript(&serde_json::json!({})), "");
    }

    #[tokio::test]
    async fn test_fetch_invalid_input_returns_sentinel() {
        let fetcher = TranscriptFetcher::new();
        // Not a valid URL or ID, so the fetch short-circuits to None
        assert_eq!(fetcher.fetch("not-a-video-id").await, None);
    }
}
