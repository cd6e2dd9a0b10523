//! Per-video metadata fetching via yt-dlp.

use crate::error::{PlukkError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Metadata record for one processed video.
///
/// Immutable once built; the `url` field always equals the URL the fetch was
/// asked for, even when yt-dlp normalizes it internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// The URL the record was built from.
    pub url: String,
    /// Video ID.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description (if available).
    pub description: Option<String>,
    /// Channel or uploader name (if available).
    pub channel: Option<String>,
    /// Upload date as reported by YouTube (YYYYMMDD).
    pub upload_date: Option<String>,
    /// Duration in seconds (if known).
    pub duration_seconds: Option<u32>,
    /// View count (if available).
    pub view_count: Option<u64>,
    /// Like count (if available).
    pub like_count: Option<u64>,
}

impl VideoRecord {
    /// Upload date parsed into a calendar date, when present and well-formed.
    pub fn upload_date_parsed(&self) -> Option<chrono::NaiveDate> {
        self.upload_date
            .as_deref()
            .filter(|s| s.len() == 8)
            .and_then(|s| chrono::NaiveDate::parse_from_str(s, "%Y%m%d").ok())
    }

    /// Format the duration as MM:SS or HH:MM:SS.
    pub fn format_duration(&self) -> String {
        let total = self.duration_seconds.unwrap_or(0);
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let secs = total % 60;

        if hours > 0 {
            format!("{:02}:{:02}:{:02}", hours, minutes, secs)
        } else {
            format!("{:02}:{:02}", minutes, secs)
        }
    }
}

/// Trait for per-video metadata providers.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch metadata for one video URL.
    async fn fetch(&self, url: &str) -> Result<VideoRecord>;
}

/// Metadata fetcher backed by yt-dlp.
pub struct YtDlpMetadataFetcher;

impl YtDlpMetadataFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YtDlpMetadataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataFetcher for YtDlpMetadataFetcher {
    async fn fetch(&self, url: &str) -> Result<VideoRecord> {
        let video_id = super::extract_video_id(url).ok_or_else(|| {
            PlukkError::InvalidInput(format!("Invalid YouTube video ID or URL: {}", url))
        })?;

        let output = tokio::process::Command::new("yt-dlp")
            .args([
                "--dump-json",
                "--no-download",
                "--no-warnings",
                "--ignore-errors",
                &super::watch_url(&video_id),
            ])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlukkError::ToolNotFound("yt-dlp".to_string())
                } else {
                    PlukkError::Metadata(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlukkError::VideoNotFound(format!(
                "Video {} not found or unavailable: {}",
                video_id, stderr
            )));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let json: serde_json::Value = serde_json::from_str(&json_str)
            .map_err(|e| PlukkError::Metadata(format!("Failed to parse yt-dlp output: {}", e)))?;

        Ok(record_from_json(url, &video_id, &json))
    }
}

/// Build a `VideoRecord` from yt-dlp's JSON dump.
fn record_from_json(url: &str, video_id: &str, json: &serde_json::Value) -> VideoRecord {
    let title = json["title"]
        .as_str()
        .unwrap_or("Unknown Title")
        .to_string();

    let description = json["description"].as_str().map(|s| s.to_string());

    let channel = json["channel"]
        .as_str()
        .or_else(|| json["uploader"].as_str())
        .map(|s| s.to_string());

    let upload_date = json["upload_date"].as_str().map(|s| s.to_string());

    let duration_seconds = json["duration"].as_f64().map(|d| d as u32);

    let view_count = json["view_count"].as_u64();
    let like_count = json["like_count"].as_u64();

    VideoRecord {
        url: url.to_string(),
        id: video_id.to_string(),
        title,
        description,
        channel,
        upload_date,
        duration_seconds,
        view_count,
        like_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": "dQw4w9WgXcQ",
            "title": "Graph Algorithms Explained",
            "description": "BFS, DFS, and shortest paths.",
            "channel": "CS Lectures",
            "upload_date": "20240115",
            "duration": 1834.0,
            "view_count": 123456,
            "like_count": 7890
        })
    }

    #[test]
    fn test_record_from_json() {
        let url = "https://youtu.be/dQw4w9WgXcQ";
        let record = record_from_json(url, "dQw4w9WgXcQ", &sample_json());

        // url field preserves the input URL, not the canonical one
        assert_eq!(record.url, url);
        assert_eq!(record.id, "dQw4w9WgXcQ");
        assert_eq!(record.title, "Graph Algorithms Explained");
        assert_eq!(record.channel.as_deref(), Some("CS Lectures"));
        assert_eq!(record.duration_seconds, Some(1834));
        assert_eq!(record.view_count, Some(123456));
        assert_eq!(record.like_count, Some(7890));
    }

    #[test]
    fn test_record_from_sparse_json() {
        let json = serde_json::json!({"id": "dQw4w9WgXcQ"});
        let record = record_from_json("dQw4w9WgXcQ", "dQw4w9WgXcQ", &json);

        assert_eq!(record.title, "Unknown Title");
        assert!(record.description.is_none());
        assert!(record.view_count.is_none());
    }

    #[test]
    fn test_upload_date_parsed() {
        let record = record_from_json("x", "dQw4w9WgXcQ", &sample_json());
        let date = record.upload_date_parsed().unwrap();
        assert_eq!(date, chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_format_duration() {
        let mut record = record_from_json("x", "dQw4w9WgXcQ", &sample_json());
        assert_eq!(record.format_duration(), "30:34");

        record.duration_seconds = Some(3665);
        assert_eq!(record.format_duration(), "01:01:05");

        record.duration_seconds = None;
        assert_eq!(record.format_duration(), "00:00");
    }
}
