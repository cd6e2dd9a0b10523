//! Final ranking step.
//!
//! Formats every accumulated video record into a numbered text block and
//! asks the model to pick the best videos by view count, likes, and
//! duration. The model's response is returned as raw text.

use crate::config::{Prompts, RankingSettings};
use crate::error::{PlukkError, Result};
use crate::openai::create_client;
use crate::youtube::VideoRecord;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use std::collections::HashMap;
use tracing::info;

/// Ranks processed videos with one LLM call.
pub struct Ranker {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    prompts: Prompts,
    settings: RankingSettings,
}

impl Ranker {
    pub fn new(model: &str, prompts: Prompts, settings: RankingSettings) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
            prompts,
            settings,
        }
    }

    /// Rank the records and return the model's raw response text.
    pub async fn rank(&self, records: &[VideoRecord]) -> Result<String> {
        if records.is_empty() {
            return Err(PlukkError::Ranking(
                "No video records to rank".to_string(),
            ));
        }

        info!("Ranking {} video records", records.len());

        let mut vars = HashMap::new();
        vars.insert("metadata".to_string(), format_records(records));
        vars.insert(
            "pick_count".to_string(),
            self.settings.pick_count.to_string(),
        );
        vars.insert(
            "max_hours".to_string(),
            self.settings.max_duration_hours.to_string(),
        );

        let prompt = self
            .prompts
            .render_with_custom(&self.prompts.ranking.user, &vars);

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| PlukkError::Ranking(e.to_string()))?
                .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| PlukkError::Ranking(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| PlukkError::OpenAI(format!("Ranking API error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PlukkError::Ranking("No response from model".to_string()))?;

        choice
            .message
            .content
            .ok_or_else(|| PlukkError::Ranking("Model returned empty response".to_string()))
    }
}

/// Format records as the numbered metadata block the ranking prompt expects.
pub fn format_records(records: &[VideoRecord]) -> String {
    let mut output = String::new();
    for (i, record) in records.iter().enumerate() {
        output.push_str(&i.to_string());
        output.push_str(&format!(", video url: {}", record.url));
        output.push_str(&format!(", video title: {}", record.title));
        output.push_str(&format!(
            ", video description: {}",
            record.description.as_deref().unwrap_or("")
        ));
        output.push_str(&format!(
            ", video view count: {}",
            record
                .view_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ));
        output.push_str(&format!(
            ", video like count: {}",
            record
                .like_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ));
        output.push_str(&format!(
            ", video duration: {}",
            record.format_duration()
        ));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, title: &str, views: u64) -> VideoRecord {
        VideoRecord {
            url: url.to_string(),
            id: "aaaaaaaaaaa".to_string(),
            title: title.to_string(),
            description: Some("a description".to_string()),
            channel: Some("a channel".to_string()),
            upload_date: None,
            duration_seconds: Some(600),
            view_count: Some(views),
            like_count: Some(views / 10),
        }
    }

    #[test]
    fn test_format_records_numbered() {
        let records = vec![
            record("https://youtu.be/aaaaaaaaaaa", "First", 1000),
            record("https://youtu.be/bbbbbbbbbbb", "Second", 2000),
        ];
        let formatted = format_records(&records);

        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0, video url: https://youtu.be/aaaaaaaaaaa"));
        assert!(lines[1].starts_with("1, video url: https://youtu.be/bbbbbbbbbbb"));
        assert!(lines[0].contains("video view count: 1000"));
        assert!(lines[1].contains("video like count: 200"));
        assert!(lines[0].contains("video duration: 10:00"));
    }

    #[test]
    fn test_format_records_missing_counts() {
        let mut r = record("https://youtu.be/aaaaaaaaaaa", "Sparse", 0);
        r.view_count = None;
        r.like_count = None;
        r.description = None;

        let formatted = format_records(&[r]);
        assert!(formatted.contains("video view count: unknown"));
        assert!(formatted.contains("video like count: unknown"));
        assert!(formatted.contains("video description: ,"));
    }
}
