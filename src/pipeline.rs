//! Workflow pipeline for Plukk.
//!
//! Wires the fixed graph together: assistant -> (search tool | direct answer)
//! -> URL extraction -> concurrent metadata fan-out -> join -> ranking.

use crate::agent::{Assistant, Decision, ToolCall};
use crate::config::{Prompts, Settings};
use crate::error::{PlukkError, Result};
use crate::extract::parse_url_list;
use crate::rank::Ranker;
use crate::youtube::{
    MetadataFetcher, VideoRecord, VideoSearch, YtDlpMetadataFetcher, YtDlpSearch,
};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The main pipeline, holding every component of the workflow.
pub struct Pipeline {
    settings: Settings,
    prompts: Prompts,
    assistant: Assistant,
    ranker: Ranker,
    search: Arc<dyn VideoSearch>,
    fetcher: Arc<dyn MetadataFetcher>,
}

impl Pipeline {
    /// Create a pipeline with the default yt-dlp backed components.
    pub fn new(settings: Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        Ok(Self::with_components(
            settings,
            prompts,
            Arc::new(YtDlpSearch::new()),
            Arc::new(YtDlpMetadataFetcher::new()),
        ))
    }

    /// Create a pipeline with custom search and metadata components.
    pub fn with_components(
        settings: Settings,
        prompts: Prompts,
        search: Arc<dyn VideoSearch>,
        fetcher: Arc<dyn MetadataFetcher>,
    ) -> Self {
        let assistant = Assistant::new(&settings.model.assistant);
        let ranker = Ranker::new(
            &settings.model.ranking,
            prompts.clone(),
            settings.ranking.clone(),
        );

        Self {
            settings,
            prompts,
            assistant,
            ranker,
            search,
            fetcher,
        }
    }

    /// Run the full workflow for a topic.
    #[instrument(skip(self), fields(topic = %topic))]
    pub async fn run(&self, topic: &str) -> Result<Outcome> {
        let mut messages = self.initial_conversation(topic)?;

        // Assistant step: search or answer directly
        let decision = self.assistant.decide(&mut messages).await?;

        let (call_id, query, count) = match decision {
            Decision::DirectAnswer(answer) => {
                info!("Assistant answered directly, no search requested");
                return Ok(Outcome::DirectAnswer(answer));
            }
            Decision::ToolRequest {
                call_id,
                call: ToolCall::YtSearch { query, count },
            } => (call_id, query, count),
        };

        // Tool step
        info!("Searching for {} videos: {}", count, query);
        eprintln!("  Searching YouTube...");
        let tool_output = self.search.search(&query, count).await?;

        messages.push(
            ChatCompletionRequestToolMessageArgs::default()
                .tool_call_id(call_id)
                .content(tool_output.clone())
                .build()
                .map_err(|e| PlukkError::Agent(e.to_string()))?
                .into(),
        );

        // Extraction step
        let urls = parse_url_list(&tool_output)?;
        info!("Extracted {} candidate URLs", urls.len());
        eprintln!("  Found {} candidates", urls.len());

        // Fan-out: fetch metadata for every URL concurrently
        eprintln!("  Fetching metadata...");
        let (records, failures) = fetch_all(
            self.fetcher.clone(),
            &urls,
            self.settings.search.max_concurrent_fetches,
        )
        .await;

        for failure in &failures {
            warn!("Skipping {}: {}", failure.url, failure.error);
        }

        if records.is_empty() {
            return Err(PlukkError::Metadata(format!(
                "All {} video fetches failed",
                urls.len()
            )));
        }

        // Join barrier passed: every branch has completed. Rank what succeeded.
        eprintln!("  Ranking {} videos...", records.len());
        let best = self.ranker.rank(&records).await?;

        Ok(Outcome::Ranked(RankedOutcome {
            records,
            failures,
            best,
        }))
    }

    /// Build the initial conversation: system prompt plus the search request.
    fn initial_conversation(&self, topic: &str) -> Result<Vec<ChatCompletionRequestMessage>> {
        let mut vars = HashMap::new();
        vars.insert("topic".to_string(), topic.to_string());
        vars.insert(
            "count".to_string(),
            self.settings.search.result_count.to_string(),
        );

        let user_prompt = self
            .prompts
            .render_with_custom(&self.prompts.assistant.search_request, &vars);

        Ok(vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.prompts.assistant.system.clone())
                .build()
                .map_err(|e| PlukkError::Agent(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_prompt)
                .build()
                .map_err(|e| PlukkError::Agent(e.to_string()))?
                .into(),
        ])
    }
}

/// Fetch metadata for every URL with bounded concurrency.
///
/// Acts as the join barrier: returns only once every branch has completed.
/// Failed branches are collected separately so the caller can decide what to
/// do with them; records arrive in completion order.
pub async fn fetch_all(
    fetcher: Arc<dyn MetadataFetcher>,
    urls: &[String],
    max_concurrent: usize,
) -> (Vec<VideoRecord>, Vec<FetchFailure>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();

    let mut results = stream::iter(urls.iter().cloned())
        .map(|url| {
            let fetcher = fetcher.clone();
            async move {
                let result = fetcher.fetch(&url).await;
                (url, result)
            }
        })
        .buffer_unordered(max_concurrent.max(1));

    while let Some((url, result)) = results.next().await {
        match result {
            Ok(record) => records.push(record),
            Err(e) => failures.push(FetchFailure {
                url,
                error: e.to_string(),
            }),
        }
    }

    (records, failures)
}

/// Outcome of a pipeline run.
#[derive(Debug)]
pub enum Outcome {
    /// The assistant answered without searching.
    DirectAnswer(String),
    /// The full search-and-rank path ran to completion.
    Ranked(RankedOutcome),
}

/// Result of the search-and-rank path.
#[derive(Debug)]
pub struct RankedOutcome {
    /// All successfully fetched records, in completion order.
    pub records: Vec<VideoRecord>,
    /// URLs whose metadata fetch failed, excluded from ranking.
    pub failures: Vec<FetchFailure>,
    /// The model's raw ranking response.
    pub best: String,
}

/// A fan-out branch that failed.
#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub url: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fetcher that succeeds for every URL, with varying artificial delays so
    /// completion order differs from request order.
    struct MockFetcher {
        in_flight: AtomicUsize,
        max_observed: AtomicUsize,
    }

    impl MockFetcher {
        fn new() -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                max_observed: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MetadataFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> crate::error::Result<VideoRecord> {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_observed.fetch_max(current, Ordering::SeqCst);

            // Later URLs finish sooner
            let delay = 50u64.saturating_sub(url.len() as u64);
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            Ok(VideoRecord {
                url: url.to_string(),
                id: "aaaaaaaaaaa".to_string(),
                title: format!("Video at {}", url),
                description: None,
                channel: None,
                upload_date: None,
                duration_seconds: Some(300),
                view_count: Some(1),
                like_count: Some(1),
            })
        }
    }

    /// Fetcher that fails for URLs containing "bad".
    struct FlakyFetcher;

    #[async_trait]
    impl MetadataFetcher for FlakyFetcher {
        async fn fetch(&self, url: &str) -> crate::error::Result<VideoRecord> {
            if url.contains("bad") {
                return Err(PlukkError::VideoNotFound(url.to_string()));
            }
            Ok(VideoRecord {
                url: url.to_string(),
                id: "aaaaaaaaaaa".to_string(),
                title: "ok".to_string(),
                description: None,
                channel: None,
                upload_date: None,
                duration_seconds: None,
                view_count: None,
                like_count: None,
            })
        }
    }

    fn urls(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("https://youtu.be/video{:04}", i))
            .collect()
    }

    #[tokio::test]
    async fn test_fetch_all_one_record_per_url() {
        let input = urls(10);
        let (records, failures) = fetch_all(Arc::new(MockFetcher::new()), &input, 4).await;

        assert_eq!(records.len(), 10);
        assert!(failures.is_empty());

        // Set equality: every input URL appears exactly once, order-independent
        let got: HashSet<&str> = records.iter().map(|r| r.url.as_str()).collect();
        let want: HashSet<&str> = input.iter().map(|s| s.as_str()).collect();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn test_fetch_all_record_url_matches_input() {
        let input = vec!["https://youtu.be/abcdefghijk".to_string()];
        let (records, _) = fetch_all(Arc::new(MockFetcher::new()), &input, 2).await;
        assert_eq!(records[0].url, input[0]);
    }

    #[tokio::test]
    async fn test_fetch_all_bounded_concurrency() {
        let fetcher = Arc::new(MockFetcher::new());
        let input = urls(12);
        fetch_all(fetcher.clone(), &input, 3).await;

        assert!(fetcher.max_observed.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_fetch_all_collects_failures_separately() {
        let input = vec![
            "https://youtu.be/good0000000".to_string(),
            "https://youtu.be/bad00000000".to_string(),
            "https://youtu.be/good1111111".to_string(),
        ];
        let (records, failures) = fetch_all(Arc::new(FlakyFetcher), &input, 4).await;

        assert_eq!(records.len(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].url, "https://youtu.be/bad00000000");
    }

    #[tokio::test]
    async fn test_fetch_all_empty_input() {
        let (records, failures) = fetch_all(Arc::new(MockFetcher::new()), &[], 4).await;
        assert!(records.is_empty());
        assert!(failures.is_empty());
    }
}
