//! Info command - fetch metadata for a single video.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::youtube::{MetadataFetcher, YtDlpMetadataFetcher};
use anyhow::Result;

/// Run the info command.
pub async fn run_info(url: &str) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Info) {
        Output::error(&format!("{}", e));
        Output::info("Run 'plukk doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let fetcher = YtDlpMetadataFetcher::new();
    let spinner = Output::spinner("Fetching metadata...");
    let record = match fetcher.fetch(url).await {
        Ok(record) => {
            spinner.finish_and_clear();
            record
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    };

    Output::header(&record.title);
    Output::kv("URL", &record.url);
    Output::kv("ID", &record.id);
    if let Some(channel) = &record.channel {
        Output::kv("Channel", channel);
    }
    if let Some(date) = record.upload_date_parsed() {
        Output::kv("Uploaded", &date.format("%Y-%m-%d").to_string());
    }
    Output::kv("Duration", &record.format_duration());
    if let Some(views) = record.view_count {
        Output::kv("Views", &views.to_string());
    }
    if let Some(likes) = record.like_count {
        Output::kv("Likes", &likes.to_string());
    }
    if let Some(description) = &record.description {
        println!("\n{}", description);
    }

    Ok(())
}
