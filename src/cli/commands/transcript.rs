//! Transcript command - fetch and print a video transcript.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::youtube::TranscriptFetcher;
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(
    url: &str,
    language: Option<String>,
    settings: Settings,
) -> Result<()> {
    preflight::check(Operation::Transcript)?;

    let language = language.unwrap_or(settings.search.transcript_language);
    let fetcher = TranscriptFetcher::with_language(&language);

    let spinner = Output::spinner("Fetching transcript...");
    let transcript = fetcher.fetch(url).await;
    spinner.finish_and_clear();

    match transcript {
        Some(text) => {
            println!("{}", text);
        }
        None => {
            // Missing captions are a normal condition, not an error
            Output::warning(&format!("No transcript available for {}", url));
        }
    }

    Ok(())
}
