//! Find command - run the full search-and-rank workflow.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::{Outcome, Pipeline};
use anyhow::Result;

/// Run the find command.
pub async fn run_find(
    topic: &str,
    count: Option<usize>,
    model: Option<String>,
    mut settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Find) {
        Output::error(&format!("{}", e));
        Output::info("Run 'plukk doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    // CLI flags override configuration
    if let Some(count) = count {
        settings.search.result_count = count;
    }
    if let Some(model) = model {
        settings.model.assistant = model.clone();
        settings.model.ranking = model;
    }

    let pipeline = Pipeline::new(settings)?;

    match pipeline.run(topic).await {
        Ok(Outcome::DirectAnswer(answer)) => {
            println!("\n{}\n", answer);
            Output::info("The assistant answered without searching.");
        }
        Ok(Outcome::Ranked(outcome)) => {
            println!("\n{}\n", outcome.best);

            Output::header(&format!("Processed videos ({})", outcome.records.len()));
            for record in &outcome.records {
                Output::list_item(&format!(
                    "{} ({}, {} views)",
                    record.title,
                    record.format_duration(),
                    record
                        .view_count
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "?".to_string()),
                ));
            }

            if !outcome.failures.is_empty() {
                println!();
                Output::warning(&format!(
                    "{} video(s) could not be fetched and were excluded:",
                    outcome.failures.len()
                ));
                for failure in &outcome.failures {
                    Output::list_item(&failure.url);
                }
            }
        }
        Err(e) => {
            Output::error(&format!("Workflow failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
