//! Plukk - YouTube Search and Rank Agent
//!
//! A CLI tool that searches YouTube for videos on a topic and uses an LLM
//! to pick the best results.
//!
//! The name "Plukk" comes from the Norwegian word for "pick."
//!
//! # Overview
//!
//! Plukk runs a small agentic workflow:
//! - An LLM assistant decides whether to search YouTube or answer directly
//! - A search tool returns candidate video URLs
//! - Metadata for every candidate is fetched concurrently
//! - The LLM ranks the candidates by views, likes, and duration
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and prompt template management
//! - `agent` - The tool-calling assistant step
//! - `youtube` - Search, metadata, and transcript collaborators
//! - `extract` - Strict URL list extraction from tool output
//! - `rank` - The final LLM ranking step
//! - `pipeline` - Workflow coordination (fan-out, join, routing)
//!
//! # Example
//!
//! ```rust,no_run
//! use plukk::config::Settings;
//! use plukk::pipeline::{Outcome, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(settings)?;
//!
//!     match pipeline.run("graph algorithms tutorials").await? {
//!         Outcome::Ranked(outcome) => println!("{}", outcome.best),
//!         Outcome::DirectAnswer(answer) => println!("{}", answer),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod openai;
pub mod pipeline;
pub mod rank;
pub mod youtube;

pub use error::{PlukkError, Result};
