//! CLI module for Plukk.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Plukk - YouTube Search and Rank Agent
///
/// A CLI tool that searches YouTube for videos on a topic and uses an LLM
/// to pick the best results. The name "Plukk" comes from the Norwegian word
/// for "pick."
#[derive(Parser, Debug)]
#[command(name = "plukk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search YouTube for a topic and rank the best videos
    Find {
        /// The topic to search for
        topic: String,

        /// Number of candidate videos to search for
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// LLM model to use for both the assistant and ranking steps
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Fetch and show metadata for a single video
    Info {
        /// YouTube URL or video ID
        url: String,
    },

    /// Fetch and print a video transcript
    Transcript {
        /// YouTube URL or video ID
        url: String,

        /// Caption language code
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "model.ranking")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Show configuration file path
    Path,
}
