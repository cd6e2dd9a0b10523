//! Configuration module for Plukk.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{AssistantPrompts, Prompts, RankingPrompts};
pub use settings::{
    GeneralSettings, ModelSettings, PromptSettings, RankingSettings, SearchSettings, Settings,
};
