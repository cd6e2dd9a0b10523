//! Configuration settings for Plukk.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub model: ModelSettings,
    pub search: SearchSettings,
    pub ranking: RankingSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// LLM model selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Model for the tool-calling assistant step.
    pub assistant: String,
    /// Model for the final ranking step.
    pub ranking: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            assistant: "gpt-4o-mini".to_string(),
            ranking: "gpt-4o-mini".to_string(),
        }
    }
}

/// YouTube search and metadata-fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Number of candidate videos to search for.
    pub result_count: usize,
    /// Maximum concurrent metadata fetches during fan-out.
    pub max_concurrent_fetches: usize,
    /// Transcript language for the transcript command.
    pub transcript_language: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_count: 10,
            max_concurrent_fetches: 4,
            transcript_language: "en".to_string(),
        }
    }
}

/// Ranking criteria settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Number of videos the model should pick.
    pub pick_count: usize,
    /// Maximum acceptable video duration in hours.
    pub max_duration_hours: u32,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            pick_count: 4,
            max_duration_hours: 5,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PlukkError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("plukk")
            .join("config.toml")
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.search.result_count, 10);
        assert_eq!(settings.ranking.pick_count, 4);
        assert_eq!(settings.ranking.max_duration_hours, 5);
        assert!(settings.search.max_concurrent_fetches > 0);
    }

    #[test]
    fn test_partial_config_parses() {
        let settings: Settings = toml::from_str(
            r#"
            [search]
            result_count = 5
            "#,
        )
        .unwrap();
        assert_eq!(settings.search.result_count, 5);
        // Everything else falls back to defaults
        assert_eq!(settings.ranking.pick_count, 4);
        assert_eq!(settings.model.assistant, "gpt-4o-mini");
    }
}
