//! Prompt templates for Plukk.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub assistant: AssistantPrompts,
    pub ranking: RankingPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}

/// Prompts for the tool-calling assistant step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantPrompts {
    pub system: String,
    pub search_request: String,
}

impl Default for AssistantPrompts {
    fn default() -> Self {
        Self {
            system: "You are a helpful YouTube assistant that helps with searching videos, \
                     especially on topics related to computer science. When the user asks \
                     for videos on a topic, use the yt_search tool to find candidates."
                .to_string(),

            search_request: r#"Search at least {{count}} YouTube videos for the search string below.

{{topic}}"#
                .to_string(),
        }
    }
}

/// Prompts for the final ranking step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingPrompts {
    pub user: String,
}

impl Default for RankingPrompts {
    fn default() -> Self {
        Self {
            user: r#"We now have metadata from processing YouTube videos. Based on the metadata below, return the YouTube links for the best {{pick_count}} videos. They must not be Shorts.

Selection criteria:
1. view count
2. like count
3. video duration, which must not be more than {{max_hours}} hours

Below is the video metadata:

{{metadata}}"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let assistant_path = custom_path.join("assistant.toml");
            if assistant_path.exists() {
                let content = std::fs::read_to_string(&assistant_path)?;
                prompts.assistant = toml::from_str(&content)?;
            }

            let ranking_path = custom_path.join("ranking.toml");
            if ranking_path.exists() {
                let content = std::fs::read_to_string(&ranking_path)?;
                prompts.ranking = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.assistant.system.is_empty());
        assert!(prompts.ranking.user.contains("{{metadata}}"));
    }

    #[test]
    fn test_render_template() {
        let template = "Search at least {{count}} videos for {{topic}}.";
        let mut vars = std::collections::HashMap::new();
        vars.insert("count".to_string(), "10".to_string());
        vars.insert("topic".to_string(), "graph algorithms".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Search at least 10 videos for graph algorithms.");
    }
}
