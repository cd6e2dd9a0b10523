//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, mut settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            set_key(&mut settings, key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
        }

        ConfigAction::Path => {
            let config_path = Settings::default_config_path();
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Apply a dotted-key assignment to the settings.
fn set_key(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "general.log_level" => settings.general.log_level = value.to_string(),
        "model.assistant" => settings.model.assistant = value.to_string(),
        "model.ranking" => settings.model.ranking = value.to_string(),
        "search.result_count" => settings.search.result_count = parse_value(key, value)?,
        "search.max_concurrent_fetches" => {
            settings.search.max_concurrent_fetches = parse_value(key, value)?
        }
        "search.transcript_language" => settings.search.transcript_language = value.to_string(),
        "ranking.pick_count" => settings.ranking.pick_count = parse_value(key, value)?,
        "ranking.max_duration_hours" => {
            settings.ranking.max_duration_hours = parse_value(key, value)?
        }
        _ => anyhow::bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_known_keys() {
        let mut settings = Settings::default();
        set_key(&mut settings, "model.ranking", "gpt-4o").unwrap();
        set_key(&mut settings, "search.result_count", "20").unwrap();
        assert_eq!(settings.model.ranking, "gpt-4o");
        assert_eq!(settings.search.result_count, 20);
    }

    #[test]
    fn test_set_unknown_key() {
        let mut settings = Settings::default();
        assert!(set_key(&mut settings, "nope.nothing", "x").is_err());
    }

    #[test]
    fn test_set_invalid_numeric_value() {
        let mut settings = Settings::default();
        assert!(set_key(&mut settings, "ranking.pick_count", "four").is_err());
    }
}
