use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use parley_core::rules::{RuleDef, RuleSet};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    /// Custom rule table; empty means use the built-in one. Definitions
    /// are compiled and validated when the table is built.
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BotConfig {
    #[serde(default = "BotConfig::default_name")]
    pub name: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
        }
    }
}

impl BotConfig {
    fn default_name() -> String {
        "NLP ChatBot".to_string()
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'parley init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Load the config, falling back to defaults when no file exists.
    ///
    /// The chatbot is fully functional without configuration; only a
    /// malformed file is an error.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let config = Self::load()?;
            info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            info!("No config file, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Compile the configured rule table, or the built-in one when the
    /// config defines no rules.
    pub fn rule_set(&self) -> anyhow::Result<RuleSet> {
        let rules = if self.rules.is_empty() {
            RuleSet::builtin()?
        } else {
            RuleSet::from_defs(&self.rules)?
        };
        Ok(rules)
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("parley");
        Ok(config_dir.join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("parley");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "bot": {
    "name": "NLP ChatBot"
  },
  "rules": [
    {
      "pattern": "i need (.*)",
      "responses": [
        "Why do you need %1?",
        "Would getting %1 really help you?"
      ]
    }
  ]
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Edit the rules array to customize patterns and responses");
        println!("   2. Run 'parley chat' to start a conversation");
        println!();
        println!("Notes:");
        println!("   - Rules match in order; the first matching pattern wins");
        println!("   - %1..%9 in a response expand to reflected capture groups");
        println!("   - A catch-all rule is appended automatically if missing");
        println!();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.bot.name, "NLP ChatBot");
        assert!(config.rules.is_empty());
        assert!(config.rule_set().unwrap().len() > 1);
    }

    #[test]
    fn custom_rules_replace_the_builtin_table() {
        let config: Config = serde_json::from_str(
            r#"{"rules": [{"pattern": "ping", "responses": ["pong"]}]}"#,
        )
        .unwrap();
        // Custom rule plus the auto-appended catch-all.
        assert_eq!(config.rule_set().unwrap().len(), 2);
    }

    #[test]
    fn invalid_rule_regex_fails_at_build_time() {
        let config: Config = serde_json::from_str(
            r#"{"rules": [{"pattern": "([oops", "responses": ["x"]}]}"#,
        )
        .unwrap();
        let err = config.rule_set().unwrap_err();
        assert!(err.to_string().contains("([oops"));
    }
}
