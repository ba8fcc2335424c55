use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE_NAME: &str = ".blackjack.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rule: ConfigRule,
}

/// Table rules as written in the config file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRule {
    pub number_of_decks: u8,
    pub blackjack_payout: f64,
    pub allow_surrender: bool,
    pub dealer_hit_on_soft17: bool,
    pub dealer_peek: bool,
    pub dealer_always_plays_out: bool,
    pub natural_blackjack_on_split: bool,
    pub allow_das: bool,
    pub hit_split_aces: bool,
    pub double_split_aces: bool,
}

impl Default for ConfigRule {
    fn default() -> Self {
        blackjack_ev::Rule::default().into()
    }
}

impl From<blackjack_ev::Rule> for ConfigRule {
    fn from(rule: blackjack_ev::Rule) -> Self {
        ConfigRule {
            number_of_decks: rule.number_of_decks,
            blackjack_payout: rule.blackjack_payout,
            allow_surrender: rule.allow_surrender,
            dealer_hit_on_soft17: rule.dealer_hit_on_soft17,
            dealer_peek: rule.dealer_peek,
            dealer_always_plays_out: rule.dealer_always_plays_out,
            natural_blackjack_on_split: rule.natural_blackjack_on_split,
            allow_das: rule.allow_das,
            hit_split_aces: rule.hit_split_aces,
            double_split_aces: rule.double_split_aces,
        }
    }
}

impl From<ConfigRule> for blackjack_ev::Rule {
    /// Out-of-range values are replaced with playable ones.
    fn from(config_rule: ConfigRule) -> Self {
        blackjack_ev::Rule {
            number_of_decks: config_rule.number_of_decks,
            blackjack_payout: config_rule.blackjack_payout,
            allow_surrender: config_rule.allow_surrender,
            dealer_hit_on_soft17: config_rule.dealer_hit_on_soft17,
            dealer_peek: config_rule.dealer_peek,
            dealer_always_plays_out: config_rule.dealer_always_plays_out,
            natural_blackjack_on_split: config_rule.natural_blackjack_on_split,
            allow_das: config_rule.allow_das,
            hit_split_aces: config_rule.hit_split_aces,
            double_split_aces: config_rule.double_split_aces,
        }
        .normalized()
    }
}

/// Parses the content of a config file.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    // An empty document is a valid config with every default.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file<P: AsRef<Path>>(filename: P) -> Result<Config, ConfigError> {
    let path = filename.as_ref();
    let file_content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&file_content)
}

/// `~/.blackjack.yml`, or `None` when the home directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home_dir| home_dir.join(DEFAULT_CONFIG_FILE_NAME))
}

/// Loads the rule from an explicit path, or from the default path when none
/// is given. Only a missing default file falls back to the default rule.
pub fn load_rule(explicit_path: Option<&Path>) -> Result<blackjack_ev::Rule, ConfigError> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                log::warn!("No config file found, using the default rule");
                return Ok(blackjack_ev::Rule::default());
            }
        },
    };

    log::info!("Loading config from {}", path.display());
    let config = parse_config_from_file(&path)?;
    Ok(config.rule.into())
}
