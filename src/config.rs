//! Loading word-search configuration (defaults + generator tuning + optional game bank) from TOML.
//!
//! See `WordSearchConfig` for the expected schema. Every section is optional.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Direction;
use crate::generator::MAX_PLACEMENT_ATTEMPTS;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct WordSearchConfig {
  #[serde(default)]
  pub defaults: GameDefaults,
  #[serde(default)]
  pub generator: GeneratorCfg,
  #[serde(default)]
  pub games: Vec<GameCfg>,
}

/// Values used when a create request (or a regeneration) leaves a setting out.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GameDefaults {
  pub grid_size: usize,
  pub time_limit: u32,
  pub lives: u32,
  pub directions: Vec<Direction>,
}

impl Default for GameDefaults {
  fn default() -> Self {
    Self {
      grid_size: 15,
      time_limit: 480,
      lives: 5,
      directions: Direction::ALL.to_vec(),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneratorCfg {
  /// Placement tries per word before it is dropped.
  pub max_attempts: usize,
}

impl Default for GeneratorCfg {
  fn default() -> Self {
    Self { max_attempts: MAX_PLACEMENT_ATTEMPTS }
  }
}

/// Game entry accepted in the TOML bank. Generated and published at startup.
#[derive(Clone, Debug, Deserialize)]
pub struct GameCfg {
  pub name: String,
  #[serde(default)] pub description: Option<String>,
  pub words: Vec<String>,
  #[serde(default)] pub grid_size: Option<usize>,
  #[serde(default)] pub time_limit: Option<u32>,
  #[serde(default)] pub lives: Option<u32>,
  #[serde(default)] pub directions: Option<Vec<Direction>>,
}

pub fn parse_config(s: &str) -> Result<WordSearchConfig, toml::de::Error> {
  toml::from_str::<WordSearchConfig>(s)
}

/// Attempt to load `WordSearchConfig` from WORDSEARCH_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<WordSearchConfig> {
  let path = std::env::var("WORDSEARCH_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "wordsearch_backend", %path, bank = cfg.games.len(), "Loaded word-search config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "wordsearch_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "wordsearch_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_config_uses_defaults() {
    let cfg = parse_config("").unwrap();
    assert_eq!(cfg.defaults.grid_size, 15);
    assert_eq!(cfg.defaults.time_limit, 480);
    assert_eq!(cfg.defaults.lives, 5);
    assert_eq!(cfg.defaults.directions, Direction::ALL.to_vec());
    assert_eq!(cfg.generator.max_attempts, 100);
    assert!(cfg.games.is_empty());
  }

  #[test]
  fn test_partial_sections_and_bank() {
    let cfg = parse_config(
      r#"
        [defaults]
        grid_size = 12
        directions = ["horizontal"]

        [generator]
        max_attempts = 250

        [[games]]
        name = "Animals"
        words = ["cat", "dog"]
        grid_size = 10
      "#,
    )
    .unwrap();
    assert_eq!(cfg.defaults.grid_size, 12);
    assert_eq!(cfg.defaults.lives, 5);
    assert_eq!(cfg.defaults.directions, vec![Direction::Horizontal]);
    assert_eq!(cfg.generator.max_attempts, 250);
    assert_eq!(cfg.games.len(), 1);
    assert_eq!(cfg.games[0].grid_size, Some(10));
    assert!(cfg.games[0].directions.is_none());
  }

  #[test]
  fn test_unknown_direction_is_rejected() {
    assert!(parse_config("[defaults]\ndirections = [\"up\"]\n").is_err());
  }
}
