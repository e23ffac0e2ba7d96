//! Application state: in-memory game store, resolved defaults and generator tuning.
//!
//! This module owns:
//!   - the game store (by id) and the name index used for uniqueness checks
//!   - the defaults applied to create requests (from TOML or built in)
//!   - the generator attempt bound
//!
//! Games listed in the config bank are generated and published when the state is built.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::config::{load_config_from_env, GameCfg, GameDefaults, WordSearchConfig};
use crate::domain::{Game, WordEntry, WordSearchJson};
use crate::error::GameError;
use crate::generator::{generate_grid, GeneratedGrid, GenerationParams};
use crate::protocol::GameSettings;
use crate::util::normalize_word;

#[derive(Clone)]
pub struct AppState {
    pub by_id: Arc<RwLock<HashMap<String, Game>>>,
    pub by_name: Arc<RwLock<HashMap<String, String>>>,
    pub defaults: GameDefaults,
    pub max_attempts: usize,
}

impl AppState {
    /// Build state from env: load config (or defaults) and seed the bank.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::with_config(load_config_from_env().unwrap_or_default())
    }

    #[instrument(level = "info", skip_all, fields(bank = cfg.games.len()))]
    pub fn with_config(cfg: WordSearchConfig) -> Self {
        let mut id_map = HashMap::<String, Game>::new();
        let mut name_map = HashMap::<String, String>::new();

        for gc in &cfg.games {
            let settings = bank_settings(gc, &cfg.defaults);
            if let Err(e) = settings.validate() {
                error!(target: "wordsearch_backend", name = %gc.name, error = %e, "Skipping bank game: invalid settings.");
                continue;
            }
            if name_map.contains_key(&settings.name) {
                error!(target: "wordsearch_backend", name = %settings.name, "Skipping bank game: duplicate name.");
                continue;
            }

            let generated = generate_puzzle(&settings, cfg.generator.max_attempts);
            let game = Game {
                id: Uuid::new_v4().to_string(),
                name: settings.name.clone(),
                description: settings.description.clone(),
                is_published: settings.is_published,
                game_json: build_document(&settings, generated),
            };
            info!(
                target: "wordsearch_backend",
                id = %game.id,
                name = %game.name,
                placed = game.game_json.placed_words.len(),
                "Loaded bank game"
            );
            name_map.insert(game.name.clone(), game.id.clone());
            id_map.insert(game.id.clone(), game);
        }

        info!(target: "wordsearch_backend", games = id_map.len(), grid_size = cfg.defaults.grid_size, max_attempts = cfg.generator.max_attempts, "Word-search state ready");

        Self {
            by_id: Arc::new(RwLock::new(id_map)),
            by_name: Arc::new(RwLock::new(name_map)),
            defaults: cfg.defaults,
            max_attempts: cfg.generator.max_attempts,
        }
    }

    /// Store a freshly created game. The name check and the insert share one pair of
    /// write guards, so concurrent creates cannot claim the same name.
    #[instrument(level = "debug", skip(self, g), fields(id = %g.id))]
    pub async fn insert_new_game(&self, g: Game) -> Result<(), GameError> {
        let mut by_id = self.by_id.write().await;
        let mut by_name = self.by_name.write().await;
        if by_name.contains_key(&g.name) {
            return Err(GameError::NameTaken(g.name));
        }
        by_name.insert(g.name.clone(), g.id.clone());
        by_id.insert(g.id.clone(), g);
        Ok(())
    }

    /// Apply `f` to a stored game while holding the write guards.
    /// Fails with `NotFound` if the game is gone and `NameTaken` if the edited name
    /// belongs to another game; in both cases nothing is written.
    #[instrument(level = "debug", skip(self, f), fields(%id))]
    pub async fn modify_game<T, F>(&self, id: &str, f: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut Game) -> Result<T, GameError>,
    {
        let mut by_id = self.by_id.write().await;
        let mut by_name = self.by_name.write().await;

        let mut next = by_id.get(id).cloned().ok_or(GameError::NotFound)?;
        let old_name = next.name.clone();
        let out = f(&mut next)?;

        if let Some(owner) = by_name.get(&next.name) {
            if owner != id {
                return Err(GameError::NameTaken(next.name));
            }
        }
        if old_name != next.name {
            by_name.remove(&old_name);
        }
        by_name.insert(next.name.clone(), id.to_string());
        by_id.insert(id.to_string(), next);
        Ok(out)
    }

    /// Read-only access to a game by id.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_game(&self, id: &str) -> Option<Game> {
        let by_id = self.by_id.read().await;
        by_id.get(id).cloned()
    }

    /// Id of the game currently using `name`, if any.
    pub async fn name_owner(&self, name: &str) -> Option<String> {
        self.by_name.read().await.get(name).cloned()
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn remove_game(&self, id: &str) -> Option<Game> {
        let mut by_id = self.by_id.write().await;
        let removed = by_id.remove(id)?;
        self.by_name.write().await.remove(&removed.name);
        debug!(target: "wordsearch_backend", %id, "Game removed");
        Some(removed)
    }

    pub async fn game_count(&self) -> usize {
        self.by_id.read().await.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(WordSearchConfig::default())
    }
}

fn bank_settings(gc: &GameCfg, defaults: &GameDefaults) -> GameSettings {
    GameSettings {
        name: gc.name.trim().to_string(),
        description: gc.description.clone(),
        words: gc.words.iter().map(|w| w.trim().to_string()).collect(),
        grid_size: gc.grid_size.unwrap_or(defaults.grid_size),
        time_limit: gc.time_limit.unwrap_or(defaults.time_limit),
        lives: gc.lives.unwrap_or(defaults.lives),
        directions: gc.directions.clone().unwrap_or_else(|| defaults.directions.clone()),
        is_published: true,
    }
}

/// Run the generator for a settings snapshot with a fresh thread-local RNG.
pub fn generate_puzzle(settings: &GameSettings, max_attempts: usize) -> GeneratedGrid {
    let params = GenerationParams {
        words: settings.words.clone(),
        grid_size: settings.grid_size,
        directions: settings.directions.clone(),
        max_attempts,
    };
    generate_grid(&params, &mut rand::thread_rng())
}

/// Assemble the stored document from settings and a generation result.
pub fn build_document(settings: &GameSettings, generated: GeneratedGrid) -> WordSearchJson {
    WordSearchJson {
        grid: generated.grid,
        words: settings
            .words
            .iter()
            .map(|w| WordEntry { word: normalize_word(w), found: false })
            .collect(),
        grid_size: settings.grid_size,
        time_limit: settings.time_limit,
        lives: settings.lives,
        max_lives: settings.lives,
        directions: settings.directions.clone(),
        placed_words: generated.placed_words,
    }
}
