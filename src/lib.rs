//! Word Search · Puzzle Backend
//!
//! - Grid generation: best-effort word placement + random A-Z fill (`generator`)
//! - Answer checking and 0-100 scoring (`scoring`)
//! - In-process game handlers over an in-memory store (`logic`, `state`)
//!
//! Important env variables:
//!   WORDSEARCH_CONFIG_PATH : path to TOML config (defaults + generator tuning + optional game bank)
//!   LOG_LEVEL              : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT             : "pretty" (default) or "json"

pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod logic;
pub mod protocol;
pub mod scoring;
pub mod state;
pub mod telemetry;
pub mod util;

pub use domain::{Direction, Game, Grid, PlacedWord, Position, WordEntry, WordSearchJson};
pub use error::{GameError, ValidationError};
pub use generator::{generate_grid, GeneratedGrid, GenerationParams, MAX_PLACEMENT_ATTEMPTS};
pub use scoring::{calculate_score, check_answer, AnswerReport, AnswerSubmission, ScoreBreakdown};
pub use state::AppState;
pub use util::normalize_word;
