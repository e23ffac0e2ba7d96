//! Errors surfaced by the game handlers. Generation and scoring themselves never fail.

use thiserror::Error;

use crate::protocol::{GRID_SIZE_MAX, GRID_SIZE_MIN, LIVES_MAX, LIVES_MIN, TIME_LIMIT_MAX, TIME_LIMIT_MIN};

/// Boundary checks on incoming game settings and submissions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("name must be 1-{max} characters")]
    NameLength { max: usize },
    #[error("description must be at most {max} characters")]
    DescriptionLength { max: usize },
    #[error("at most {max} words are allowed, got {got}")]
    TooManyWords { max: usize, got: usize },
    #[error("word {word:?} must be {min}-{max} characters")]
    WordLength { word: String, min: usize, max: usize },
    #[error("word {word:?} may only contain letters and spaces")]
    NonLetter { word: String },
    #[error("grid size {0} is outside {}-{}", GRID_SIZE_MIN, GRID_SIZE_MAX)]
    GridSize(usize),
    #[error("grid size {grid_size} is smaller than word {word:?}")]
    GridTooSmall { word: String, grid_size: usize },
    #[error("time limit {0}s is outside {}-{}", TIME_LIMIT_MIN, TIME_LIMIT_MAX)]
    TimeLimit(u32),
    #[error("lives {0} is outside {}-{}", LIVES_MIN, LIVES_MAX)]
    Lives(u32),
    #[error("at least one direction is required")]
    NoDirections,
    #[error("time taken must be a non-negative number")]
    TimeTaken,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game not found")]
    NotFound,
    #[error("game name {0:?} is already used")]
    NameTaken(String),
    #[error("invalid request: {0}")]
    Invalid(#[from] ValidationError),
}
