//! Domain models: directions, grid positions, placed words and the stored word-search document.

use serde::{Deserialize, Serialize};

/// Square letter matrix, indexed `grid[row][col]`.
pub type Grid = Vec<Vec<char>>;

/// Stepping pattern used to walk a word across the grid.
/// Diagonal means down-right only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
  Horizontal,
  Vertical,
  Diagonal,
}

impl Direction {
  pub const ALL: [Direction; 3] = [Direction::Horizontal, Direction::Vertical, Direction::Diagonal];

  /// Per-step (row, col) delta.
  pub fn delta(self) -> (usize, usize) {
    match self {
      Direction::Horizontal => (0, 1),
      Direction::Vertical => (1, 0),
      Direction::Diagonal => (1, 1),
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Direction::Horizontal => "horizontal",
      Direction::Vertical => "vertical",
      Direction::Diagonal => "diagonal",
    }
  }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

/// A word that made it into the grid, with the cells it occupies in reading order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedWord {
  pub word: String,
  pub positions: Vec<Position>,
  pub direction: Direction,
}

/// Entry of the public word list shown to the player.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
  pub word: String,
  #[serde(default)] pub found: bool,
}

/// The puzzle document persisted alongside game metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WordSearchJson {
  pub grid: Grid,
  pub words: Vec<WordEntry>,
  pub grid_size: usize,
  pub time_limit: u32,
  pub lives: u32,
  pub max_lives: u32,
  pub directions: Vec<Direction>,
  pub placed_words: Vec<PlacedWord>,
}

/// Stored game record held by the in-memory store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
  pub id: String,
  pub name: String,
  #[serde(default)] pub description: Option<String>,
  pub is_published: bool,
  pub game_json: WordSearchJson,
}
