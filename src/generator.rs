//! Word-search grid generation: placement engine and noise filler.
//!
//! Flow:
//! 1) Words are normalized and sorted longest-first (stable), since long words are
//!    hardest to fit and the grid is emptiest at the start.
//! 2) Each word gets up to `max_attempts` tries. A try picks a random allowed direction,
//!    then a random start inside the range where the word fits fully, then walks the
//!    cells checking that each is empty or already holds the same letter.
//! 3) Words that never fit are dropped with a warning; generation itself never fails.
//! 4) Every untouched cell is filled with a uniformly random A-Z letter.
//!
//! The random source is passed in so tests can seed it.

use std::cmp::Reverse;

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument, warn};

use crate::domain::{Direction, Grid, PlacedWord, Position};
use crate::util::normalize_word;

/// Per-word retry bound.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

const FILL_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Debug)]
pub struct GenerationParams {
  pub words: Vec<String>,
  pub grid_size: usize,
  pub directions: Vec<Direction>,
  pub max_attempts: usize,
}

impl GenerationParams {
  pub fn new(words: Vec<String>, grid_size: usize, directions: Vec<Direction>) -> Self {
    Self { words, grid_size, directions, max_attempts: MAX_PLACEMENT_ATTEMPTS }
  }
}

/// Output of one generation pass.
#[derive(Clone, Debug)]
pub struct GeneratedGrid {
  pub grid: Grid,
  /// In placement order (longest word first).
  pub placed_words: Vec<PlacedWord>,
  /// Normalized words that could not be placed.
  pub dropped_words: Vec<String>,
}

/// Grid under construction. `None` marks a cell no word has claimed yet.
#[derive(Clone, Debug)]
pub struct Board {
  size: usize,
  cells: Vec<Vec<Option<char>>>,
}

impl Board {
  pub fn new(size: usize) -> Self {
    Self { size, cells: vec![vec![None; size]; size] }
  }

  pub fn size(&self) -> usize {
    self.size
  }

  /// Letter at `pos`, or `None` for an empty or out-of-bounds cell.
  pub fn get(&self, pos: Position) -> Option<char> {
    self.cells.get(pos.row).and_then(|r| r.get(pos.col)).copied().flatten()
  }

  fn in_bounds(&self, pos: Position) -> bool {
    pos.row < self.size && pos.col < self.size
  }
}

/// Run a full generation pass: place every word best-effort, then fill the rest.
#[instrument(level = "debug", skip(params, rng), fields(words = params.words.len(), grid_size = params.grid_size))]
pub fn generate_grid<R: Rng + ?Sized>(params: &GenerationParams, rng: &mut R) -> GeneratedGrid {
  let mut board = Board::new(params.grid_size);

  let mut words: Vec<String> = params.words.iter().map(|w| normalize_word(w)).collect();
  words.sort_by_key(|w| Reverse(w.chars().count()));

  let mut placed_words = Vec::with_capacity(words.len());
  let mut dropped_words = Vec::new();

  for word in words {
    let letters: Vec<char> = word.chars().collect();
    let mut placement = None;

    for attempt in 0..params.max_attempts {
      let Some(&direction) = params.directions.choose(rng) else { break };
      if let Some(positions) = place_word(&mut board, &letters, direction, rng) {
        debug!(%word, direction = direction.as_str(), attempt, "Placed word");
        placement = Some((positions, direction));
        break;
      }
    }

    match placement {
      Some((positions, direction)) => placed_words.push(PlacedWord { word, positions, direction }),
      None => {
        warn!(%word, grid_size = params.grid_size, "Failed to place word");
        dropped_words.push(word);
      }
    }
  }

  let grid = fill_empty_cells(board, rng);
  GeneratedGrid { grid, placed_words, dropped_words }
}

/// One placement attempt along `direction` from a start drawn uniformly over the
/// range where the word fits. Returns `None` when the word cannot fit at all in this
/// direction or collides with a different letter.
pub fn place_word<R: Rng + ?Sized>(
  board: &mut Board,
  word: &[char],
  direction: Direction,
  rng: &mut R,
) -> Option<Vec<Position>> {
  let span = word.len().checked_sub(1)?;
  let (d_row, d_col) = direction.delta();

  let max_start_row = board.size().checked_sub(1 + span * d_row)?;
  let max_start_col = board.size().checked_sub(1 + span * d_col)?;

  let start = Position {
    row: rng.gen_range(0..=max_start_row),
    col: rng.gen_range(0..=max_start_col),
  };
  try_place_at(board, word, start, direction)
}

/// Deterministic placement at a fixed start. Every cell is bounds-checked and must be
/// empty or already hold the same letter; the board is only written when all cells pass.
pub fn try_place_at(
  board: &mut Board,
  word: &[char],
  start: Position,
  direction: Direction,
) -> Option<Vec<Position>> {
  if word.is_empty() {
    return None;
  }
  let (d_row, d_col) = direction.delta();

  let mut positions = Vec::with_capacity(word.len());
  for (i, &letter) in word.iter().enumerate() {
    let pos = Position {
      row: start.row.checked_add(d_row * i)?,
      col: start.col.checked_add(d_col * i)?,
    };
    if !board.in_bounds(pos) {
      return None;
    }
    match board.get(pos) {
      Some(existing) if existing != letter => return None,
      _ => positions.push(pos),
    }
  }

  for (pos, &letter) in positions.iter().zip(word) {
    board.cells[pos.row][pos.col] = Some(letter);
  }
  Some(positions)
}

/// Replace every empty cell with a uniformly random A-Z letter and freeze the board.
pub fn fill_empty_cells<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Grid {
  board
    .cells
    .into_iter()
    .map(|row| {
      row.into_iter()
        .map(|cell| cell.unwrap_or_else(|| FILL_LETTERS[rng.gen_range(0..FILL_LETTERS.len())] as char))
        .collect()
    })
    .collect()
}
