//! Game handlers: the create/update/detail/play/answer/delete operations callers invoke in-process.
//!
//! This includes:
//!   - Creating a puzzle (validate, name check, generate, store)
//!   - Updating metadata, regenerating when words, size or directions change
//!   - Serving the creator detail and the player view (no placement data)
//!   - Checking a player's answers against the stored placement

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::Game;
use crate::error::GameError;
use crate::protocol::{
  to_play_view, validate_submission, AnswerOut, CreateWordSearch, GameCreated, GameSettings, PlayView,
  UpdateWordSearch,
};
use crate::scoring::{check_answer as score_answers, AnswerSubmission};
use crate::state::{build_document, generate_puzzle, AppState};
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state, req), fields(name = %trunc_for_log(&req.name, 40), words = req.words.len()))]
pub async fn create_word_search(state: &AppState, req: CreateWordSearch) -> Result<GameCreated, GameError> {
  let settings = req.into_settings(&state.defaults);
  settings.validate()?;

  // Fast path only; the authoritative check happens under the store's write guards.
  if state.name_owner(&settings.name).await.is_some() {
    return Err(GameError::NameTaken(settings.name));
  }

  let generated = generate_puzzle(&settings, state.max_attempts);
  let dropped_words = generated.dropped_words.clone();
  let game = Game {
    id: Uuid::new_v4().to_string(),
    name: settings.name.clone(),
    description: settings.description.clone(),
    is_published: settings.is_published,
    game_json: build_document(&settings, generated),
  };
  let created = GameCreated {
    id: game.id.clone(),
    placed_words: game.game_json.placed_words.len(),
    dropped_words,
  };

  state.insert_new_game(game).await?;
  if !created.dropped_words.is_empty() {
    warn!(target: "wordsearch_backend", id = %created.id, dropped = ?created.dropped_words, "Puzzle created with missing words");
  }
  info!(target: "wordsearch_backend", id = %created.id, placed = created.placed_words, "Word search created");
  Ok(created)
}

/// Full record, including placement data, for the creator.
#[instrument(level = "info", skip(state), fields(%game_id))]
pub async fn get_word_search_detail(state: &AppState, game_id: &str) -> Result<Game, GameError> {
  state.get_game(game_id).await.ok_or(GameError::NotFound)
}

/// Edit a stored game. The edit runs under the store's write guards, so it cannot
/// resurrect a concurrently deleted game or overwrite a concurrent edit.
#[instrument(level = "info", skip(state, req), fields(%game_id, regenerate = req.touches_puzzle()))]
pub async fn update_word_search(
  state: &AppState,
  game_id: &str,
  req: UpdateWordSearch,
) -> Result<GameCreated, GameError> {
  let regenerate = req.touches_puzzle();
  let max_attempts = state.max_attempts;
  let out = state.modify_game(game_id, |game| apply_update(game, &req, max_attempts)).await?;
  info!(target: "wordsearch_backend", id = %out.id, %regenerate, placed = out.placed_words, "Word search updated");
  Ok(out)
}

fn apply_update(game: &mut Game, req: &UpdateWordSearch, max_attempts: usize) -> Result<GameCreated, GameError> {
  let old = &game.game_json;
  let settings = GameSettings {
    name: req.name.as_deref().map(str::trim).unwrap_or(game.name.as_str()).to_string(),
    description: req.description.as_deref().map(|d| d.trim().to_string()).or_else(|| game.description.clone()),
    words: req
      .words
      .as_ref()
      .map(|ws| ws.iter().map(|w| w.trim().to_string()).collect())
      .unwrap_or_else(|| old.words.iter().map(|w| w.word.clone()).collect()),
    grid_size: req.grid_size.unwrap_or(old.grid_size),
    time_limit: req.time_limit.unwrap_or(old.time_limit),
    lives: req.lives.unwrap_or(old.lives),
    directions: req.directions.clone().unwrap_or_else(|| old.directions.clone()),
    is_published: req.is_publish.unwrap_or(game.is_published),
  };
  settings.validate()?;

  let mut dropped_words = Vec::new();
  if req.touches_puzzle() {
    let generated = generate_puzzle(&settings, max_attempts);
    dropped_words = generated.dropped_words.clone();
    game.game_json = build_document(&settings, generated);
  } else {
    let doc = &mut game.game_json;
    doc.time_limit = settings.time_limit;
    if let Some(lives) = req.lives {
      doc.lives = lives;
      doc.max_lives = lives;
    }
  }

  game.name = settings.name;
  game.description = settings.description;
  game.is_published = settings.is_published;

  Ok(GameCreated {
    id: game.id.clone(),
    placed_words: game.game_json.placed_words.len(),
    dropped_words,
  })
}

/// Player view. Public access only sees published games.
#[instrument(level = "info", skip(state), fields(%game_id, %is_public))]
pub async fn get_word_search_play(state: &AppState, game_id: &str, is_public: bool) -> Result<PlayView, GameError> {
  match state.get_game(game_id).await {
    Some(g) if g.is_published || !is_public => Ok(to_play_view(&g)),
    _ => Err(GameError::NotFound),
  }
}

#[instrument(level = "info", skip(state, submission), fields(%game_id, claims = submission.found_words.len()))]
pub async fn check_answer(
  state: &AppState,
  game_id: &str,
  submission: AnswerSubmission,
) -> Result<AnswerOut, GameError> {
  validate_submission(&submission)?;
  let game = state.get_game(game_id).await.ok_or(GameError::NotFound)?;
  let doc = &game.game_json;

  let report = score_answers(&doc.placed_words, doc.time_limit, doc.max_lives, &submission);
  info!(
    target: "wordsearch_backend",
    id = %game_id,
    correct = report.correct_answers,
    incorrect = report.incorrect_answers,
    score = report.score,
    "Answer checked"
  );
  Ok(AnswerOut { game_id: game.id, report })
}

#[instrument(level = "info", skip(state), fields(%game_id))]
pub async fn delete_word_search(state: &AppState, game_id: &str) -> Result<String, GameError> {
  state.remove_game(game_id).await.map(|g| g.id).ok_or(GameError::NotFound)
}
