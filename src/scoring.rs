//! Answer checking and score calculation for a played word search.
//!
//! Score = accuracy (50) + remaining time (30) + remaining lives (20), each part floored
//! at 0, the sum clamped to [0, 100] and rounded half-up.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::PlacedWord;
use crate::util::normalize_word;

pub const MAX_SCORE: u32 = 100;

const ACCURACY_WEIGHT: f64 = 50.0;
const TIME_WEIGHT: f64 = 30.0;
const LIVES_WEIGHT: f64 = 20.0;

/// What the player claims after a round. Time and lives are taken as reported.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnswerSubmission {
  #[serde(default)] pub found_words: Vec<String>,
  pub time_taken: f64,
  pub lives_remaining: u32,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct ScoreBreakdown {
  pub accuracy: f64,
  pub time: f64,
  pub lives: f64,
  pub total: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AnswerReport {
  pub total_words: usize,
  pub correct_answers: usize,
  pub incorrect_answers: usize,
  pub lives_remaining: u32,
  pub time_taken: f64,
  pub score: u32,
  pub max_score: u32,
  pub percentage: f64,
  pub breakdown: ScoreBreakdown,
  pub found_words: Vec<String>,
  pub missed_words: Vec<String>,
}

/// `part / whole`, or 0 when the whole is zero.
fn ratio(part: f64, whole: f64) -> f64 {
  if whole > 0.0 { part / whole } else { 0.0 }
}

pub fn calculate_score(
  total_words: usize,
  correct: usize,
  time_limit: u32,
  time_taken: f64,
  max_lives: u32,
  lives_remaining: u32,
) -> ScoreBreakdown {
  let accuracy = (ratio(correct as f64, total_words as f64) * ACCURACY_WEIGHT).max(0.0);

  let time_limit = f64::from(time_limit);
  let time = (ratio(time_limit - time_taken, time_limit).max(0.0) * TIME_WEIGHT).max(0.0);

  let lives = (ratio(f64::from(lives_remaining), f64::from(max_lives)) * LIVES_WEIGHT).max(0.0);

  let sum = (accuracy + time + lives).clamp(0.0, f64::from(MAX_SCORE));
  // f64::round is half-away-from-zero, which is half-up for non-negative values.
  let total = sum.round() as u32;

  ScoreBreakdown { accuracy, time, lives, total }
}

/// Compare claimed words with the placed words (both normalized) and score the round.
/// Claims are de-duplicated; a claim matching a word that was never placed is incorrect.
pub fn check_answer(
  placed_words: &[PlacedWord],
  time_limit: u32,
  max_lives: u32,
  submission: &AnswerSubmission,
) -> AnswerReport {
  let mut placed: Vec<String> = Vec::with_capacity(placed_words.len());
  let mut placed_set = HashSet::new();
  for pw in placed_words {
    let w = normalize_word(&pw.word);
    if placed_set.insert(w.clone()) {
      placed.push(w);
    }
  }

  let mut seen = HashSet::new();
  let mut found_words = Vec::new();
  let mut incorrect = 0usize;
  for claim in &submission.found_words {
    let w = normalize_word(claim);
    if !seen.insert(w.clone()) {
      continue;
    }
    if placed_set.contains(&w) {
      found_words.push(w);
    } else {
      incorrect += 1;
    }
  }

  let missed_words: Vec<String> = placed.iter().filter(|w| !seen.contains(*w)).cloned().collect();

  let breakdown = calculate_score(
    placed.len(),
    found_words.len(),
    time_limit,
    submission.time_taken,
    max_lives,
    submission.lives_remaining,
  );
  let percentage = (f64::from(breakdown.total) / f64::from(MAX_SCORE) * 100.0 * 100.0).round() / 100.0;

  AnswerReport {
    total_words: placed.len(),
    correct_answers: found_words.len(),
    incorrect_answers: incorrect,
    lives_remaining: submission.lives_remaining,
    time_taken: submission.time_taken,
    score: breakdown.total,
    max_score: MAX_SCORE,
    percentage,
    breakdown,
    found_words,
    missed_words,
  }
}
