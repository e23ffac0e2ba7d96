//! Request/response structs for the game handlers (serde ready), plus boundary validation.
//! Keep this small and stable so callers can evolve independently of the engine.

use serde::{Deserialize, Serialize};

use crate::config::GameDefaults;
use crate::domain::{Direction, Game, Grid};
use crate::error::ValidationError;
use crate::scoring::{AnswerReport, AnswerSubmission};
use crate::util::normalize_word;

pub const NAME_MAX: usize = 128;
pub const DESCRIPTION_MAX: usize = 256;
pub const MAX_WORDS: usize = 20;
pub const WORD_MIN: usize = 2;
pub const WORD_MAX: usize = 20;
pub const GRID_SIZE_MIN: usize = 8;
pub const GRID_SIZE_MAX: usize = 20;
pub const TIME_LIMIT_MIN: u32 = 30;
pub const TIME_LIMIT_MAX: u32 = 600;
pub const LIVES_MIN: u32 = 1;
pub const LIVES_MAX: u32 = 10;

#[derive(Clone, Debug, Deserialize)]
pub struct CreateWordSearch {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub grid_size: Option<usize>,
    #[serde(default)]
    pub time_limit: Option<u32>,
    #[serde(default)]
    pub lives: Option<u32>,
    #[serde(default)]
    pub directions: Option<Vec<Direction>>,
    #[serde(default)]
    pub is_publish_immediately: bool,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateWordSearch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub words: Option<Vec<String>>,
    pub grid_size: Option<usize>,
    pub time_limit: Option<u32>,
    pub lives: Option<u32>,
    pub directions: Option<Vec<Direction>>,
    pub is_publish: Option<bool>,
}

impl UpdateWordSearch {
    /// True when the change requires a new grid.
    pub fn touches_puzzle(&self) -> bool {
        self.words.is_some() || self.grid_size.is_some() || self.directions.is_some()
    }
}

/// Fully resolved game settings (defaults applied, strings trimmed).
#[derive(Clone, Debug, PartialEq)]
pub struct GameSettings {
    pub name: String,
    pub description: Option<String>,
    pub words: Vec<String>,
    pub grid_size: usize,
    pub time_limit: u32,
    pub lives: u32,
    pub directions: Vec<Direction>,
    pub is_published: bool,
}

impl CreateWordSearch {
    pub fn into_settings(self, defaults: &GameDefaults) -> GameSettings {
        GameSettings {
            name: self.name.trim().to_string(),
            description: self.description.map(|d| d.trim().to_string()),
            words: self.words.iter().map(|w| w.trim().to_string()).collect(),
            grid_size: self.grid_size.unwrap_or(defaults.grid_size),
            time_limit: self.time_limit.unwrap_or(defaults.time_limit),
            lives: self.lives.unwrap_or(defaults.lives),
            directions: self.directions.unwrap_or_else(|| defaults.directions.clone()),
            is_published: self.is_publish_immediately,
        }
    }
}

impl GameSettings {
    /// Schema bounds plus the usability check that the grid can hold the longest word.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > NAME_MAX {
            return Err(ValidationError::NameLength { max: NAME_MAX });
        }
        if let Some(d) = &self.description {
            if d.chars().count() > DESCRIPTION_MAX {
                return Err(ValidationError::DescriptionLength { max: DESCRIPTION_MAX });
            }
        }

        if self.words.len() > MAX_WORDS {
            return Err(ValidationError::TooManyWords { max: MAX_WORDS, got: self.words.len() });
        }
        for w in &self.words {
            let len = w.chars().count();
            if !(WORD_MIN..=WORD_MAX).contains(&len) {
                return Err(ValidationError::WordLength { word: w.clone(), min: WORD_MIN, max: WORD_MAX });
            }
            if !normalize_word(w).chars().all(char::is_alphabetic) {
                return Err(ValidationError::NonLetter { word: w.clone() });
            }
        }

        if !(GRID_SIZE_MIN..=GRID_SIZE_MAX).contains(&self.grid_size) {
            return Err(ValidationError::GridSize(self.grid_size));
        }
        if !(TIME_LIMIT_MIN..=TIME_LIMIT_MAX).contains(&self.time_limit) {
            return Err(ValidationError::TimeLimit(self.time_limit));
        }
        if !(LIVES_MIN..=LIVES_MAX).contains(&self.lives) {
            return Err(ValidationError::Lives(self.lives));
        }
        if self.directions.is_empty() {
            return Err(ValidationError::NoDirections);
        }

        if let Some(longest) = self.words.iter().map(|w| normalize_word(w)).max_by_key(|w| w.chars().count()) {
            if longest.chars().count() > self.grid_size {
                return Err(ValidationError::GridTooSmall { word: longest, grid_size: self.grid_size });
            }
        }
        Ok(())
    }
}

pub fn validate_submission(sub: &AnswerSubmission) -> Result<(), ValidationError> {
    if !sub.time_taken.is_finite() || sub.time_taken < 0.0 {
        return Err(ValidationError::TimeTaken);
    }
    Ok(())
}

//
// Responses
//

#[derive(Debug, Serialize)]
pub struct GameCreated {
    pub id: String,
    pub placed_words: usize,
    /// Words the generator could not fit; empty for a complete puzzle.
    pub dropped_words: Vec<String>,
}

/// Player-facing view of a puzzle. Never carries `placed_words`.
#[derive(Debug, Serialize)]
pub struct PlayView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub grid: Grid,
    pub words: Vec<String>,
    pub grid_size: usize,
    pub time_limit: u32,
    pub lives: u32,
    pub is_published: bool,
}

/// Convert a stored `Game` to the public play view.
pub fn to_play_view(g: &Game) -> PlayView {
    PlayView {
        id: g.id.clone(),
        name: g.name.clone(),
        description: g.description.clone(),
        grid: g.game_json.grid.clone(),
        words: g.game_json.words.iter().map(|w| w.word.clone()).collect(),
        grid_size: g.game_json.grid_size,
        time_limit: g.game_json.time_limit,
        lives: g.game_json.lives,
        is_published: g.is_published,
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerOut {
    pub game_id: String,
    #[serde(flatten)]
    pub report: AnswerReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GameSettings {
        CreateWordSearch {
            name: "  Fruits ".into(),
            description: None,
            words: vec![" apple ".into(), "kiwi".into()],
            grid_size: None,
            time_limit: None,
            lives: None,
            directions: None,
            is_publish_immediately: true,
        }
        .into_settings(&GameDefaults::default())
    }

    #[test]
    fn test_defaults_are_applied_and_trimmed() {
        let s = settings();
        assert_eq!(s.name, "Fruits");
        assert_eq!(s.words, vec!["apple".to_string(), "kiwi".to_string()]);
        assert_eq!(s.grid_size, 15);
        assert_eq!(s.time_limit, 480);
        assert_eq!(s.lives, 5);
        assert_eq!(s.directions.len(), 3);
        assert!(s.is_published);
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn test_bounds() {
        let mut s = settings();
        s.grid_size = 7;
        assert_eq!(s.validate(), Err(ValidationError::GridSize(7)));

        let mut s = settings();
        s.time_limit = 601;
        assert_eq!(s.validate(), Err(ValidationError::TimeLimit(601)));

        let mut s = settings();
        s.lives = 0;
        assert_eq!(s.validate(), Err(ValidationError::Lives(0)));

        let mut s = settings();
        s.directions.clear();
        assert_eq!(s.validate(), Err(ValidationError::NoDirections));

        let mut s = settings();
        s.name = String::new();
        assert_eq!(s.validate(), Err(ValidationError::NameLength { max: NAME_MAX }));

        let mut s = settings();
        s.words.push("x".into());
        assert!(matches!(s.validate(), Err(ValidationError::WordLength { .. })));

        let mut s = settings();
        s.words = (0..21).map(|i| format!("w{i}")).collect();
        assert_eq!(s.validate(), Err(ValidationError::TooManyWords { max: MAX_WORDS, got: 21 }));
    }

    #[test]
    fn test_words_must_be_letters() {
        let mut s = settings();
        s.words = vec!["r2d2!".into()];
        assert_eq!(s.validate(), Err(ValidationError::NonLetter { word: "r2d2!".into() }));

        let mut s = settings();
        s.words = vec!["ice cream".into(), "jalapeño".into()];
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn test_grid_must_hold_longest_word() {
        let mut s = settings();
        s.grid_size = 8;
        s.words = vec!["watermelon".into()];
        assert_eq!(
            s.validate(),
            Err(ValidationError::GridTooSmall { word: "WATERMELON".into(), grid_size: 8 })
        );
    }

    #[test]
    fn test_submission_time_must_be_non_negative() {
        let mut sub = AnswerSubmission { found_words: vec![], time_taken: -1.0, lives_remaining: 1 };
        assert_eq!(validate_submission(&sub), Err(ValidationError::TimeTaken));
        sub.time_taken = f64::NAN;
        assert_eq!(validate_submission(&sub), Err(ValidationError::TimeTaken));
        sub.time_taken = 0.0;
        assert_eq!(validate_submission(&sub), Ok(()));
    }

    #[test]
    fn test_update_touches_puzzle() {
        assert!(!UpdateWordSearch { time_limit: Some(60), ..Default::default() }.touches_puzzle());
        assert!(UpdateWordSearch { grid_size: Some(10), ..Default::default() }.touches_puzzle());
        assert!(UpdateWordSearch { directions: Some(vec![Direction::Vertical]), ..Default::default() }.touches_puzzle());
    }
}
