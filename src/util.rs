//! Small utility helpers used across modules.

/// Canonical form of a word: uppercase with every whitespace character removed.
/// Generation and answer checking must both go through this, or matches are missed.
pub fn normalize_word(s: &str) -> String {
  s.chars()
    .filter(|c| !c.is_whitespace())
    .flat_map(char::to_uppercase)
    .collect()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge user-provided names.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    let head: String = s.chars().take(max).collect();
    format!("{}… ({} bytes total)", head, s.len())
  }
}
