//! User input parsing
//!
//! Raw strings collected from the terminal are turned into a validated
//! [`NovelRequest`]. Nothing here touches the terminal itself.

use lightnovel_common::{NovelError, Result};
use serde::{Deserialize, Serialize};

/// Validated parameters of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelRequest {
    /// Novel title (non-empty)
    pub title: String,

    /// Genre, free-form and possibly empty
    pub genre: String,

    /// Ordered, non-empty list of themes
    pub themes: Vec<String>,

    /// Number of chapters to generate (at least 1)
    pub chapter_count: u32,
}

impl NovelRequest {
    /// Validate the four raw answers given by the user
    pub fn parse(title: &str, genre: &str, themes: &str, chapter_count: &str) -> Result<Self> {
        Ok(Self {
            title: parse_title(title)?,
            genre: genre.trim().to_string(),
            themes: parse_themes(themes)?,
            chapter_count: parse_chapter_count(chapter_count)?,
        })
    }
}

/// Trim the title and reject blank input
pub fn parse_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(NovelError::invalid_input("title cannot be empty"));
    }
    Ok(title.to_string())
}

/// Split a comma-separated theme list
///
/// Entries are trimmed and empty entries are dropped; order is preserved.
pub fn parse_themes(raw: &str) -> Result<Vec<String>> {
    let themes: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|theme| !theme.is_empty())
        .map(str::to_string)
        .collect();

    if themes.is_empty() {
        return Err(NovelError::invalid_input(
            "at least one theme is required (comma-separated)",
        ));
    }
    Ok(themes)
}

/// Largest chapter count accepted from the user
pub const MAX_CHAPTERS: u32 = 500;

/// Parse a chapter count in `1..=MAX_CHAPTERS`
pub fn parse_chapter_count(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let count: i64 = trimmed.parse().map_err(|_| {
        NovelError::invalid_input(format!(
            "chapter count must be a whole number, got '{}'",
            trimmed
        ))
    })?;

    if count <= 0 {
        return Err(NovelError::invalid_input(format!(
            "chapter count must be at least 1, got {}",
            count
        )));
    }

    if count > i64::from(MAX_CHAPTERS) {
        return Err(NovelError::invalid_input(format!(
            "chapter count {} is too large (at most {})",
            count, MAX_CHAPTERS
        )));
    }

    Ok(count as u32)
}
