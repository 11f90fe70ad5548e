use lightnovel_common::{NovelError, Result};
use std::fmt;

use crate::input::NovelRequest;

/// One prompt/response round trip of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Invent the cast
    Characters,
    /// Plot outline with one beat per chapter
    Outline,
    /// Expand chapter N (1-based)
    Chapter(u32),
}

impl Stage {
    /// Every stage of a run, in execution order
    pub fn plan(chapter_count: u32) -> impl Iterator<Item = Stage> {
        [Stage::Characters, Stage::Outline]
            .into_iter()
            .chain((1..=chapter_count).map(Stage::Chapter))
    }

    /// Number of stages in a run of `chapter_count` chapters
    pub fn total(chapter_count: u32) -> usize {
        chapter_count as usize + 2
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Characters => f.write_str("characters"),
            Stage::Outline => f.write_str("outline"),
            Stage::Chapter(n) => write!(f, "chapter {}", n),
        }
    }
}

/// In-memory accumulator for a single generation run
///
/// Each section is filled exactly once, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelDraft {
    pub title: String,
    pub genre: String,
    pub themes: Vec<String>,
    pub chapter_count: u32,
    characters_text: Option<String>,
    outline_text: Option<String>,
    chapters: Vec<String>,
}

impl NovelDraft {
    /// Create empty draft for a request
    pub fn new(request: NovelRequest) -> Self {
        Self {
            title: request.title,
            genre: request.genre,
            themes: request.themes,
            chapter_count: request.chapter_count,
            characters_text: None,
            outline_text: None,
            chapters: Vec::with_capacity(request.chapter_count.min(64) as usize),
        }
    }

    pub fn characters(&self) -> Option<&str> {
        self.characters_text.as_deref()
    }

    pub fn outline(&self) -> Option<&str> {
        self.outline_text.as_deref()
    }

    pub fn chapters(&self) -> &[String] {
        &self.chapters
    }

    /// Stage that has to run next, `None` once the draft is complete
    pub fn next_stage(&self) -> Option<Stage> {
        if self.characters_text.is_none() {
            Some(Stage::Characters)
        } else if self.outline_text.is_none() {
            Some(Stage::Outline)
        } else if (self.chapters.len() as u32) < self.chapter_count {
            Some(Stage::Chapter(self.chapters.len() as u32 + 1))
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.next_stage().is_none()
    }

    /// Store the generated text for `stage`
    ///
    /// Fails when the stage is out of order or the text is blank.
    pub fn record(&mut self, stage: Stage, text: String) -> Result<()> {
        let expected = self.next_stage();
        if expected != Some(stage) {
            return Err(anyhow::anyhow!(
                "cannot record {} (next stage is {})",
                stage,
                expected.map_or_else(|| "none".to_string(), |s| s.to_string())
            )
            .into());
        }

        if text.trim().is_empty() {
            return Err(NovelError::generation(format!(
                "{} stage produced no text",
                stage
            )));
        }

        match stage {
            Stage::Characters => self.characters_text = Some(text),
            Stage::Outline => self.outline_text = Some(text),
            Stage::Chapter(_) => self.chapters.push(text),
        }
        Ok(())
    }

    /// Total words across all chapters
    pub fn word_count(&self) -> usize {
        self.chapters.iter().map(String::as_str).map(word_count).sum()
    }
}

/// Whitespace-separated word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
