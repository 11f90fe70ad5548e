use lightnovel_common::{AppConfig, Result};
use lightnovel_llm::{chapter_prompt, character_prompt, outline_prompt, ChapterContext};

use crate::draft::{NovelDraft, Stage};

/// Template settings that do not come from the user's answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSettings {
    pub target_audience: String,
    pub min_words: u32,
    pub max_words: u32,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl PromptSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            target_audience: config.target_audience.clone(),
            min_words: config.min_words,
            max_words: config.max_words,
        }
    }
}

/// Render the prompt for `stage` from what the draft holds so far
///
/// Pure: the result depends only on the stage, the draft sections the stage
/// reads, and the settings.
pub fn build_prompt(stage: Stage, draft: &NovelDraft, settings: &PromptSettings) -> Result<String> {
    match stage {
        Stage::Characters => Ok(character_prompt(
            &draft.title,
            &draft.genre,
            &draft.themes,
            &settings.target_audience,
        )),
        Stage::Outline => {
            let characters = require(draft.characters(), stage, Stage::Characters)?;
            Ok(outline_prompt(
                &draft.title,
                &draft.genre,
                &draft.themes,
                characters,
                draft.chapter_count,
            ))
        }
        Stage::Chapter(number) => {
            if number == 0 || number > draft.chapter_count {
                return Err(anyhow::anyhow!(
                    "chapter {} is outside 1..={}",
                    number,
                    draft.chapter_count
                )
                .into());
            }
            let characters = require(draft.characters(), stage, Stage::Characters)?;
            let outline = require(draft.outline(), stage, Stage::Outline)?;
            let previous_chapter = if number > 1 {
                let previous = draft.chapters().get(number as usize - 2).map(String::as_str);
                Some(require(previous, stage, Stage::Chapter(number - 1))?)
            } else {
                None
            };

            Ok(chapter_prompt(&ChapterContext {
                number,
                total: draft.chapter_count,
                outline,
                characters,
                previous_chapter,
                min_words: settings.min_words,
                max_words: settings.max_words,
            }))
        }
    }
}

fn require(section: Option<&str>, stage: Stage, dependency: Stage) -> Result<&str> {
    section.ok_or_else(|| {
        anyhow::anyhow!("missing {} output when building the {} prompt", dependency, stage).into()
    })
}
