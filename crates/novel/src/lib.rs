//! Light novel generation pipeline
//!
//! Input parsing, prompt building, sequential generation, assembly and export

mod assemble;
mod draft;
mod export;
mod input;
mod pipeline;
mod prompt;

pub use assemble::{assemble, chapter_heading, CHARACTERS_HEADING, OUTLINE_HEADING};
pub use draft::{word_count, NovelDraft, Stage};
pub use export::export_novel;
pub use input::{parse_chapter_count, parse_themes, parse_title, NovelRequest, MAX_CHAPTERS};
pub use pipeline::{GenerationProgress, NoProgress, NovelOutput, NovelPipeline};
pub use prompt::{build_prompt, PromptSettings};
