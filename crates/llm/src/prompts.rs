//! Prompt templates for novel generation
//!
//! Every template is a pure function of its arguments, so the same inputs
//! always render the same prompt.

/// Shared instructions prepended to every stage
pub const NOVELIST_PREAMBLE: &str = "You are a professional light novel author. \
Write in English, keep names and facts consistent with everything you are given, \
and answer with the requested text only, without commentary about the task.";

/// Inputs for the chapter template
#[derive(Debug, Clone, Copy)]
pub struct ChapterContext<'a> {
    /// 1-based chapter number
    pub number: u32,

    /// Total number of chapters in the novel
    pub total: u32,

    /// Plot outline produced by the outline stage
    pub outline: &'a str,

    /// Character descriptions produced by the character stage
    pub characters: &'a str,

    /// Text of the preceding chapter, if any
    pub previous_chapter: Option<&'a str>,

    /// Requested minimum length in words
    pub min_words: u32,

    /// Requested maximum length in words
    pub max_words: u32,
}

/// Render themes as a comma-separated list
pub fn join_themes(themes: &[String]) -> String {
    themes.join(", ")
}

/// Prompt for the character stage
pub fn character_prompt(title: &str, genre: &str, themes: &[String], audience: &str) -> String {
    format!(
        "{}\n\n\
Create five unique characters for the {} titled \"{}\", written for a {} audience.\n\
The story explores the following themes: {}.\n\n\
For each character give:\n\
- Name\n\
- Background\n\
- Personality traits\n\
- Goals\n\
- Relationships with the other characters\n\n\
Make sure the cast fits the genre and that every theme is carried by at least one character.",
        NOVELIST_PREAMBLE,
        novel_kind(genre),
        title,
        audience,
        join_themes(themes)
    )
}

/// Prompt for the plot outline stage
pub fn outline_prompt(
    title: &str,
    genre: &str,
    themes: &[String],
    characters: &str,
    chapter_count: u32,
) -> String {
    format!(
        "{}\n\n\
Write a structured plot outline for the {} titled \"{}\" with exactly {} chapters.\n\
The novel explores the following themes: {}.\n\n\
Characters:\n---\n{}\n---\n\n\
For every chapter write one entry in this form:\n\
Chapter <number>: <chapter title>\n\
<two or three sentences summarizing what happens>\n\n\
Number the chapters from 1 to {} and build toward a satisfying conclusion in the last chapter.",
        NOVELIST_PREAMBLE,
        novel_kind(genre),
        title,
        chapter_count,
        join_themes(themes),
        characters,
        chapter_count
    )
}

/// Prompt for a single chapter
pub fn chapter_prompt(ctx: &ChapterContext<'_>) -> String {
    let continuity = match ctx.previous_chapter {
        Some(previous) => format!(
            "Previous chapter (continue directly from where it ends):\n---\n{}\n---",
            previous
        ),
        None => "This is the first chapter; open the story and introduce the setting.".to_string(),
    };

    format!(
        "{}\n\n\
Expand chapter {} of {} into full narrative prose with rich descriptions, dialogue \
and scene transitions. Follow the outline for this chapter and keep the writing engaging \
and true to the novel's genre.\n\
Aim for {} to {} words.\n\n\
Plot outline:\n---\n{}\n---\n\n\
Characters:\n---\n{}\n---\n\n\
{}\n\n\
Write chapter {} now.",
        NOVELIST_PREAMBLE,
        ctx.number,
        ctx.total,
        ctx.min_words,
        ctx.max_words,
        ctx.outline,
        ctx.characters,
        continuity,
        ctx.number
    )
}

fn novel_kind(genre: &str) -> String {
    if genre.is_empty() {
        "novel".to_string()
    } else {
        format!("{} novel", genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn themes() -> Vec<String> {
        vec!["Adventure".to_string(), "Magic".to_string(), "Betrayal".to_string()]
    }

    #[test]
    fn test_character_prompt_mentions_inputs() {
        let prompt = character_prompt("The Lost Realm", "Fantasy", &themes(), "General");

        assert!(prompt.contains("\"The Lost Realm\""));
        assert!(prompt.contains("Fantasy novel"));
        assert!(prompt.contains("Adventure, Magic, Betrayal"));
        assert!(prompt.contains("five unique characters"));
    }

    #[test]
    fn test_outline_prompt_includes_characters_and_count() {
        let prompt = outline_prompt("The Lost Realm", "Fantasy", &themes(), "CHAR_TEXT", 7);

        assert!(prompt.contains("exactly 7 chapters"));
        assert!(prompt.contains("---\nCHAR_TEXT\n---"));
        assert!(prompt.contains("from 1 to 7"));
    }

    #[test]
    fn test_chapter_prompt_continuity() {
        let first = chapter_prompt(&ChapterContext {
            number: 1,
            total: 2,
            outline: "OUTLINE_TEXT",
            characters: "CHAR_TEXT",
            previous_chapter: None,
            min_words: 800,
            max_words: 2000,
        });
        assert!(first.contains("This is the first chapter"));
        assert!(first.contains("Aim for 800 to 2000 words."));

        let second = chapter_prompt(&ChapterContext {
            number: 2,
            total: 2,
            outline: "OUTLINE_TEXT",
            characters: "CHAR_TEXT",
            previous_chapter: Some("CH1_TEXT"),
            min_words: 800,
            max_words: 2000,
        });
        assert!(second.contains("Expand chapter 2 of 2"));
        assert!(second.contains("---\nCH1_TEXT\n---"));
        assert!(!second.contains("This is the first chapter"));
    }

    #[test]
    fn test_empty_genre_reads_naturally() {
        let prompt = character_prompt("Untitled", "", &themes(), "General");
        assert!(prompt.contains("for the novel titled \"Untitled\""));
    }
}
