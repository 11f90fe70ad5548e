use lightnovel_common::Result;
use lightnovel_llm::join_themes;

use crate::draft::NovelDraft;

/// Heading of the character section
pub const CHARACTERS_HEADING: &str = "=== Characters ===";

/// Heading of the outline section
pub const OUTLINE_HEADING: &str = "=== Plot Outline ===";

/// Heading of chapter `number`
pub fn chapter_heading(number: usize) -> String {
    format!("=== Chapter {} ===", number)
}

/// Concatenate a completed draft into the final document
///
/// Layout: title header, characters, outline, then chapters 1..=N. Generated
/// text is copied verbatim; only headings and blank lines are added.
pub fn assemble(draft: &NovelDraft) -> Result<String> {
    let (Some(characters), Some(outline)) = (draft.characters(), draft.outline()) else {
        return Err(anyhow::anyhow!("cannot assemble \"{}\": draft is incomplete", draft.title).into());
    };
    if !draft.is_complete() {
        return Err(anyhow::anyhow!(
            "cannot assemble \"{}\": {} of {} chapters generated",
            draft.title,
            draft.chapters().len(),
            draft.chapter_count
        )
        .into());
    }

    let mut document = String::new();
    document.push_str(&format!("Title: {}\n", draft.title));
    document.push_str(&format!("Genre: {}\n", draft.genre));
    document.push_str(&format!("Themes: {}\n\n", join_themes(&draft.themes)));

    push_section(&mut document, CHARACTERS_HEADING, characters);
    push_section(&mut document, OUTLINE_HEADING, outline);
    for (i, chapter) in draft.chapters().iter().enumerate() {
        push_section(&mut document, &chapter_heading(i + 1), chapter);
    }

    Ok(document)
}

fn push_section(document: &mut String, heading: &str, body: &str) {
    document.push_str(heading);
    document.push_str("\n\n");
    document.push_str(body);
    document.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Stage;
    use crate::input::NovelRequest;

    fn completed(chapters: u32) -> NovelDraft {
        let request = NovelRequest::parse(
            "The Lost Realm",
            "Fantasy",
            "Adventure, Magic",
            &chapters.to_string(),
        )
        .unwrap();
        let mut draft = NovelDraft::new(request);
        for stage in Stage::plan(chapters) {
            draft.record(stage, format!("<{}>", stage)).unwrap();
        }
        draft
    }

    #[test]
    fn test_sections_in_order() {
        let document = assemble(&completed(3)).unwrap();

        let positions: Vec<usize> = [
            "Title: The Lost Realm",
            CHARACTERS_HEADING,
            "<characters>",
            OUTLINE_HEADING,
            "<outline>",
            "=== Chapter 1 ===",
            "<chapter 1>",
            "=== Chapter 2 ===",
            "=== Chapter 3 ===",
            "<chapter 3>",
        ]
        .iter()
        .map(|needle| document.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(document.matches("=== Chapter ").count(), 3);
        assert!(document.starts_with("Title: The Lost Realm\nGenre: Fantasy\nThemes: Adventure, Magic\n\n"));
    }

    #[test]
    fn test_incomplete_draft_is_rejected() {
        let request = NovelRequest::parse("T", "G", "Magic", "2").unwrap();
        let mut draft = NovelDraft::new(request);
        assert!(assemble(&draft).is_err());

        draft.record(Stage::Characters, "c".to_string()).unwrap();
        draft.record(Stage::Outline, "o".to_string()).unwrap();
        draft.record(Stage::Chapter(1), "one".to_string()).unwrap();
        assert!(assemble(&draft).is_err());
    }
}
