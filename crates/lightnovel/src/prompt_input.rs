use anyhow::{Context, Result};
use dialoguer::Input;
use lightnovel_novel::NovelRequest;

/// Ask the four questions on the terminal and validate the answers
///
/// Invalid answers abort the run; there is no re-prompting.
pub fn collect_request() -> Result<NovelRequest> {
    let title = ask("Enter book title")?;
    let genre = ask("Enter book genre")?;
    let themes = ask("Enter themes (comma-separated)")?;
    let chapters = ask("Enter number of chapters")?;

    Ok(NovelRequest::parse(&title, &genre, &themes, &chapters)?)
}

fn ask(question: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(question)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("failed to read answer to '{}'", question))
}
