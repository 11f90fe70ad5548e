use lightnovel_common::Result;
use lightnovel_llm::{GenerateRequest, LlmClient};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::draft::{word_count, NovelDraft, Stage};
use crate::export::export_novel;
use crate::input::NovelRequest;
use crate::prompt::{build_prompt, PromptSettings};

/// Observer for stage-level progress
pub trait GenerationProgress: Send + Sync {
    /// Called before the backend is asked for `stage` (`index` is 0-based)
    fn stage_started(&self, _stage: Stage, _index: usize, _total: usize) {}

    /// Called once `stage` has been stored in the draft
    fn stage_finished(&self, _stage: Stage, _words: usize) {}
}

/// Progress observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl GenerationProgress for NoProgress {}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct NovelOutput {
    /// Where the novel was written
    pub path: PathBuf,

    /// Number of chapters in the document
    pub chapters: usize,

    /// Total words across all chapters
    pub words: usize,
}

/// Sequential generation pipeline: characters, outline, then each chapter
pub struct NovelPipeline {
    client: Arc<dyn LlmClient>,
    model: String,
    settings: PromptSettings,
    progress: Arc<dyn GenerationProgress>,
}

impl NovelPipeline {
    /// Create pipeline that sends every stage to `model`
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            settings: PromptSettings::default(),
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_settings(mut self, settings: PromptSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn GenerationProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Run every stage and return the completed draft
    ///
    /// The first failing stage aborts the run.
    pub async fn generate(&self, request: NovelRequest) -> Result<NovelDraft> {
        info!(
            "Starting novel generation: \"{}\" ({} chapters, model {})",
            request.title, request.chapter_count, self.model
        );

        let stages = Stage::plan(request.chapter_count);
        let total = Stage::total(request.chapter_count);
        let mut draft = NovelDraft::new(request);

        for (index, stage) in stages.enumerate() {
            self.progress.stage_started(stage, index, total);
            info!("Generating {} ({}/{})", stage, index + 1, total);

            let prompt = build_prompt(stage, &draft, &self.settings)?;
            debug!("Prompt for {} - Length: {}", stage, prompt.len());

            let text = self
                .client
                .generate(GenerateRequest::new(&self.model, prompt))
                .await?;
            let words = word_count(&text);
            debug!("Generated {} - {} words", stage, words);

            draft.record(stage, text)?;
            self.progress.stage_finished(stage, words);
        }

        info!("Generation complete: {} words in chapters", draft.word_count());
        Ok(draft)
    }

    /// Generate, assemble and export the novel to `output_path`
    ///
    /// Nothing is written unless every stage succeeded.
    pub async fn run(&self, request: NovelRequest, output_path: &Path) -> Result<NovelOutput> {
        let draft = self.generate(request).await?;
        let document = assemble(&draft)?;
        let path = export_novel(&document, output_path).await?;

        Ok(NovelOutput {
            path,
            chapters: draft.chapters().len(),
            words: draft.word_count(),
        })
    }
}
