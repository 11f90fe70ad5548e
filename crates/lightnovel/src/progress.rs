use indicatif::{ProgressBar, ProgressStyle};
use lightnovel_novel::{GenerationProgress, Stage};

/// Terminal progress bar over all generation stages
pub struct StageProgressBar {
    bar: ProgressBar,
}

impl StageProgressBar {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl GenerationProgress for StageProgressBar {
    fn stage_started(&self, stage: Stage, index: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(index as u64);
        self.bar.set_message(format!("generating {}", stage));
    }

    fn stage_finished(&self, stage: Stage, words: usize) {
        self.bar.inc(1);
        if let Stage::Chapter(_) = stage {
            self.bar.println(format!("  {} done ({} words)", stage, words));
        }
    }
}
