mod progress;
mod prompt_input;

use anyhow::{Context, Result};
use clap::Parser;
use lightnovel_common::{logger, AppConfig, NovelError};
use lightnovel_llm::OllamaClient;
use lightnovel_novel::{NovelPipeline, PromptSettings};
use std::path::PathBuf;
use std::sync::Arc;

use crate::progress::StageProgressBar;

#[derive(Parser)]
#[command(name = "lightnovel")]
#[command(about = "Generate a light novel with a locally running Ollama model", long_about = None)]
struct Cli {
    /// Model name, e.g. mistral:7b or qwen2.5:32b (overrides LLM_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Ollama base URL (overrides OLLAMA_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for the generated novel (overrides OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Do not check that Ollama is reachable before asking for input
    #[arg(long)]
    skip_preflight: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<NovelError>()
            .map_or(1, NovelError::exit_code);
        std::process::exit(code);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Reads .env from the working directory or its ancestors
    let mut config = AppConfig::from_env()?;
    if let Some(model) = cli.model {
        config.llm_model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.ollama_base_url = base_url;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.validate()?;

    let level = logger::parse_log_level(&config.log_level);
    if let Err(err) = logger::setup_logging(&config.log_dir, level) {
        eprintln!("Warning: {}; logging to console only", err);
        logger::setup_console_logging(level)?;
    }

    tracing::info!("Light novel generator starting...");
    tracing::info!("  Ollama: {}", config.ollama_base_url);
    tracing::info!("  Model: {}", config.llm_model);
    tracing::info!("  Output: {}", config.output_path().display());

    let client = Arc::new(OllamaClient::new(&config.backend_config())?);

    if !cli.skip_preflight && !client.test_connection().await? {
        return Err(NovelError::backend_unavailable(format!(
            "Ollama at {} answered but is not healthy",
            client.base_url()
        ))
        .into());
    }

    let request = prompt_input::collect_request()?;

    let progress = Arc::new(StageProgressBar::new());
    let pipeline = NovelPipeline::new(client, config.llm_model.clone())
        .with_settings(PromptSettings::from_config(&config))
        .with_progress(progress.clone());

    let output = match pipeline.run(request, &config.output_path()).await {
        Ok(output) => {
            progress.finish("done");
            output
        }
        Err(err) => {
            progress.abandon();
            return Err(err).context("novel generation aborted, no file was written");
        }
    };

    println!(
        "Book saved to: {} ({} chapters, {} words)",
        output.path.display(),
        output.chapters,
        output.words
    );

    Ok(())
}
