use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use opus_batch_translate::pipelines::translation::{
    BatchTranslator, BatchTranslatorConfig, MarianLoader, TargetLanguage,
};
use opus_batch_translate::{default_config_path, Config};

#[derive(Parser, Debug)]
#[command(name = "opus-batch-translate")]
#[command(about = "Translate a sentence file line by line with a pretrained Opus-MT model", long_about = None)]
struct Args {
    /// Input file, one sentence per line (the first line is a header)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file, one translation per line
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Comma-separated target language codes (e.g. es,fr,it)
    #[arg(short, long, value_name = "CODES", value_delimiter = ',')]
    target: Vec<TargetLanguage>,

    /// Number of sentences per batch
    #[arg(short, long, value_name = "N")]
    batch_size: Option<usize>,

    /// Treat the first input line as a sentence instead of a header
    #[arg(long)]
    no_header: bool,

    /// Resume an interrupted run, keeping the lines already in the output
    #[arg(long)]
    resume: bool,

    /// Model identifier on the Hugging Face model hub
    #[arg(short, long, value_name = "NAME")]
    model: Option<String>,

    /// Directory containing rust_model.ot, config.json, vocab.json and source.spm
    #[arg(long, value_name = "DIR")]
    model_dir: Option<PathBuf>,

    /// Number of batches between progress messages
    #[arg(long, value_name = "N")]
    progress_interval: Option<usize>,

    /// JSON configuration file (default: <config dir>/opus-batch-translate/config.json if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<BatchTranslatorConfig> {
    let mut config = match &args.config {
        Some(path) => BatchTranslatorConfig::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => {
                info!("Using configuration {}", path.display());
                BatchTranslatorConfig::from_file(&path)
                    .with_context(|| format!("loading configuration {}", path.display()))?
            }
            None => BatchTranslatorConfig::default(),
        },
    };

    if !args.target.is_empty() {
        config.target_languages = args.target.clone();
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if args.no_header {
        config.skip_header = false;
    }
    if args.resume {
        config.resume = true;
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
        config.model_dir = None;
    }
    if let Some(model_dir) = &args.model_dir {
        config.model_dir = Some(model_dir.clone());
    }
    if let Some(progress_interval) = args.progress_interval {
        config.progress_interval = progress_interval;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let loader = MarianLoader::new(config.model_source());
    let batch_translator = BatchTranslator::new(config, loader)?;

    let reports = batch_translator
        .translate_all(&args.input, &args.output)
        .with_context(|| format!("translating {}", args.input.display()))?;

    for report in reports {
        info!(
            "{}: {} sentences ({} resumed, {} batches) -> {}",
            report.target_language,
            report.sentences,
            report.skipped,
            report.batches,
            report.output_path.display()
        );
    }
    Ok(())
}
