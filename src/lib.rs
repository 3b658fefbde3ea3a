//! Batch translation of sentence files with pretrained Opus-MT Marian models.
//!
//! The crate reads newline-delimited sentence files, tags each sentence with the marker of the
//! requested target language, sends them by fixed-size batches to a translation engine and writes
//! one translated line per input sentence. The default engine is the `rust-bert` port of the
//! Opus-MT English to Romance languages model (`Helsinki-NLP/opus-mt-en-ROMANCE`) developed by the
//! [Language Technology group of the University of Helsinki](https://github.com/Helsinki-NLP/Opus-MT).
//!
//! ```no_run
//! use opus_batch_translate::pipelines::translation::{
//!     BatchTranslator, BatchTranslatorConfig, MarianLoader, TargetLanguage,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BatchTranslatorConfig::default();
//!     let loader = MarianLoader::new(config.model_source());
//!     let batch_translator = BatchTranslator::new(config, loader)?;
//!
//!     let targets = [TargetLanguage::new("es")?];
//!     batch_translator.translate("sentences.txt", "sentences.es.txt", &targets)?;
//!     Ok(())
//! }
//! ```
//!
//! Input files are expected to start with a header line, which is discarded (see
//! `BatchTranslatorConfig::skip_header`). The translation engine can be replaced by implementing
//! the `Translator` and `TranslatorLoader` traits.
//!
//! # Command line
//!
//! The `opus-batch-translate` binary exposes the pipeline:
//!
//! ```bash
//! opus-batch-translate sentences.txt sentences.es.txt --target es --batch-size 10
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default: `info`).

mod common;
pub mod pipelines;

pub use common::config::{default_config_path, Config};
pub use common::error::BatchTranslateError;
pub use common::resources;
