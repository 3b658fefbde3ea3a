//! # Batch translation pipeline
//!
//! Translates a newline-delimited file of sentences, one output line per input sentence, with a
//! multilingual Opus-MT Marian model. The pipeline:
//! - reads the sentences, discarding the first (header) line unless configured otherwise
//! - prefixes every sentence with the marker of the target language (e.g. `>>es<< `)
//! - splits the tagged sentences into contiguous batches (10 sentences by default)
//! - sends each batch to a `Translator` and appends the translations to the output file
//!
//! Several target languages can be processed in one run, each being written to its own file.
//! Output is staged in a temporary file and moved to its destination once complete, unless
//! `resume` is enabled, in which case it is written in place and an interrupted run can be
//! continued from the lines already present.
//!
//! The translation engine sits behind the `Translator` and `TranslatorLoader` traits.
//! `MarianLoader` (feature `marian`, enabled by default) provides the `rust-bert` implementation;
//! the model files are downloaded on first use and cached in `~/.cache/.rustbert` (or `RUSTBERT_CACHE`).
//!
//! ```no_run
//! use opus_batch_translate::pipelines::translation::{
//!     parse_language_list, BatchTranslator, BatchTranslatorConfig, MarianLoader,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BatchTranslatorConfig {
//!         target_languages: parse_language_list("es,fr")?,
//!         ..Default::default()
//!     };
//!     let loader = MarianLoader::new(config.model_source());
//!     let batch_translator = BatchTranslator::new(config, loader)?;
//!
//!     // writes sentences.es.txt and sentences.fr.txt
//!     let reports = batch_translator.translate_all("sentences.txt", "sentences.txt")?;
//!     for report in reports {
//!         println!("{}: {}", report.target_language, report.output_path.display());
//!     }
//!     Ok(())
//! }
//! ```

mod batch_translator;
mod batching;
mod input;
mod language;
#[cfg(feature = "marian")]
mod marian;
mod output;
mod translator;

pub use batch_translator::{
    BatchTranslator, BatchTranslatorConfig, LanguageReport, DEFAULT_BATCH_SIZE,
};
pub use batching::{batch_count, batches};
pub use input::{parse_sentences, read_sentences};
pub use language::{parse_language_list, TargetLanguage};
#[cfg(feature = "marian")]
pub use marian::{MarianLoader, MarianTranslator};
pub use output::{output_path_for, OutputWriter};
pub use translator::{Translator, TranslatorLoader};
