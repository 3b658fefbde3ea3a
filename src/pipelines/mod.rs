//! # Ready-to-use translation pipelines
//!
//! #### Batch translation
//! Translation of a newline-delimited sentence file into one or several Romance languages with the
//! Opus-MT English to Romance Marian model (`Helsinki-NLP/opus-mt-en-ROMANCE`), one output line per
//! input sentence. See the `translation` module for the available options.
//!
//! ```no_run
//! use opus_batch_translate::pipelines::translation::{
//!     BatchTranslator, BatchTranslatorConfig, MarianLoader,
//! };
//! # fn main() -> anyhow::Result<()> {
//! let config = BatchTranslatorConfig::default();
//! let batch_translator = BatchTranslator::new(config.clone(), MarianLoader::new(config.model_source()))?;
//! batch_translator.translate_all("input.txt", "output.txt")?;
//! # Ok(())
//! # }
//! ```

pub mod translation;
