// Copyright 2019 Guillaume Becquin
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::common::config::Config;
use crate::common::error::BatchTranslateError;
use crate::common::resources::{ModelSource, DEFAULT_MODEL};
use crate::pipelines::translation::batching::{batch_count, batches};
use crate::pipelines::translation::input::read_sentences;
use crate::pipelines::translation::output::{output_path_for, OutputWriter};
use crate::pipelines::translation::{TargetLanguage, Translator, TranslatorLoader};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default number of sentences sent to the model at once
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// # Configuration for batch translation
/// Every field has a default, so that a configuration file only needs to list the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchTranslatorConfig {
    /// Model identifier on the Hugging Face model hub (default: `Helsinki-NLP/opus-mt-en-ROMANCE`)
    pub model: String,
    /// Local model directory, takes precedence over `model` when set (default: None)
    pub model_dir: Option<PathBuf>,
    /// Languages to translate to (default: `["es"]`)
    pub target_languages: Vec<TargetLanguage>,
    /// Number of sentences per model call (default: 10)
    pub batch_size: usize,
    /// Discard the first line of the input file (default: true)
    pub skip_header: bool,
    /// Continue from an existing partial output instead of replacing it (default: false)
    pub resume: bool,
    /// Number of batches between two progress messages (default: 10)
    pub progress_interval: usize,
}

impl Default for BatchTranslatorConfig {
    fn default() -> Self {
        BatchTranslatorConfig {
            model: DEFAULT_MODEL.to_string(),
            model_dir: None,
            target_languages: vec![TargetLanguage("es".to_string())],
            batch_size: DEFAULT_BATCH_SIZE,
            skip_header: true,
            resume: false,
            progress_interval: 10,
        }
    }
}

impl Config for BatchTranslatorConfig {}

impl BatchTranslatorConfig {
    pub fn model_source(&self) -> ModelSource {
        match &self.model_dir {
            Some(model_dir) => ModelSource::Local(model_dir.clone()),
            None => ModelSource::Remote(self.model.clone()),
        }
    }

    pub fn validate(&self) -> Result<(), BatchTranslateError> {
        if self.batch_size == 0 {
            return Err(BatchTranslateError::InvalidConfigurationError(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(BatchTranslateError::InvalidConfigurationError(
                "progress_interval must be greater than 0".to_string(),
            ));
        }
        if self.model_dir.is_none() && self.model.trim().is_empty() {
            return Err(BatchTranslateError::InvalidConfigurationError(
                "a model name or a model directory is required".to_string(),
            ));
        }
        check_target_languages(&self.target_languages)
    }
}

fn check_target_languages(target_languages: &[TargetLanguage]) -> Result<(), BatchTranslateError> {
    if target_languages.is_empty() {
        return Err(BatchTranslateError::InvalidConfigurationError(
            "at least one target language is required".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for language in target_languages {
        if !seen.insert(language) {
            return Err(BatchTranslateError::ValueError(format!(
                "target language {} provided more than once",
                language
            )));
        }
    }
    Ok(())
}

/// # Outcome of the translation of the input into one target language
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageReport {
    pub target_language: TargetLanguage,
    pub output_path: PathBuf,
    /// Number of sentences in the input
    pub sentences: usize,
    /// Sentences already present in the output when resuming
    pub skipped: usize,
    /// Number of calls made to the translator
    pub batches: usize,
}

/// # Batch translator
/// Reads sentences from a file, translates them by batches with the translators provided by a
/// `TranslatorLoader` and writes one translated line per input sentence.
pub struct BatchTranslator<L: TranslatorLoader> {
    config: BatchTranslatorConfig,
    loader: L,
}

impl<L: TranslatorLoader> BatchTranslator<L> {
    /// Build a new `BatchTranslator`
    ///
    /// # Arguments
    ///
    /// * `config` - `BatchTranslatorConfig` batching, input and output options
    /// * `loader` - `TranslatorLoader` providing a translator for each target language
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use opus_batch_translate::pipelines::translation::{
    ///     BatchTranslator, BatchTranslatorConfig, MarianLoader,
    /// };
    ///
    /// let config = BatchTranslatorConfig::default();
    /// let loader = MarianLoader::new(config.model_source());
    /// let batch_translator = BatchTranslator::new(config, loader)?;
    /// batch_translator.translate_all("sentences.txt", "sentences.es.txt")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        config: BatchTranslatorConfig,
        loader: L,
    ) -> Result<BatchTranslator<L>, BatchTranslateError> {
        config.validate()?;
        Ok(BatchTranslator { config, loader })
    }

    pub fn config(&self) -> &BatchTranslatorConfig {
        &self.config
    }

    /// Translates the input file into the target languages of the configuration.
    pub fn translate_all<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<Vec<LanguageReport>, BatchTranslateError> {
        self.translate(input_path, output_path, &self.config.target_languages)
    }

    /// Translates every sentence of `input_path` into each of `target_languages`.
    ///
    /// With a single target language the translations are written to `output_path`. With several,
    /// each language is written to its own file derived from `output_path` (`out.txt` -> `out.es.txt`).
    ///
    /// # Returns
    /// * `Vec<LanguageReport>` one report per target language, in the order provided
    pub fn translate<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        target_languages: &[TargetLanguage],
    ) -> Result<Vec<LanguageReport>, BatchTranslateError> {
        check_target_languages(target_languages)?;
        let sentences = read_sentences(input_path.as_ref(), self.config.skip_header)?;
        let multiple_targets = target_languages.len() > 1;

        let mut reports = Vec::with_capacity(target_languages.len());
        for target_language in target_languages {
            info!("Translating to {}...", target_language);
            let language_output =
                output_path_for(output_path.as_ref(), target_language, multiple_targets);
            reports.push(self.translate_language(&sentences, target_language, &language_output)?);
        }
        Ok(reports)
    }

    fn translate_language(
        &self,
        sentences: &[String],
        target_language: &TargetLanguage,
        output_path: &Path,
    ) -> Result<LanguageReport, BatchTranslateError> {
        let mut writer = if self.config.resume {
            OutputWriter::resume(output_path, sentences.len())?
        } else {
            OutputWriter::create(output_path)?
        };

        let skipped = writer.lines_written();
        if skipped > 0 {
            info!(
                "Resuming {} after {} translated sentences",
                output_path.display(),
                skipped
            );
        }

        let remaining = &sentences[skipped..];
        let total_batches = batch_count(remaining.len(), self.config.batch_size);
        if total_batches > 0 {
            let translator = self.loader.load(target_language)?;
            let tagged: Vec<String> = remaining
                .iter()
                .map(|sentence| target_language.tag(sentence))
                .collect();

            for (index, batch) in batches(&tagged, self.config.batch_size).enumerate() {
                if index % self.config.progress_interval == 0 {
                    info!("{}: batch {}/{}", target_language, index + 1, total_batches);
                }
                debug!("{}: translating {} sentences", target_language, batch.len());
                let translations = translate_checked(&translator, batch)?;
                writer.write_batch(&translations)?;
            }
        }

        let output_path = writer.finish()?;
        info!(
            "{}: wrote {} sentences to {}",
            target_language,
            sentences.len(),
            output_path.display()
        );
        Ok(LanguageReport {
            target_language: target_language.clone(),
            output_path,
            sentences: sentences.len(),
            skipped,
            batches: total_batches,
        })
    }
}

/// Runs the translator on a batch, enforcing one single-line output per input sentence.
fn translate_checked<T: Translator>(
    translator: &T,
    batch: &[String],
) -> Result<Vec<String>, BatchTranslateError> {
    let translations = translator.translate_batch(batch)?;
    if translations.len() != batch.len() {
        return Err(BatchTranslateError::ValueError(format!(
            "translator returned {} sentences for a batch of {}",
            translations.len(),
            batch.len()
        )));
    }
    Ok(translations.into_iter().map(single_line).collect())
}

fn single_line(translation: String) -> String {
    if !translation.contains(|c: char| c == '\n' || c == '\r') {
        return translation;
    }
    warn!("Translation spans several lines, joining: {:?}", translation);
    translation
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}
