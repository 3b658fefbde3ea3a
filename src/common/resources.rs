//! # Model file locations
//!
//! A Marian translation model is made of four files: weights converted to the `tch` format
//! (`rust_model.ot`), a configuration file (`config.json`), a vocabulary (`vocab.json`) and the
//! sentence piece model of the source language (`source.spm`). These files are either fetched from
//! the Hugging Face model hub (and cached locally by `rust-bert`) or read from a local directory.

use std::fmt;
use std::path::{Path, PathBuf};

/// Pretrained English to Romance languages model from the Opus-MT team (Helsinki-NLP).
/// Shared under Creative Commons Attribution 4.0 International License license by the Opus-MT team
/// from Language Technology at the University of Helsinki at https://github.com/Helsinki-NLP/Opus-MT.
pub const DEFAULT_MODEL: &str = "Helsinki-NLP/opus-mt-en-ROMANCE";

const MODEL_HUB_URL: &str = "https://huggingface.co";

/// # Files making up a Marian model
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelFile {
    Weights,
    Config,
    Vocab,
    SentencePiece,
}

impl ModelFile {
    /// Name of the file in a model repository or local model directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ModelFile::Weights => "rust_model.ot",
            ModelFile::Config => "config.json",
            ModelFile::Vocab => "vocab.json",
            ModelFile::SentencePiece => "source.spm",
        }
    }

    fn cache_name(&self) -> &'static str {
        match self {
            ModelFile::Weights => "model",
            ModelFile::Config => "config",
            ModelFile::Vocab => "vocab",
            ModelFile::SentencePiece => "spiece",
        }
    }
}

/// # Where to load the translation model from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelSource {
    /// Model identifier on the Hugging Face model hub (e.g. `Helsinki-NLP/opus-mt-en-ROMANCE`)
    Remote(String),
    /// Local directory containing `rust_model.ot`, `config.json`, `vocab.json` and `source.spm`
    Local(PathBuf),
}

impl Default for ModelSource {
    fn default() -> Self {
        ModelSource::Remote(DEFAULT_MODEL.to_string())
    }
}

impl ModelSource {
    /// Returns the `(cache subdirectory, url)` pair of a file of a remote model, in the format
    /// expected by `rust_bert::resources::RemoteResource::from_pretrained`.
    ///
    /// # Example
    ///
    /// ```
    /// use opus_batch_translate::resources::{ModelFile, ModelSource};
    ///
    /// let (cache_subdir, url) =
    ///     ModelSource::remote_location("Helsinki-NLP/opus-mt-en-ROMANCE", ModelFile::Config);
    /// assert_eq!(cache_subdir, "Helsinki-NLP-opus-mt-en-ROMANCE/config");
    /// assert_eq!(
    ///     url,
    ///     "https://huggingface.co/Helsinki-NLP/opus-mt-en-ROMANCE/resolve/main/config.json"
    /// );
    /// ```
    pub fn remote_location(model_name: &str, file: ModelFile) -> (String, String) {
        let model_name = model_name.trim_matches('/');
        let cache_subdir = format!("{}/{}", model_name.replace('/', "-"), file.cache_name());
        let url = format!(
            "{}/{}/resolve/main/{}",
            MODEL_HUB_URL,
            model_name,
            file.file_name()
        );
        (cache_subdir, url)
    }

    /// Path of a file of a model stored in a local directory
    pub fn local_path(model_dir: &Path, file: ModelFile) -> PathBuf {
        model_dir.join(file.file_name())
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Remote(name) => write!(f, "{}", name),
            ModelSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
