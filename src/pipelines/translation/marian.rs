// Copyright 2018-2020 The HuggingFace Inc. team.
// Copyright 2020 Marian Team Authors
// Copyright 2019-2020 Guillaume Becquin
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Marian translation engine
//!
//! `Translator` implementation backed by the `rust-bert` Marian pipeline. Tokenization, beam search
//! generation and decoding (skipping special tokens) are performed by `rust-bert`; the weights are
//! downloaded from the Hugging Face model hub on first use and cached (see `RUSTBERT_CACHE`).

use crate::common::error::BatchTranslateError;
use crate::common::resources::{ModelFile, ModelSource};
use crate::pipelines::translation::{TargetLanguage, Translator, TranslatorLoader};
use log::info;
use rust_bert::pipelines::common::ModelType;
use rust_bert::pipelines::translation::{Language, TranslationConfig, TranslationModel};
use rust_bert::resources::{LocalResource, RemoteResource, ResourceProvider};
use std::time::Instant;
use tch::Device;

const MODEL_FILES: [ModelFile; 4] = [
    ModelFile::Weights,
    ModelFile::Config,
    ModelFile::Vocab,
    ModelFile::SentencePiece,
];

/// # Loads Marian translation models
pub struct MarianLoader {
    model_source: ModelSource,
    device: Device,
}

impl MarianLoader {
    /// Build a new `MarianLoader`, placing models on the GPU when available.
    ///
    /// # Arguments
    ///
    /// * `model_source` - `ModelSource` pointing to a model hub identifier or a local model directory
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use opus_batch_translate::pipelines::translation::{MarianLoader, TargetLanguage, TranslatorLoader};
    /// use opus_batch_translate::resources::ModelSource;
    ///
    /// let loader = MarianLoader::new(ModelSource::default());
    /// let translator = loader.load(&TargetLanguage::new("es")?)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(model_source: ModelSource) -> MarianLoader {
        MarianLoader {
            model_source,
            device: Device::cuda_if_available(),
        }
    }

    pub fn with_device(mut self, device: Device) -> MarianLoader {
        self.device = device;
        self
    }

    pub fn model_source(&self) -> &ModelSource {
        &self.model_source
    }

    fn translation_config(&self) -> Result<TranslationConfig, BatchTranslateError> {
        match &self.model_source {
            ModelSource::Remote(model_name) => Ok(marian_config(
                |file| {
                    let (cache_subdir, url) = ModelSource::remote_location(model_name, file);
                    RemoteResource::from_pretrained((cache_subdir.as_str(), url.as_str()))
                },
                self.device,
            )),
            ModelSource::Local(model_dir) => {
                for file in MODEL_FILES.iter() {
                    let path = ModelSource::local_path(model_dir, *file);
                    if !path.is_file() {
                        return Err(BatchTranslateError::IOError(format!(
                            "missing model file {}",
                            path.display()
                        )));
                    }
                }
                Ok(marian_config(
                    |file| LocalResource {
                        local_path: ModelSource::local_path(model_dir, file),
                    },
                    self.device,
                ))
            }
        }
    }
}

// Sentences reach the model already tagged with their target language marker: declaring no target
// language keeps rust-bert from adding a prefix of its own.
fn marian_config<R, F>(resource: F, device: Device) -> TranslationConfig
where
    R: ResourceProvider + Send + 'static,
    F: Fn(ModelFile) -> R,
{
    TranslationConfig::new(
        ModelType::Marian,
        resource(ModelFile::Weights),
        resource(ModelFile::Config),
        resource(ModelFile::Vocab),
        Some(resource(ModelFile::SentencePiece)),
        [Language::English],
        Vec::<Language>::new(),
        device,
    )
}

impl TranslatorLoader for MarianLoader {
    type Translator = MarianTranslator;

    fn load(&self, target_language: &TargetLanguage) -> Result<MarianTranslator, BatchTranslateError> {
        let start = Instant::now();
        let model = TranslationModel::new(self.translation_config()?)?;
        info!(
            "Loaded model {} for target {} in {:.2}s",
            self.model_source,
            target_language,
            start.elapsed().as_secs_f32()
        );
        Ok(MarianTranslator { model })
    }
}

/// # Marian model translating tagged sentences
pub struct MarianTranslator {
    model: TranslationModel,
}

impl Translator for MarianTranslator {
    fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>, BatchTranslateError> {
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        let output = self
            .model
            .translate(&texts, None::<Language>, None::<Language>)?;
        Ok(output
            .into_iter()
            .map(|sentence| sentence.trim().to_string())
            .collect())
    }
}
