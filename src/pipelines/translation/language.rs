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

use crate::common::error::BatchTranslateError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// # Target language of a translation
///
/// Thin wrapper around a language code as understood by multilingual Opus-MT models (e.g. `es`,
/// `fr`, `pt_br`). The code is checked for its shape only: codes unknown to the model are
/// forwarded unchanged and the model falls back to its own behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetLanguage(pub(crate) String);

impl TargetLanguage {
    /// Creates a new `TargetLanguage` from a code made of ASCII alphanumerics, `_` or `-`.
    ///
    /// # Example
    ///
    /// ```
    /// use opus_batch_translate::pipelines::translation::TargetLanguage;
    ///
    /// let spanish = TargetLanguage::new("es").unwrap();
    /// assert_eq!(spanish.marker(), ">>es<<");
    /// assert!(TargetLanguage::new(">>es<<").is_err());
    /// ```
    pub fn new(code: &str) -> Result<TargetLanguage, BatchTranslateError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(BatchTranslateError::ValueError(
                "empty target language code".to_string(),
            ));
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(BatchTranslateError::ValueError(format!(
                "invalid target language code {:?}",
                code
            )));
        }
        Ok(TargetLanguage(code.to_string()))
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Marker token selecting the output language of a multilingual Marian model
    pub fn marker(&self) -> String {
        format!(">>{}<<", self.0)
    }

    /// Prefixes a sentence with the target language marker
    pub fn tag(&self, sentence: &str) -> String {
        format!("{} {}", self.marker(), sentence)
    }
}

/// Parses a comma-separated list of language codes (e.g. `es,fr,it`). Empty items are ignored.
pub fn parse_language_list(codes: &str) -> Result<Vec<TargetLanguage>, BatchTranslateError> {
    codes
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(TargetLanguage::new)
        .collect()
}

impl FromStr for TargetLanguage {
    type Err = BatchTranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetLanguage::new(s)
    }
}

impl TryFrom<String> for TargetLanguage {
    type Error = BatchTranslateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TargetLanguage::new(&value)
    }
}

impl From<TargetLanguage> for String {
    fn from(language: TargetLanguage) -> Self {
        language.0
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
