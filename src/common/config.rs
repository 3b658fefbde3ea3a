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
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Name of the directory holding the default configuration file, under the user configuration directory
pub const CONFIG_DIRECTORY_NAME: &str = "opus-batch-translate";

/// # Utility to deserialize JSON config files
pub trait Config
where
    for<'de> Self: Deserialize<'de>,
{
    /// Loads a `Config` object from a JSON file. The format is expected to be aligned with the fields
    /// of the implementing structure; fields absent from the file are left to the structure's `serde` defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - `Path` to the configuration JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use opus_batch_translate::pipelines::translation::BatchTranslatorConfig;
    /// use opus_batch_translate::Config;
    /// use std::path::Path;
    ///
    /// let config_path = Path::new("path/to/config.json");
    /// let config = BatchTranslatorConfig::from_file(config_path);
    /// ```
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BatchTranslateError> {
        let f = File::open(path.as_ref()).map_err(|error| {
            BatchTranslateError::IOError(format!(
                "could not open configuration file {}: {}",
                path.as_ref().display(),
                error
            ))
        })?;
        let br = BufReader::new(f);
        let config: Self = serde_json::from_reader(br)?;
        Ok(config)
    }
}

/// Location of the default configuration file (`<user config dir>/opus-batch-translate/config.json`).
/// Returns `None` if the platform does not expose a user configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(CONFIG_DIRECTORY_NAME);
        path.push("config.json");
        path
    })
}
