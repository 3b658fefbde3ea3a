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
use crate::pipelines::translation::TargetLanguage;
use std::fs::{self, File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Output path for a target language.
///
/// A single target writes to `output_path` unchanged. Several targets each get their own file,
/// the language code being inserted before the extension: `out.txt` becomes `out.es.txt`.
pub fn output_path_for(
    output_path: &Path,
    target_language: &TargetLanguage,
    multiple_targets: bool,
) -> PathBuf {
    if !multiple_targets {
        return output_path.to_path_buf();
    }
    let stem = output_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match output_path.extension() {
        Some(extension) => format!(
            "{}.{}.{}",
            stem,
            target_language.code(),
            extension.to_string_lossy()
        ),
        None => format!("{}.{}", stem, target_language.code()),
    };
    output_path.with_file_name(file_name)
}

enum Destination {
    /// Written to a temporary file, renamed over the target on completion
    Staged { file: NamedTempFile, target: PathBuf },
    /// Written in place and flushed after each batch
    InPlace { file: File, path: PathBuf },
}

/// # Line-oriented writer for translated batches
pub struct OutputWriter {
    destination: Destination,
    lines_written: usize,
}

impl OutputWriter {
    /// Creates a writer staging the output in a temporary file of the destination directory.
    /// `path` is only replaced when `finish` is called.
    ///
    /// The output gets the permissions of the file it replaces, or the default permissions of a
    /// newly created file when `path` does not exist yet.
    pub fn create(path: &Path) -> Result<OutputWriter, BatchTranslateError> {
        let staging_error = |error: std::io::Error| {
            BatchTranslateError::IOError(format!(
                "could not create a temporary file next to {}: {}",
                path.display(),
                error
            ))
        };
        let file = staging_builder()
            .tempfile_in(parent_directory(path))
            .map_err(staging_error)?;
        match fs::metadata(path) {
            Ok(metadata) => file
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(staging_error)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => return Err(error.into()),
        }
        Ok(OutputWriter {
            destination: Destination::Staged {
                file,
                target: path.to_path_buf(),
            },
            lines_written: 0,
        })
    }

    /// Opens an existing (possibly partial) output for appending.
    ///
    /// An incomplete trailing line is truncated away. The number of complete lines already present
    /// is available from `lines_written`. A missing file is created empty. An output holding more
    /// than `max_lines` complete lines is rejected before anything is written to it.
    pub fn resume(path: &Path, max_lines: usize) -> Result<OutputWriter, BatchTranslateError> {
        let existing = match fs::read(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(error) => return Err(error.into()),
        };
        let complete_length = existing
            .iter()
            .rposition(|&byte| byte == b'\n')
            .map_or(0, |position| position + 1);
        let lines_written = existing[..complete_length]
            .iter()
            .filter(|&&byte| byte == b'\n')
            .count();
        if lines_written > max_lines {
            return Err(BatchTranslateError::ValueError(format!(
                "{} already contains {} lines but the input only has {} sentences",
                path.display(),
                lines_written,
                max_lines
            )));
        }

        let mut file = OpenOptions::new().create(true).write(true).open(path)?;
        if complete_length < existing.len() {
            log::warn!(
                "Truncating incomplete last line of {} ({} bytes)",
                path.display(),
                existing.len() - complete_length
            );
            file.set_len(complete_length as u64)?;
        }
        file.seek(SeekFrom::End(0))?;

        Ok(OutputWriter {
            destination: Destination::InPlace {
                file,
                path: path.to_path_buf(),
            },
            lines_written,
        })
    }

    /// Number of complete lines in the output so far, including lines found on resume
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Appends one line per translation, each terminated by `\n`.
    pub fn write_batch(&mut self, lines: &[String]) -> Result<(), BatchTranslateError> {
        if lines.is_empty() {
            return Ok(());
        }
        let mut buffer = lines.join("\n");
        buffer.push('\n');
        match &mut self.destination {
            Destination::Staged { file, .. } => file.write_all(buffer.as_bytes())?,
            Destination::InPlace { file, .. } => {
                file.write_all(buffer.as_bytes())?;
                file.flush()?;
            }
        }
        self.lines_written += lines.len();
        Ok(())
    }

    /// Completes the output, moving a staged file to its destination.
    pub fn finish(self) -> Result<PathBuf, BatchTranslateError> {
        match self.destination {
            Destination::Staged { mut file, target } => {
                file.flush()?;
                file.persist(&target)?;
                Ok(target)
            }
            Destination::InPlace { mut file, path } => {
                file.flush()?;
                file.sync_all()?;
                Ok(path)
            }
        }
    }
}

/// Temporary files are private (0600) by default, staged outputs start from 0666 minus the umask
/// like any other newly created file.
#[cfg(unix)]
fn staging_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn staging_builder() -> Builder<'static, 'static> {
    Builder::new()
}

fn parent_directory(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
