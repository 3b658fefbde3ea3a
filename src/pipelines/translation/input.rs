use crate::common::error::BatchTranslateError;
use std::fs;
use std::path::Path;

/// Reads the sentences to translate from a newline-delimited UTF-8 file.
///
/// # Arguments
///
/// * `path` - input file, one sentence per line
/// * `skip_header` - discard the first line of the file
///
/// # Returns
///
/// * `Vec<String>` sentences with trailing whitespace removed, in file order
pub fn read_sentences<P: AsRef<Path>>(
    path: P,
    skip_header: bool,
) -> Result<Vec<String>, BatchTranslateError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|error| {
        BatchTranslateError::IOError(format!("could not read {}: {}", path.display(), error))
    })?;
    Ok(parse_sentences(&content, skip_header))
}

/// Splits file content into sentences. A final line terminator does not start a new sentence,
/// blank lines inside the body are kept as empty sentences.
pub fn parse_sentences(content: &str, skip_header: bool) -> Vec<String> {
    let header_lines = if skip_header { 1 } else { 0 };
    content
        .lines()
        .skip(header_lines)
        .map(|line| line.trim_end().to_string())
        .collect()
}
