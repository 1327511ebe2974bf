//! Word-list decoding.

use crate::error::InputError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// One string per line.
    #[default]
    Lines,
    /// Top-level JSON array of strings.
    Json,
    /// Top-level YAML sequence of strings.
    Yaml,
}

/// Decode `content` into an ordered word list.
///
/// For [`InputFormat::Lines`] a single trailing newline does not yield an
/// extra empty word, but blank lines in between do: an empty string is a
/// valid input.
pub fn parse_words(content: &str, format: InputFormat) -> Result<Vec<String>, InputError> {
    match format {
        InputFormat::Lines => Ok(split_lines(content)),
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Yaml => {
            // An empty document is an empty list, not null.
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            Ok(serde_yaml::from_str(content)?)
        }
    }
}

fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
