//! Output rendering for grouped words.

use crate::grouper::AnagramGroup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One group per line, members separated by a space.
    #[default]
    Text,
    Json,
}

/// Render `groups` in `format`. With `with_keys`, JSON output carries each
/// group's canonical key; text output ignores it.
pub fn render_groups(
    groups: &[AnagramGroup],
    format: OutputFormat,
    with_keys: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for g in groups {
                out.push_str(&g.members().join(" "));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json if with_keys => serde_json::to_string_pretty(groups),
        OutputFormat::Json => {
            let plain: Vec<&[String]> = groups.iter().map(|g| g.members()).collect();
            serde_json::to_string_pretty(&plain)
        }
    }
}
