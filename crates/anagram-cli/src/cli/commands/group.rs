//! CLI command: anagram group
//!
//! Usage:
//!   anagram group [INPUT] [--input-format lines|json|yaml] [--format text|json]
//!
//! Examples:
//!   anagram group words.txt
//!   cat words.txt | anagram group --order size
//!   anagram group words.json --input-format json --format json --with-keys -o groups.json

use crate::cli::args::{GroupArgs, OutputFormatArg};
use crate::exit_codes::EXIT_SUCCESS;
use anagram_core::{parse_words, render_groups, AnagramGrouper, KeyMode};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub async fn run(args: GroupArgs) -> Result<i32> {
    let content = read_input(&args.input).await?;

    let words = parse_words(&content, args.input_format.into())
        .with_context(|| format!("Failed to parse word list: {}", args.input.display()))?;

    let mode = if args.bytes {
        KeyMode::Bytes
    } else {
        KeyMode::Chars
    };
    let groups = AnagramGrouper::new()
        .key_mode(mode)
        .order(args.order.into())
        .group(&words);

    if args.with_keys && args.format == OutputFormatArg::Text {
        tracing::warn!("--with-keys only affects json output; ignoring");
    }
    let rendered = render_groups(&groups, args.format.into(), args.with_keys)
        .context("Failed to render groups")?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, rendered.as_bytes())
                .await
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!(
                "Wrote {} groups from {} words to {}",
                groups.len(),
                words.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(rendered.as_bytes())
                .await
                .context("Failed to write to stdout")?;
            stdout.flush().await.context("Failed to write to stdout")?;
        }
    }

    Ok(EXIT_SUCCESS)
}

async fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read word list from stdin")?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read word list: {}", path.display()))
}
