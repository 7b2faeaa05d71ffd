//! Text input for the analyzer.
//!
//! Bytes that are not valid UTF-8 are replaced with U+FFFD, so every file
//! yields a result.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Read the text to analyze from `path`, or from stdin when `path` is `None`
/// or `-`.
///
/// # Errors
///
/// Returns an error when the file or stdin cannot be read.
pub fn read_text_source(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "reading text file");
            fs::read(path).with_context(|| format!("read {}", path.display()))?
        }
        _ => {
            info!("reading text from stdin");
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("read stdin")?;
            buffer
        }
    };
    Ok(decode_text(bytes))
}

/// Decode raw bytes, replacing invalid UTF-8 sequences.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            warn!(
                valid_up_to = error.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    }
}
