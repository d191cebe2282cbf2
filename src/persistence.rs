// File: src/persistence.rs
use crate::core::types::CandidatePair;
use crate::error::{PortmanteauError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `first + second` line per pair.
    #[default]
    Text,
    /// A JSON array of `{ "first": ..., "second": ... }` objects.
    Json,
}

/// Renders every pair into one buffer so the file is written in a single call.
pub fn render(pairs: &[CandidatePair], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for pair in pairs {
                out.push_str(&pair.first);
                out.push_str(" + ");
                out.push_str(&pair.second);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(pairs)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes to a temporary file beside `path`, then renames it into place, so a
/// failed run never leaves a partial output file.
pub fn save_pairs(pairs: &[CandidatePair], format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = render(pairs, format)?;

    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(|e| PortmanteauError::io(parent_dir, e))?;

    let mut temp_file =
        NamedTempFile::new_in(parent_dir).map_err(|e| PortmanteauError::io(parent_dir, e))?;
    temp_file
        .write_all(rendered.as_bytes())
        .map_err(|e| PortmanteauError::io(temp_file.path(), e))?;
    temp_file
        .persist(path)
        .map_err(|e| PortmanteauError::io(path, e.error))?;
    Ok(())
}
