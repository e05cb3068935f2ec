//! Species dictionaries: blank-line separated blocks, each a species name followed by its adjacency list

use super::adjlist::{AdjListError, AdjListParser};
use crate::species::{Species, SpeciesDictionary};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::*;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read species dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("species {0:?} appears more than once in the dictionary")]
    Duplicate(String),
    #[error("in species {name:?}: {source}")]
    AdjList {
        name: String,
        #[source]
        source: AdjListError,
    },
}

/// Read and parse a dictionary file
#[instrument(level = "debug")]
pub fn load_dictionary(path: &Path) -> Result<SpeciesDictionary, DictionaryError> {
    let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dict = parse_dictionary(&text)?;
    info!(species = dict.len(), "loaded {}", path.display());
    Ok(dict)
}

/// Parse the contents of a dictionary file. Species keep the order they appear in.
pub fn parse_dictionary(text: &str) -> Result<SpeciesDictionary, DictionaryError> {
    let mut dict = SpeciesDictionary::new();
    let mut name: Option<&str> = None;
    let mut block_start = 0;
    let mut block_end = 0;
    let lines = text.lines().collect::<Vec<_>>();
    for (n, raw) in lines.iter().enumerate() {
        if raw.trim().is_empty() {
            if let Some(name) = name.take() {
                finish_block(&mut dict, name, &lines[block_start..block_end], block_start)?;
            }
            continue;
        }
        if name.is_none() {
            let text = raw.split("//").next().unwrap_or("").trim();
            // comment-only lines between blocks
            if text.is_empty() {
                continue;
            }
            name = Some(text);
            block_start = n + 1;
        }
        block_end = n + 1;
    }
    if let Some(name) = name {
        finish_block(&mut dict, name, &lines[block_start..block_end], block_start)?;
    }
    Ok(dict)
}

fn finish_block(
    dict: &mut SpeciesDictionary,
    name: &str,
    lines: &[&str],
    start: usize,
) -> Result<(), DictionaryError> {
    let body = lines.join("\n");
    let structures = AdjListParser::new(&body)
        // `start` is the 0-based index of the first body line
        .with_first_line(start + 1)
        .parse_variants()
        .map_err(|source| DictionaryError::AdjList {
            name: name.to_string(),
            source,
        })?;
    trace!(name, variants = structures.len(), "parsed species");
    if !dict.insert(Species::new(name.to_string(), structures)) {
        return Err(DictionaryError::Duplicate(name.to_string()));
    }
    Ok(())
}
