//! Saves a folder full of molecule pictures, one per species, for the pretty dot files

use crate::chemistry::Chemistry;
use crate::parse::DictionaryError;
use crate::species::SpeciesDictionary;
use ahash::AHashMap;
use itertools::Itertools;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::*;

/// Extension of every picture the exporter writes
pub const PICTURE_EXT: &str = "svg";

/// Species whose SMILES conversion is known to lose information.
/// `HX(5)` comes out as `[Pt]` because the hydrogen gets dropped.
pub const DEFAULT_OVERRIDES: &[(&str, &str)] = &[("HX(5)", "H[Pt]")];

/// What a picture is named after, and so what the dot labels have to contain to match it
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelMode {
    /// The SMILES string of the species' first structure
    #[default]
    Smiles,
    /// The dictionary name, which carries the species index, e.g. `CH4(3)`
    Name,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("failed to create picture directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to draw {}: {source}", .path.display())]
    Draw {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub dictionary: PathBuf,
    pub out_dir: PathBuf,
    /// Redraw pictures that are already there
    pub overwrite: bool,
    pub label: LabelMode,
    /// Fixed labels by species name, checked before any conversion
    pub overrides: AHashMap<String, String>,
    /// Apply [`DEFAULT_OVERRIDES`] when labels are SMILES
    pub default_overrides: bool,
}
impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("./species_dictionary.txt"),
            out_dir: PathBuf::from("./species_pictures"),
            overwrite: false,
            label: LabelMode::Smiles,
            overrides: AHashMap::new(),
            default_overrides: true,
        }
    }
}
impl ExportOptions {
    pub fn new(dictionary: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            dictionary: dictionary.into(),
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
    pub fn with_label(mut self, label: LabelMode) -> Self {
        self.label = label;
        self
    }
    pub fn with_override(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), label.into());
        self
    }
    pub fn without_default_overrides(mut self) -> Self {
        self.default_overrides = false;
        self
    }
    /// The overrides a run actually uses. The built-in ones only fix SMILES conversions, so
    /// they're left out when pictures are named after species.
    pub fn label_overrides(&self) -> AHashMap<String, String> {
        let mut out = AHashMap::new();
        if self.default_overrides && self.label == LabelMode::Smiles {
            out.extend(
                DEFAULT_OVERRIDES
                    .iter()
                    .map(|&(k, v)| (k.to_string(), v.to_string())),
            );
        }
        out.extend(self.overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

/// Which pictures a run touched
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Map every species name to the label its picture is saved under, in dictionary order.
///
/// Species with more than one structure get all of them logged, and the first one wins.
/// If a structure can't be converted to SMILES, its formula is used instead, which means the
/// picture probably won't match anything in the dot file, but the rest of the run goes on.
pub fn canonical_labels<C: Chemistry>(
    dict: &SpeciesDictionary,
    mode: LabelMode,
    overrides: &AHashMap<String, String>,
    chem: &C,
) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(dict.len());
    for species in dict {
        if let Some(label) = overrides.get(&species.name) {
            out.push((species.name.clone(), label.clone()));
            continue;
        }
        if mode == LabelMode::Name {
            out.push((species.name.clone(), species.name.clone()));
            continue;
        }
        if species.structures.len() > 1 {
            warn!(
                "there are {} duplicate structures for {}: {}",
                species.structures.len(),
                species.name,
                species
                    .structures
                    .iter()
                    .map(|s| chem.to_smiles(s).unwrap_or_else(|_| s.to_string()))
                    .join(", ")
            );
        }
        let Some(first) = species.primary() else {
            warn!("{} has no structure, using its name as a label", species.name);
            out.push((species.name.clone(), species.name.clone()));
            continue;
        };
        let label = match chem.to_smiles(first) {
            Ok(smiles) => smiles,
            Err(err) => {
                warn!(
                    "cannot convert {} ({first}) to SMILES, using its formula: {err}",
                    species.name
                );
                first.to_string()
            }
        };
        out.push((species.name.clone(), label));
    }
    out
}

/// Path of the picture for a label
pub fn picture_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("{label}.{PICTURE_EXT}"))
}

/// Draw every species in the dictionary into `opts.out_dir`.
///
/// Pictures that already exist are left alone unless `opts.overwrite` is set. Any error from
/// drawing stops the run.
#[instrument(skip_all, fields(dictionary = %opts.dictionary.display(), out = %opts.out_dir.display()))]
pub fn save_pictures<C: Chemistry>(
    opts: &ExportOptions,
    chem: &C,
) -> Result<ExportReport, ExportError> {
    let dict = chem.load_species(&opts.dictionary)?;
    let labels = canonical_labels(&dict, opts.label, &opts.label_overrides(), chem);
    std::fs::create_dir_all(&opts.out_dir).map_err(|source| ExportError::CreateDir {
        path: opts.out_dir.clone(),
        source,
    })?;
    let mut report = ExportReport::default();
    for (species, (_, label)) in dict.iter().zip(&labels) {
        let path = picture_path(&opts.out_dir, label);
        if !opts.overwrite && path.exists() {
            debug!("{} already exists, skipping {}", path.display(), species.name);
            report.skipped.push(path);
            continue;
        }
        let Some(structure) = species.primary() else {
            continue;
        };
        chem.draw(structure, &path)
            .map_err(|source| ExportError::Draw {
                path: path.clone(),
                source,
            })?;
        debug!("drew {} to {}", species.name, path.display());
        report.written.push(path);
    }
    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "saved species pictures to {}",
        opts.out_dir.display()
    );
    Ok(report)
}
