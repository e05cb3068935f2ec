//! Makes a prettier version of a flux diagram dot file.
//!
//! Species nodes whose label names a saved picture get the picture instead of the text, the
//! canvas is enlarged, and edge colors are remapped. Every line is rewritten on its own.

use ahash::AHashMap;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::*;

lazy_static::lazy_static! {
    static ref RE_SIZE: Regex = Regex::new(r#"size="5,6";page="5,6""#).unwrap();
    // the shape argument differs from what Cantera writes; a Cantera diagram needs `shape=box, `
    // dropped from this pattern
    static ref RE_NODE: Regex = Regex::new(
        r#"(?P<node>s\d+) \[ fontname="Helvetica", shape=box, label="(?P<label>[^"]*)"\];"#
    ).unwrap();
    static ref RE_PICTURE: Regex = Regex::new(r"^(?P<smiles>.+?)\.svg").unwrap();
    static ref RE_LABEL: Regex = Regex::new(r"^(?P<smiles>.+?)$").unwrap();
    static ref RE_EDGE_LABEL: Regex = Regex::new(r#"label\s*=\s*"\s*[\d.]+""#).unwrap();
    static ref RE_COLOR: Regex = Regex::new(r#"color="0\.7, (.*?), 0\.9""#).unwrap();
}

/// Every dot file has to start with this
pub const DIGRAPH_MARKER: &str = "digraph";

#[derive(Debug, Error)]
pub enum PrettyDotError {
    #[error("{} - not a digraph", .0.display())]
    NotDigraph(PathBuf),
    #[error("failed to read picture directory {}: {source}", .path.display())]
    Pictures {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyOptions {
    /// Directory holding the species pictures
    pub pictures: PathBuf,
    pub dot_file: PathBuf,
    /// Blank out the numeric labels on edges
    pub strip_line_labels: bool,
}
impl Default for PrettyOptions {
    fn default() -> Self {
        Self {
            pictures: PathBuf::from("./species_pictures"),
            dot_file: PathBuf::from("./overall_rxn_diagram.dot"),
            strip_line_labels: false,
        }
    }
}
impl PrettyOptions {
    pub fn new(pictures: impl Into<PathBuf>, dot_file: impl Into<PathBuf>) -> Self {
        Self {
            pictures: pictures.into(),
            dot_file: dot_file.into(),
            strip_line_labels: false,
        }
    }
    pub fn with_strip_line_labels(mut self, strip: bool) -> Self {
        self.strip_line_labels = strip;
        self
    }
}

/// Identifier to picture filename, built from one listing of the picture directory
#[derive(Debug, Clone, Default)]
pub struct PictureIndex {
    dir: PathBuf,
    pictures: AHashMap<String, String>,
}
impl PictureIndex {
    /// List `dir` once. Files that don't look like pictures are ignored.
    pub fn scan(dir: &Path) -> io::Result<Self> {
        let mut pictures = AHashMap::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                trace!("skipping non-UTF-8 file name {:?}", entry.file_name());
                continue;
            };
            if let Some(id) = picture_identifier(&name) {
                pictures.insert(id.to_string(), name);
            }
        }
        debug!("found {} pictures in {}", pictures.len(), dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            pictures,
        })
    }
    /// Build an index without touching the filesystem
    pub fn from_files<I, S>(dir: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pictures = files
            .into_iter()
            .map(Into::into)
            .filter_map(|name: String| {
                picture_identifier(&name).map(|id| (id.to_string(), name.clone()))
            })
            .collect();
        Self {
            dir: dir.into(),
            pictures,
        }
    }
    pub fn get(&self, id: &str) -> Option<&str> {
        self.pictures.get(id).map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.pictures.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }
    /// The path written into `image=` attributes
    pub fn image_path(&self, file: &str) -> String {
        self.dir.join(file).display().to_string()
    }
}

/// The identifier a picture filename was saved under: everything before the first `.svg`
pub fn picture_identifier(file_name: &str) -> Option<&str> {
    RE_PICTURE
        .captures(file_name)
        .and_then(|c| c.name("smiles"))
        .map(|m| m.as_str())
}

/// `foo/bar.dot` becomes `foo/bar-pretty.dot`
pub fn pretty_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".dot").unwrap_or(&name);
    path.with_file_name(format!("{stem}-pretty.dot"))
}

/// The image node declaration for a species node line, if its label has a picture
fn node_replacement(line: &str, pictures: &PictureIndex) -> Option<String> {
    let caps = RE_NODE.captures(line)?;
    let label = caps.name("label")?.as_str();
    let id = RE_LABEL.captures(label)?.name("smiles")?.as_str();
    let file = pictures.get(id)?;
    let node = caps.name("node")?.as_str();
    trace!(node, id, file, "replacing label with picture");
    let ending = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
    Some(format!(
        "{node} [ image=\"{}\" label=\"\" width=\"1.0\" height=\"1.0\" imagescale=true fixedsize=false color=\"none\" ];{ending}",
        pictures.image_path(file)
    ))
}

/// Rewrite a single line. `line` keeps its line ending; a replaced node line ends the same
/// way, or with `\n` if the input had none.
pub fn rewrite_line(line: &str, pictures: &PictureIndex, strip_line_labels: bool) -> String {
    let mut line = RE_SIZE
        .replace_all(line, r#"size="12,12";page="12,12""#)
        .into_owned();
    if let Some(replacement) = node_replacement(&line, pictures) {
        line = replacement;
    }
    if strip_line_labels {
        line = RE_EDGE_LABEL.replace_all(&line, r#"label="""#).into_owned();
    }
    // literal text, the product is never evaluated
    RE_COLOR
        .replace_all(&line, r#"color="1.0, ${1}, 0.7*${1}""#)
        .into_owned()
}

/// Rewrite `opts.dot_file` into its `-pretty` sibling, returning the new path
#[instrument(skip_all, fields(dot = %opts.dot_file.display()))]
pub fn prettydot(opts: &PrettyOptions) -> Result<PathBuf, PrettyDotError> {
    if opts.strip_line_labels {
        info!("stripping edge (line) labels");
    }
    let pictures =
        PictureIndex::scan(&opts.pictures).map_err(|source| PrettyDotError::Pictures {
            path: opts.pictures.clone(),
            source,
        })?;

    let path = &opts.dot_file;
    let read_err = |source| PrettyDotError::Read {
        path: path.clone(),
        source,
    };
    let mut infile = BufReader::new(File::open(path).map_err(read_err)?);
    let mut line = String::new();
    infile.read_line(&mut line).map_err(read_err)?;
    if !line.starts_with(DIGRAPH_MARKER) {
        return Err(PrettyDotError::NotDigraph(path.clone()));
    }

    let prettypath = pretty_path(path);
    let write_err = |source| PrettyDotError::Write {
        path: prettypath.clone(),
        source,
    };
    let mut outfile = BufWriter::new(File::create(&prettypath).map_err(write_err)?);
    let mut replaced = 0usize;
    loop {
        let out = rewrite_line(&line, &pictures, opts.strip_line_labels);
        if out.contains("image=\"") && !line.contains("image=\"") {
            replaced += 1;
        }
        outfile.write_all(out.as_bytes()).map_err(write_err)?;
        line.clear();
        if infile.read_line(&mut line).map_err(read_err)? == 0 {
            break;
        }
    }
    outfile.flush().map_err(write_err)?;
    debug!(replaced, "replaced node labels with pictures");
    info!("Graph saved to: {}", prettypath.display());
    Ok(prettypath)
}
