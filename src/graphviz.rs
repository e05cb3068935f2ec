//! Hands the pretty dot file to Graphviz for a PDF

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::*;

pub const DEFAULT_DPI: u32 = 300;

#[derive(Debug, Error)]
pub enum GraphvizError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with {status} while rendering {}", .input.display())]
    Failed {
        program: String,
        input: PathBuf,
        status: std::process::ExitStatus,
    },
}

/// `foo-pretty.dot` becomes `foo-pretty.pdf`
pub fn pdf_path(dot: &Path) -> PathBuf {
    dot.with_extension("pdf")
}

/// Build the `dot` invocation without running it
pub fn dot_command(program: &str, dot: &Path, dpi: u32) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg(dot)
        .arg("-Tpdf")
        .arg("-o")
        .arg(pdf_path(dot))
        .arg(format!("-Gdpi={dpi}"));
    cmd
}

/// Run `dot` on a file, returning the PDF path
#[instrument(level = "debug")]
pub fn render_pdf(dot: &Path, dpi: u32) -> Result<PathBuf, GraphvizError> {
    render_pdf_with("dot", dot, dpi)
}

/// Like [`render_pdf`], with a different Graphviz executable
pub fn render_pdf_with(program: &str, dot: &Path, dpi: u32) -> Result<PathBuf, GraphvizError> {
    let status = dot_command(program, dot, dpi)
        .status()
        .map_err(|source| GraphvizError::Spawn {
            program: program.to_string(),
            source,
        })?;
    if !status.success() {
        return Err(GraphvizError::Failed {
            program: program.to_string(),
            input: dot.to_path_buf(),
            status,
        });
    }
    let pdf = pdf_path(dot);
    info!("PDF saved to: {}", pdf.display());
    Ok(pdf)
}
