use clap::{Args, Parser, Subcommand, ValueEnum};
use fluxdot::chemistry::BuiltinChemistry;
use fluxdot::export::{save_pictures, ExportError, ExportOptions, LabelMode};
use fluxdot::graphviz::{render_pdf, GraphvizError, DEFAULT_DPI};
use fluxdot::prettify::{prettydot, PrettyDotError, PrettyOptions};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, ValueEnum)]
enum Label {
    #[default]
    Smiles,
    #[value(alias = "index")]
    Name,
}
impl From<Label> for LabelMode {
    fn from(value: Label) -> Self {
        match value {
            Label::Smiles => LabelMode::Smiles,
            Label::Name => LabelMode::Name,
        }
    }
}

/// A `NAME=LABEL` pair
fn parse_override(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=LABEL, got {s:?}"))
}

#[derive(Debug, Args)]
struct PictureArgs {
    /// Species dictionary to read
    #[arg(long, default_value = "./species_dictionary.txt")]
    dictionary: PathBuf,
    /// Directory to save the pictures in
    #[arg(long = "out", default_value = "./species_pictures")]
    out_dir: PathBuf,
    /// Redraw pictures that already exist
    #[arg(long)]
    overwrite: bool,
    /// What to name the pictures after
    #[arg(long, value_enum, default_value_t)]
    label: Label,
    /// Fixed picture label for a species, as NAME=LABEL
    #[arg(long = "override", value_parser = parse_override)]
    overrides: Vec<(String, String)>,
    /// Don't apply the built-in label fixes
    #[arg(long)]
    no_default_overrides: bool,
}
impl PictureArgs {
    fn options(&self) -> ExportOptions {
        let mut opts = ExportOptions::new(&self.dictionary, &self.out_dir)
            .with_overwrite(self.overwrite)
            .with_label(self.label.into());
        if self.no_default_overrides {
            opts = opts.without_default_overrides();
        }
        for (name, label) in &self.overrides {
            opts = opts.with_override(name, label);
        }
        opts
    }
}

#[derive(Debug, Args)]
struct PrettyArgs {
    /// Dot file to rewrite
    #[arg(long, default_value = "./overall_rxn_diagram.dot")]
    dot: PathBuf,
    /// Blank out the numeric labels on edges
    #[arg(long)]
    strip_line_labels: bool,
    /// Run Graphviz on the result to get a PDF
    #[arg(long)]
    pdf: bool,
    /// Resolution for the PDF
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: u32,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Draw every species in a dictionary
    Pictures(PictureArgs),
    /// Swap species labels in a dot file for their pictures
    Prettify {
        /// Directory the pictures are in
        #[arg(long, default_value = "./species_pictures")]
        pictures: PathBuf,
        #[command(flatten)]
        pretty: PrettyArgs,
    },
    /// Draw the pictures, then rewrite the dot file with them
    Run {
        #[command(flatten)]
        pictures: PictureArgs,
        #[command(flatten)]
        pretty: PrettyArgs,
    },
}

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Pretty(#[from] PrettyDotError),
    #[error(transparent)]
    Graphviz(#[from] GraphvizError),
}

fn prettify(pictures: PathBuf, args: &PrettyArgs) -> Result<(), CliError> {
    let opts = PrettyOptions::new(pictures, &args.dot).with_strip_line_labels(args.strip_line_labels);
    let out = prettydot(&opts)?;
    if args.pdf {
        render_pdf(&out, args.dpi)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let chem = BuiltinChemistry;
    match cli.cmd {
        Cmd::Pictures(args) => {
            save_pictures(&args.options(), &chem)?;
        }
        Cmd::Prettify { pictures, pretty } => prettify(pictures, &pretty)?,
        Cmd::Run { pictures, pretty } => {
            let opts = pictures.options();
            save_pictures(&opts, &chem)?;
            prettify(opts.out_dir, &pretty)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let targets = match env::var("FLUXDOT_LOG") {
        Ok(name) => Targets::from_str(&name).unwrap_or_else(|e| {
            eprintln!("Error in FLUXDOT_LOG environment variable: {e}");
            Targets::new().with_default(LevelFilter::INFO)
        }),
        Err(env::VarError::NotPresent) => Targets::new().with_default(LevelFilter::INFO),
        Err(env::VarError::NotUnicode(_)) => {
            eprintln!("Error in FLUXDOT_LOG environment variable: not valid UTF-8");
            Targets::new().with_default(LevelFilter::INFO)
        }
    };
    tracing_subscriber::registry()
        .with(targets)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
