//! Post-processing for reaction flux diagrams: draw every species in a mechanism, then swap the
//! text labels in the Graphviz output for those pictures.

pub mod atom_info;
pub mod chemistry;
pub mod disp;
pub mod export;
pub mod graphviz;
pub mod molecule;
pub mod parse;
pub mod prettify;
pub mod species;

pub mod prelude {
    pub use crate::adjlist;
    pub use crate::atom_info::Element;
    pub use crate::chemistry::{BuiltinChemistry, Chemistry};
    pub use crate::disp::{fmt_as_svg, generate_smiles, SmilesError};
    pub use crate::export::{save_pictures, ExportOptions, ExportReport, LabelMode};
    pub use crate::molecule::{Atom, Bond, MoleculeGraph, Structure};
    pub use crate::parse::{AdjListParser, DictionaryError};
    pub use crate::prettify::{prettydot, PrettyDotError, PrettyOptions};
    pub use crate::species::{Species, SpeciesDictionary};
}

#[cfg(test)]
mod tests;
