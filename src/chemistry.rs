//! The seam between the pipeline and whatever understands molecules

use crate::disp::{fmt_as_svg, generate_smiles, SmilesError};
use crate::molecule::Structure;
use crate::parse::{load_dictionary, DictionaryError};
use crate::species::SpeciesDictionary;
use std::io::{self, Write};
use std::path::Path;

/// Everything the pipeline needs from a chemistry toolkit
pub trait Chemistry {
    /// Read a species dictionary file
    fn load_species(&self, path: &Path) -> Result<SpeciesDictionary, DictionaryError>;
    /// Convert a structure to a SMILES string
    fn to_smiles(&self, structure: &Structure) -> Result<String, SmilesError>;
    /// Draw a structure to an image file
    fn draw(&self, structure: &Structure, path: &Path) -> io::Result<()>;
}
impl<C: Chemistry + ?Sized> Chemistry for &C {
    fn load_species(&self, path: &Path) -> Result<SpeciesDictionary, DictionaryError> {
        (**self).load_species(path)
    }
    fn to_smiles(&self, structure: &Structure) -> Result<String, SmilesError> {
        (**self).to_smiles(structure)
    }
    fn draw(&self, structure: &Structure, path: &Path) -> io::Result<()> {
        (**self).draw(structure, path)
    }
}

/// Adjacency-list dictionaries, the crate's own SMILES writer, and SVG depictions
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinChemistry;
impl Chemistry for BuiltinChemistry {
    fn load_species(&self, path: &Path) -> Result<SpeciesDictionary, DictionaryError> {
        load_dictionary(path)
    }
    fn to_smiles(&self, structure: &Structure) -> Result<String, SmilesError> {
        generate_smiles(structure)
    }
    fn draw(&self, structure: &Structure, path: &Path) -> io::Result<()> {
        let mut file = io::BufWriter::new(std::fs::File::create(path)?);
        write!(file, "{}", fmt_as_svg(structure))?;
        file.flush()
    }
}
