pub mod color;
pub mod layout;
pub mod smiles;
pub mod svg;

pub use smiles::{generate_smiles, SmilesError};
pub use svg::{fmt_as_svg, SvgFormatter};
