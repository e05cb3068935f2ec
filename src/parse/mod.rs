pub mod adjlist;
pub mod dictionary;

pub use adjlist::{AdjListError, AdjListParser};
pub use dictionary::{load_dictionary, parse_dictionary, DictionaryError};

use std::fmt::{self, Display, Formatter};

/// Prints a 1-based line number, or "unknown line" for `usize::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNo(pub usize);
impl Display for LineNo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 == usize::MAX {
            f.write_str("unknown line")
        } else {
            write!(f, "line {}", self.0)
        }
    }
}
