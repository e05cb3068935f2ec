//! A trimmed periodic table, plus the pseudo-elements that show up in mechanism dictionaries

use std::fmt::{self, Display, Formatter};
use ElemGroup::*;

/// Element group on the periodic table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemGroup {
    /// Alkali metal
    Alkali,
    /// Alkaline earth metal
    AlkEar,
    /// Transition metal
    Trans,
    /// Post-transition metal
    Poor,
    /// Metalloid
    Metoid,
    /// Nonmetal
    Nonmet,
    /// Halogen
    Halogn,
    /// Noble gas
    Noble,
    /// Catalyst surface site or wildcard
    Pseudo,
}

#[derive(Debug, Clone, Copy)]
pub struct ElementInfo {
    pub name: &'static str,
    pub sym: &'static str,
    pub protons: u8,
    pub group: ElemGroup,
    /// Normal valences for the SMILES organic subset, empty for everything else
    pub valences: &'static [u8],
}
impl ElementInfo {
    pub const fn new(
        name: &'static str,
        sym: &'static str,
        protons: u8,
        group: ElemGroup,
        valences: &'static [u8],
    ) -> Self {
        Self {
            name,
            sym,
            protons,
            group,
            valences,
        }
    }
}

/// Index the array with an [`Element`]
#[rustfmt::skip]
pub static ELEMENTS: &[ElementInfo] = &[
    ElementInfo::new("wildcard",      "R",  0,  Pseudo, &[]),
    ElementInfo::new("surface site",  "X",  0,  Pseudo, &[]),
    ElementInfo::new("hydrogen",      "H",  1,  Nonmet, &[]),
    ElementInfo::new("helium",        "He", 2,  Noble,  &[]),
    ElementInfo::new("lithium",       "Li", 3,  Alkali, &[]),
    ElementInfo::new("beryllium",     "Be", 4,  AlkEar, &[]),
    ElementInfo::new("boron",         "B",  5,  Metoid, &[3]),
    ElementInfo::new("carbon",        "C",  6,  Nonmet, &[4]),
    ElementInfo::new("nitrogen",      "N",  7,  Nonmet, &[3, 5]),
    ElementInfo::new("oxygen",        "O",  8,  Nonmet, &[2]),
    ElementInfo::new("fluorine",      "F",  9,  Halogn, &[1]),
    ElementInfo::new("neon",          "Ne", 10, Noble,  &[]),
    ElementInfo::new("sodium",        "Na", 11, Alkali, &[]),
    ElementInfo::new("magnesium",     "Mg", 12, AlkEar, &[]),
    ElementInfo::new("aluminum",      "Al", 13, Poor,   &[]),
    ElementInfo::new("silicon",       "Si", 14, Metoid, &[]),
    ElementInfo::new("phosphorus",    "P",  15, Nonmet, &[3, 5]),
    ElementInfo::new("sulfur",        "S",  16, Nonmet, &[2, 4, 6]),
    ElementInfo::new("chlorine",      "Cl", 17, Halogn, &[1]),
    ElementInfo::new("argon",         "Ar", 18, Noble,  &[]),
    ElementInfo::new("potassium",     "K",  19, Alkali, &[]),
    ElementInfo::new("calcium",       "Ca", 20, AlkEar, &[]),
    ElementInfo::new("iron",          "Fe", 26, Trans,  &[]),
    ElementInfo::new("cobalt",        "Co", 27, Trans,  &[]),
    ElementInfo::new("nickel",        "Ni", 28, Trans,  &[]),
    ElementInfo::new("copper",        "Cu", 29, Trans,  &[]),
    ElementInfo::new("zinc",          "Zn", 30, Trans,  &[]),
    ElementInfo::new("bromine",       "Br", 35, Halogn, &[1]),
    ElementInfo::new("krypton",       "Kr", 36, Noble,  &[]),
    ElementInfo::new("ruthenium",     "Ru", 44, Trans,  &[]),
    ElementInfo::new("rhodium",       "Rh", 45, Trans,  &[]),
    ElementInfo::new("palladium",     "Pd", 46, Trans,  &[]),
    ElementInfo::new("silver",        "Ag", 47, Trans,  &[]),
    ElementInfo::new("iodine",        "I",  53, Halogn, &[1]),
    ElementInfo::new("xenon",         "Xe", 54, Noble,  &[]),
    ElementInfo::new("platinum",      "Pt", 78, Trans,  &[]),
    ElementInfo::new("gold",          "Au", 79, Trans,  &[]),
];

/// A handle into [`ELEMENTS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(u8);
impl Element {
    pub const R: Self = Self(0);
    pub const X: Self = Self(1);
    pub const H: Self = Self(2);
    pub const C: Self = Self(7);

    pub fn from_symbol(sym: &str) -> Option<Self> {
        ELEMENTS
            .iter()
            .position(|e| e.sym == sym)
            .map(|i| Self(i as u8))
    }
    #[inline]
    pub fn info(self) -> &'static ElementInfo {
        &ELEMENTS[self.0 as usize]
    }
    #[inline]
    pub fn symbol(self) -> &'static str {
        self.info().sym
    }
    pub fn is_surface(self) -> bool {
        self == Self::X
    }
    /// True for the atoms that may be written without brackets in SMILES
    pub fn is_organic(self) -> bool {
        !self.info().valences.is_empty()
    }
}
impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.info().name)
        } else {
            f.write_str(self.symbol())
        }
    }
}
