//! Utilities for modeling molecules as graphs
// This top-level file handles definitions; parsing is in `parse::adjlist`

use crate::atom_info::Element;
use c_enum::*;
use petgraph::prelude::*;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// An atom in the molecule graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atom {
    pub element: Element,
    pub unpaired: u8,
    /// Lone pairs, `None` when the dictionary used the old format
    pub lone_pairs: Option<u8>,
    pub charge: i8,
    /// Reaction label, the `n` in `*n`
    pub label: Option<u8>,
}
impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            unpaired: 0,
            lone_pairs: None,
            charge: 0,
            label: None,
        }
    }
    pub fn with_unpaired(mut self, unpaired: u8) -> Self {
        self.unpaired = unpaired;
        self
    }
    pub fn with_charge(mut self, charge: i8) -> Self {
        self.charge = charge;
        self
    }
    pub fn is_hydrogen(&self) -> bool {
        self.element == Element::H
    }
}
impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.element, f)?;
        match self.charge {
            0 => {}
            1 => f.write_str("+")?,
            -1 => f.write_str("-")?,
            n => write!(f, "{n:+}")?,
        }
        Ok(())
    }
}

c_enum! {
    /// A bond between atoms in the molecule graph
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Bond: u8 {
        /// Van der Waals or hydrogen bond, not drawn as a covalent bond
        Non,
        Single,
        Double,
        Triple,
        Quad,
        Aromatic,
    }
}
impl Bond {
    pub fn bond_count(self) -> f32 {
        match self {
            Self::Single => 1f32,
            Self::Double => 2f32,
            Self::Triple => 3f32,
            Self::Quad => 4f32,
            Self::Aromatic => 1.5f32,
            _ => 0f32,
        }
    }
    pub fn is_covalent(self) -> bool {
        self != Self::Non
    }
    pub fn as_static_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::Quad => "quad",
            Self::Aromatic => "aromatic",
            _ => "non",
        }
    }
}
impl Display for Bond {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_static_str())
    }
}

/// A molecule graph is an undirected graph between atoms, connected with bonds
pub type MoleculeGraph = UnGraph<Atom, Bond>;

/// One structural variant of a species, as read from an adjacency list.
///
/// Hydrogens are explicit atoms here, unlike in SMILES.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    pub graph: MoleculeGraph,
    pub multiplicity: Option<u8>,
}
impl Structure {
    pub fn new(graph: MoleculeGraph) -> Self {
        Self {
            graph,
            multiplicity: None,
        }
    }
    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    /// Hill-ordered element counts: carbon, then hydrogen, then everything else alphabetically.
    /// Without carbon, everything is alphabetical.
    pub fn element_counts(&self) -> Vec<(Element, usize)> {
        let mut counts = BTreeMap::<&'static str, (Element, usize)>::new();
        for atom in self.graph.node_weights() {
            counts.entry(atom.element.symbol()).or_insert((atom.element, 0)).1 += 1;
        }
        let mut out = Vec::with_capacity(counts.len());
        if let Some(c) = counts.remove("C") {
            out.push(c);
            if let Some(h) = counts.remove("H") {
                out.push(h);
            }
        }
        out.extend(counts.into_values());
        out
    }
    pub fn charge(&self) -> i32 {
        self.graph.node_weights().map(|a| a.charge as i32).sum()
    }
}
/// Formats as the molecular formula, e.g. `CH4` or `HX`
impl Display for Structure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (elem, n) in self.element_counts() {
            Display::fmt(&elem, f)?;
            if n != 1 {
                write!(f, "{n}")?;
            }
        }
        match self.charge() {
            0 => Ok(()),
            1 => f.write_str("+"),
            -1 => f.write_str("-"),
            n => write!(f, "{n:+}"),
        }
    }
}
