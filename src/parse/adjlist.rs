use super::LineNo;
use crate::atom_info::Element;
use crate::molecule::*;
use atoi::{FromRadix10Checked, FromRadix10SignedChecked};
use petgraph::prelude::*;
use thiserror::Error;
use tracing::*;
use AdjListErrorKind::*;

#[macro_export]
macro_rules! adjlist {
    ($adjlist:literal) => {
        $crate::parse::adjlist::AdjListParser::new($adjlist)
            .parse()
            .expect(concat!("Failed to parse adjacency list ", $adjlist))
    };
}

/// Inner enum for `AdjListError`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjListErrorKind {
    #[error("{0:?} is not a recognized element")]
    UnknownElement(String),
    #[error("{0:?} is not a recognized bond order")]
    UnknownBond(String),
    #[error("unexpected token {0:?}")]
    BadToken(String),
    #[error("expected atom {expected}, found {found:?}")]
    BadAtomIndex { expected: usize, found: String },
    #[error("expected an element after the atom index")]
    MissingElement,
    #[error("bond to atom {0}, which doesn't exist")]
    DanglingBond(usize),
    #[error("atom {0} is bonded to itself")]
    SelfBond(usize),
    #[error("bond {0}-{1} is only listed on one side")]
    OneSidedBond(usize, usize),
    #[error("bond {0}-{1} is {2} on one side and {3} on the other")]
    BondMismatch(usize, usize, Bond, Bond),
    #[error("invalid multiplicity {0:?}")]
    BadMultiplicity(String),
    #[error("no atoms were given")]
    Empty,
}

/// Something went wrong trying to parse an adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("an error occured at {} in the adjacency list: {kind}", LineNo(*.line))]
pub struct AdjListError {
    pub line: usize,
    pub kind: AdjListErrorKind,
}
impl AdjListError {
    /// Convenience method
    pub const fn new(line: usize, kind: AdjListErrorKind) -> Self {
        Self { line, kind }
    }
}

fn parse_unsigned<I: FromRadix10Checked>(s: &str) -> Option<I> {
    let (n, used) = I::from_radix_10_checked(s.as_bytes());
    (used != 0 && used == s.len()).then_some(n).flatten()
}
fn parse_signed<I: FromRadix10SignedChecked>(s: &str) -> Option<I> {
    let (n, used) = I::from_radix_10_signed_checked(s.as_bytes());
    (used != 0 && used == s.len()).then_some(n).flatten()
}

/// Parse a bond order, either RMG's letter codes or a numeric order
pub fn parse_bond_order(order: &str) -> Option<Bond> {
    match order {
        "S" | "1" => Some(Bond::Single),
        "D" | "2" => Some(Bond::Double),
        "T" | "3" => Some(Bond::Triple),
        "Q" | "4" => Some(Bond::Quad),
        "B" | "1.5" => Some(Bond::Aromatic),
        "vdW" | "H" | "R" | "0" => Some(Bond::Non),
        _ => None,
    }
}

/// One atom line, before bonds are cross-checked
#[derive(Debug, Clone)]
struct AtomLine {
    line: usize,
    atom: Atom,
    bonds: Vec<(usize, Bond)>,
}

#[derive(Debug, Default)]
struct Pending {
    atoms: Vec<AtomLine>,
    multiplicity: Option<u8>,
    start: usize,
}

/// Parser for RMG-style adjacency lists.
///
/// Both the current (`1 C u0 p0 c0 {2,S}`) and the old (`1 C 0 {2,S}`) atom formats are accepted.
/// A block where the atom numbering restarts at 1 holds more than one structure; each one is
/// returned as a separate variant.
#[derive(Debug, Clone)]
pub struct AdjListParser<'a> {
    pub input: &'a str,
    /// Line number of the first line of `input`, used for error messages
    pub first_line: usize,
}
impl<'a> AdjListParser<'a> {
    /// Create a new parser from an input string
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            first_line: 1,
        }
    }

    pub fn with_first_line(mut self, first_line: usize) -> Self {
        self.first_line = first_line;
        self
    }

    /// Parse the input, returning only the first structure
    pub fn parse(&self) -> Result<Structure, AdjListError> {
        let mut variants = self.parse_variants()?;
        Ok(variants.swap_remove(0))
    }

    /// Parse every structure in the input. The result is never empty.
    #[instrument(level = "trace", skip(self))]
    pub fn parse_variants(&self) -> Result<Vec<Structure>, AdjListError> {
        let mut out = Vec::new();
        let mut pending = Pending {
            start: self.first_line,
            ..Default::default()
        };
        for (n, raw) in self.input.lines().enumerate() {
            let line = self.first_line + n;
            let text = raw.split("//").next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }
            if let Some(rest) = text.strip_prefix("multiplicity") {
                if !pending.atoms.is_empty() {
                    out.push(Self::finish(std::mem::take(&mut pending))?);
                }
                pending.start = line;
                pending.multiplicity = Some(Self::parse_multiplicity(rest.trim(), line)?);
                continue;
            }
            let atom = Self::parse_atom_line(text, line)?;
            if atom.0 == 1 && !pending.atoms.is_empty() {
                out.push(Self::finish(std::mem::take(&mut pending))?);
                pending.start = line;
            }
            let expected = pending.atoms.len() + 1;
            if atom.0 != expected {
                return Err(AdjListError::new(
                    line,
                    BadAtomIndex {
                        expected,
                        found: atom.0.to_string(),
                    },
                ));
            }
            pending.atoms.push(atom.1);
        }
        if !pending.atoms.is_empty() || out.is_empty() {
            out.push(Self::finish(pending)?);
        }
        Ok(out)
    }

    fn parse_multiplicity(text: &str, line: usize) -> Result<u8, AdjListError> {
        // `[1,3]` lists the allowed multiplicities; a species only ever has the first
        let first = text
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(',')
            .next()
            .unwrap_or("")
            .trim();
        parse_unsigned(first)
            .filter(|&m| m > 0)
            .ok_or_else(|| AdjListError::new(line, BadMultiplicity(text.to_string())))
    }

    fn parse_atom_line(text: &str, line: usize) -> Result<(usize, AtomLine), AdjListError> {
        let mut tokens = text.split_whitespace().peekable();
        let idx_tok = tokens.next().unwrap_or("");
        let index = parse_unsigned::<usize>(idx_tok).ok_or_else(|| {
            AdjListError::new(
                line,
                BadAtomIndex {
                    expected: 0,
                    found: idx_tok.to_string(),
                },
            )
        })?;
        let label = match tokens.peek() {
            Some(tok) if tok.starts_with('*') => {
                let tok = tokens.next().unwrap_or("*");
                Some(parse_unsigned(&tok[1..]).unwrap_or(0))
            }
            _ => None,
        };
        let sym = tokens
            .next()
            .ok_or_else(|| AdjListError::new(line, MissingElement))?;
        let element = Element::from_symbol(sym)
            .ok_or_else(|| AdjListError::new(line, UnknownElement(sym.to_string())))?;
        let mut atom = Atom::new(element);
        atom.label = label;
        let mut bonds = Vec::new();
        for tok in tokens {
            let bad = || AdjListError::new(line, BadToken(tok.to_string()));
            if let Some(inner) = tok.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
                let (other, order) = inner.split_once(',').ok_or_else(bad)?;
                let other = parse_unsigned::<usize>(other.trim()).ok_or_else(bad)?;
                let order = order.trim();
                let bond = parse_bond_order(order)
                    .ok_or_else(|| AdjListError::new(line, UnknownBond(order.to_string())))?;
                bonds.push((other, bond));
            } else if let Some(u) = tok.strip_prefix('u') {
                atom.unpaired = parse_unsigned(u).ok_or_else(bad)?;
            } else if let Some(p) = tok.strip_prefix('p') {
                atom.lone_pairs = Some(parse_unsigned(p).ok_or_else(bad)?);
            } else if let Some(c) = tok.strip_prefix('c') {
                atom.charge = parse_signed(c).ok_or_else(bad)?;
            } else {
                // old format: bare radical count, sometimes with an S/T spin suffix
                let digits = tok.trim_end_matches(['S', 'T']);
                atom.unpaired = parse_unsigned(digits).ok_or_else(bad)?;
            }
        }
        Ok((index, AtomLine { line, atom, bonds }))
    }

    fn finish(pending: Pending) -> Result<Structure, AdjListError> {
        if pending.atoms.is_empty() {
            return Err(AdjListError::new(pending.start, Empty));
        }
        let mut graph = MoleculeGraph::with_capacity(pending.atoms.len(), pending.atoms.len());
        for a in &pending.atoms {
            graph.add_node(a.atom);
        }
        let count = pending.atoms.len();
        for (i, a) in pending.atoms.iter().enumerate() {
            let this = i + 1;
            for &(other, bond) in &a.bonds {
                if other == 0 || other > count {
                    return Err(AdjListError::new(a.line, DanglingBond(other)));
                }
                if other == this {
                    return Err(AdjListError::new(a.line, SelfBond(this)));
                }
                let back = pending.atoms[other - 1]
                    .bonds
                    .iter()
                    .find(|b| b.0 == this)
                    .ok_or_else(|| AdjListError::new(a.line, OneSidedBond(this, other)))?;
                if back.1 != bond {
                    return Err(AdjListError::new(
                        a.line,
                        BondMismatch(this, other, bond, back.1),
                    ));
                }
                if this < other {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(other - 1), bond);
                }
            }
        }
        trace!(
            atoms = graph.node_count(),
            bonds = graph.edge_count(),
            "parsed structure"
        );
        Ok(Structure {
            graph,
            multiplicity: pending.multiplicity,
        })
    }
}
