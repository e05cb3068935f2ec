use crate::atom_info::Element;
use crate::molecule::*;
use petgraph::prelude::*;
use std::fmt::Write;
use thiserror::Error;

/// Highest ring-closure number SMILES can express
const MAX_RINGS: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmilesError {
    #[error("{0} can't be written in SMILES")]
    UnsupportedElement(Element),
    #[error("more than {MAX_RINGS} rings are open at once")]
    TooManyRings,
    #[error("the structure has no atoms")]
    Empty,
}

fn bond2str(bond: Bond) -> &'static str {
    match bond {
        Bond::Double => "=",
        Bond::Triple => "#",
        Bond::Quad => "$",
        Bond::Aromatic => ":",
        _ => "",
    }
}

/// Symbol used inside brackets. Surface sites are written as platinum.
fn bracket_symbol(elem: Element) -> Result<&'static str, SmilesError> {
    if elem == Element::R {
        Err(SmilesError::UnsupportedElement(elem))
    } else if elem.is_surface() {
        Ok("Pt")
    } else {
        Ok(elem.symbol())
    }
}

/// A hydrogen that can be folded into its neighbor's H count
fn is_implicit_h(graph: &MoleculeGraph, node: NodeIndex) -> bool {
    let atom = graph[node];
    if !atom.is_hydrogen() || atom.charge != 0 || atom.unpaired != 0 {
        return false;
    }
    let mut edges = graph.edges(node).filter(|e| e.weight().is_covalent());
    match (edges.next(), edges.next()) {
        (Some(e), None) => {
            let other = if e.source() == node {
                e.target()
            } else {
                e.source()
            };
            *e.weight() == Bond::Single && !graph[other].is_hydrogen()
        }
        _ => false,
    }
}

struct Writer<'a> {
    graph: &'a MoleculeGraph,
    implicit: Vec<bool>,
    visited: Vec<bool>,
    /// Ring closures, as (opening atom, closing atom, bond)
    closures: Vec<(NodeIndex, NodeIndex, Bond)>,
    children: Vec<Vec<(NodeIndex, Bond)>>,
    open: Vec<Option<(usize, NodeIndex)>>,
    out: String,
}
impl<'a> Writer<'a> {
    fn new(graph: &'a MoleculeGraph) -> Self {
        let implicit = graph
            .node_indices()
            .map(|n| is_implicit_h(graph, n))
            .collect();
        Self {
            graph,
            implicit,
            visited: vec![false; graph.node_count()],
            closures: Vec::new(),
            children: vec![Vec::new(); graph.node_count()],
            open: vec![None; MAX_RINGS + 1],
            out: String::with_capacity(graph.node_count() * 2),
        }
    }

    /// Neighbors through covalent bonds, skipping folded hydrogens, in index order
    fn neighbors(&self, node: NodeIndex) -> Vec<(NodeIndex, Bond)> {
        let mut out = self
            .graph
            .edges(node)
            .filter(|e| e.weight().is_covalent())
            .map(|e| {
                let other = if e.source() == node {
                    e.target()
                } else {
                    e.source()
                };
                (other, *e.weight())
            })
            .filter(|(n, _)| !self.implicit[n.index()])
            .collect::<Vec<_>>();
        out.sort_by_key(|(n, _)| n.index());
        out
    }

    /// First pass: find the spanning tree and the ring-closing bonds
    fn plan(&mut self, node: NodeIndex, parent: Option<NodeIndex>) {
        self.visited[node.index()] = true;
        for (next, bond) in self.neighbors(node) {
            if Some(next) == parent {
                continue;
            }
            if self.visited[next.index()] {
                // each back edge is seen from both ends, only record it from the later one
                if !self.children[next.index()].iter().any(|c| c.0 == node)
                    && !self
                        .closures
                        .iter()
                        .any(|&(a, b, _)| (a == next && b == node) || (a == node && b == next))
                {
                    self.closures.push((next, node, bond));
                }
            } else {
                self.children[node.index()].push((next, bond));
                self.plan(next, Some(node));
            }
        }
    }

    fn hydrogens(&self, node: NodeIndex) -> usize {
        self.graph
            .edges(node)
            .filter(|e| e.weight().is_covalent())
            .filter(|e| {
                let other = if e.source() == node {
                    e.target()
                } else {
                    e.source()
                };
                self.implicit[other.index()]
            })
            .count()
    }

    fn write_atom(&mut self, node: NodeIndex) -> Result<(), SmilesError> {
        let atom = self.graph[node];
        let h = self.hydrogens(node);
        let mut aromatic = false;
        let mut valence = h as f32;
        for e in self.graph.edges(node) {
            let other = if e.source() == node {
                e.target()
            } else {
                e.source()
            };
            if self.implicit[other.index()] {
                continue;
            }
            aromatic |= *e.weight() == Bond::Aromatic;
            valence += e.weight().bond_count();
        }
        let heavy = valence as usize - h;
        let bare = atom.element.is_organic()
            && atom.charge == 0
            && atom.unpaired == 0
            && !aromatic
            && atom
                .element
                .info()
                .valences
                .iter()
                .find(|&&v| v as usize >= heavy)
                .map_or(false, |&v| v as usize - heavy == h);
        if bare {
            self.out.push_str(atom.element.symbol());
            return Ok(());
        }
        let sym = bracket_symbol(atom.element)?;
        self.out.push('[');
        self.out.push_str(sym);
        match h {
            0 => {}
            1 => self.out.push('H'),
            n => {
                let _ = write!(self.out, "H{n}");
            }
        }
        match atom.charge {
            0 => {}
            1 => self.out.push('+'),
            -1 => self.out.push('-'),
            n => {
                let _ = write!(self.out, "{n:+}");
            }
        }
        self.out.push(']');
        Ok(())
    }

    fn write_ring_number(&mut self, num: usize) {
        if num < 10 {
            let _ = write!(self.out, "{num}");
        } else {
            let _ = write!(self.out, "%{num}");
        }
    }

    /// Second pass: emit atoms, ring digits, and branches
    fn emit(&mut self, node: NodeIndex) -> Result<(), SmilesError> {
        self.write_atom(node)?;
        let closures = self
            .closures
            .iter()
            .copied()
            .filter(|&(a, b, _)| a == node || b == node)
            .collect::<Vec<_>>();
        for (a, b, bond) in closures {
            if a == node {
                let num = (1..=MAX_RINGS)
                    .find(|&n| self.open[n].is_none())
                    .ok_or(SmilesError::TooManyRings)?;
                self.open[num] = Some((b.index(), a));
                self.write_ring_number(num);
            } else {
                let num = (1..=MAX_RINGS)
                    .find(|&n| self.open[n] == Some((node.index(), a)))
                    .ok_or(SmilesError::TooManyRings)?;
                self.open[num] = None;
                self.out.push_str(bond2str(bond));
                self.write_ring_number(num);
            }
        }
        let children = std::mem::take(&mut self.children[node.index()]);
        let last = children.len().saturating_sub(1);
        for (i, &(child, bond)) in children.iter().enumerate() {
            let branch = i != last;
            if branch {
                self.out.push('(');
            }
            self.out.push_str(bond2str(bond));
            self.emit(child)?;
            if branch {
                self.out.push(')');
            }
        }
        Ok(())
    }
}

/// Write a SMILES string for a structure.
///
/// The output is not canonical: atoms are visited in adjacency-list order. Terminal hydrogens
/// are folded into their neighbors, surface sites become `[Pt]`, and each component is
/// separated with a `.`.
pub fn generate_smiles(structure: &Structure) -> Result<String, SmilesError> {
    let graph = &structure.graph;
    if graph.node_count() == 0 {
        return Err(SmilesError::Empty);
    }
    let mut writer = Writer::new(graph);
    let roots = graph
        .node_indices()
        .filter(|n| !writer.implicit[n.index()])
        .collect::<Vec<_>>();
    let mut starts = Vec::new();
    for &root in &roots {
        if !writer.visited[root.index()] {
            starts.push(root);
            writer.plan(root, None);
        }
    }
    for (i, root) in starts.into_iter().enumerate() {
        if i != 0 {
            writer.out.push('.');
        }
        writer.emit(root)?;
    }
    Ok(writer.out)
}
