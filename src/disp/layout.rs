//! A small deterministic 2D layout, good enough for the handful of atoms in a mechanism species.
//!
//! Every component is laid out as a breadth-first spanning tree; ring bonds are drawn on top of
//! whatever positions the tree gave.

use crate::molecule::MoleculeGraph;
use petgraph::prelude::*;
use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, TAU};

pub const BOND_LENGTH: f64 = 40.0;
/// Horizontal gap between disconnected fragments
pub const COMPONENT_GAP: f64 = 40.0;

pub fn layout(graph: &MoleculeGraph) -> Vec<(f64, f64)> {
    let n = graph.node_count();
    let mut pos = vec![(0.0, 0.0); n];
    let mut placed = vec![false; n];
    let mut offset_x = 0.0;
    for root in graph.node_indices() {
        if placed[root.index()] {
            continue;
        }
        let component = place_component(graph, root, &mut pos, &mut placed);
        let min_x = component
            .iter()
            .map(|i| pos[*i].0)
            .min_by(f64::total_cmp)
            .unwrap_or(0.0);
        let max_x = component
            .iter()
            .map(|i| pos[*i].0)
            .max_by(f64::total_cmp)
            .unwrap_or(0.0);
        for &i in &component {
            pos[i].0 += offset_x - min_x;
        }
        offset_x += max_x - min_x + COMPONENT_GAP;
    }
    pos
}

/// Place one component, returning the indices it covered
fn place_component(
    graph: &MoleculeGraph,
    root: NodeIndex,
    pos: &mut [(f64, f64)],
    placed: &mut [bool],
) -> Vec<usize> {
    let mut covered = vec![root.index()];
    // (node, heading from the parent, depth)
    let mut queue = VecDeque::from([(root, None::<f64>, 0usize)]);
    placed[root.index()] = true;
    while let Some((node, heading, depth)) = queue.pop_front() {
        let mut children = graph
            .neighbors(node)
            .filter(|c| !placed[c.index()])
            .collect::<Vec<_>>();
        children.sort_by_key(|c| c.index());
        children.dedup();
        let k = children.len();
        let (x, y) = pos[node.index()];
        for (i, &child) in children.iter().enumerate() {
            let angle = match heading {
                None => i as f64 * TAU / k as f64,
                Some(h) if k == 1 => {
                    if depth % 2 == 0 {
                        h + FRAC_PI_6
                    } else {
                        h - FRAC_PI_6
                    }
                }
                Some(h) => {
                    let spread = ((k - 1) as f64 * FRAC_PI_3).min(4.0 * FRAC_PI_3);
                    h - spread / 2.0 + i as f64 * spread / (k - 1) as f64
                }
            };
            pos[child.index()] = (x + BOND_LENGTH * angle.cos(), y + BOND_LENGTH * angle.sin());
            placed[child.index()] = true;
            covered.push(child.index());
            queue.push_back((child, Some(angle), depth + 1));
        }
    }
    covered
}
