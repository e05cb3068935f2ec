pub use super::color::*;
use super::layout::layout;
use crate::molecule::*;
use petgraph::prelude::*;
use std::fmt::{self, Display, Formatter};

/// Space around the outermost atoms
const MARGIN: f64 = 20.0;

pub fn fmt_as_svg(structure: &Structure) -> SvgFormatter<'_> {
    SvgFormatter(structure)
}

/// Draws a structure as a standalone SVG document
#[derive(Debug, Clone, Copy)]
pub struct SvgFormatter<'a>(pub &'a Structure);
impl Display for SvgFormatter<'_> {
    #[allow(clippy::write_with_newline)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let graph = &self.0.graph;
        let locs = layout(graph);
        let radius = |i: usize| atom_radius(graph[NodeIndex::new(i)].element) as f64;
        let min_x = locs
            .iter()
            .enumerate()
            .map(|(i, p)| p.0 - radius(i))
            .min_by(f64::total_cmp)
            .unwrap_or(0.0);
        let min_y = locs
            .iter()
            .enumerate()
            .map(|(i, p)| p.1 - radius(i))
            .min_by(f64::total_cmp)
            .unwrap_or(0.0);
        let max_x = locs
            .iter()
            .enumerate()
            .map(|(i, p)| p.0 + radius(i))
            .max_by(f64::total_cmp)
            .unwrap_or(0.0);
        let max_y = locs
            .iter()
            .enumerate()
            .map(|(i, p)| p.1 + radius(i))
            .max_by(f64::total_cmp)
            .unwrap_or(0.0);
        let diff_x = max_x - min_x + 2.0 * MARGIN;
        let diff_y = max_y - min_y + 2.0 * MARGIN;
        let max_axis = diff_x.max(diff_y).ceil();
        write!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{max_axis}\" height=\"{max_axis}\" viewBox=\"0 0 {max_axis} {max_axis}\">\n"
        )?;
        let mut add_x = -min_x + MARGIN;
        let mut add_y = -min_y + MARGIN;
        if diff_y > diff_x {
            add_x += (diff_y - diff_x) / 2.0;
        } else {
            add_y += (diff_x - diff_y) / 2.0;
        }
        let locs = locs
            .iter()
            .map(|(x, y)| ((x + add_x).round() as i32, (y + add_y).round() as i32))
            .collect::<Vec<_>>();

        for edge in graph.edge_references() {
            let (x1, y1) = locs[edge.source().index()];
            let (x2, y2) = locs[edge.target().index()];
            let (dx, dy) = (x2 - x1, y2 - y1);
            let (dx, dy) = (-dy as f64, dx as f64);
            let mag = (dx * dx + dy * dy).sqrt() / 3.0;
            let (dx, dy) = if mag == 0.0 {
                (0, 0)
            } else {
                ((dx / mag) as i32, (dy / mag) as i32)
            };
            let line = |f: &mut Formatter<'_>, off: i32, dashed: bool| {
                write!(
                    f,
                    "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"stroke:{SVG_BOND_COLOR};stroke-width:2\"{} />\n",
                    x1 + off * dx,
                    y1 + off * dy,
                    x2 + off * dx,
                    y2 + off * dy,
                    if dashed { " stroke-dasharray=\"4,4\"" } else { "" }
                )
            };
            match *edge.weight() {
                Bond::Single => line(f, 0, false)?,
                Bond::Double => {
                    line(f, -1, false)?;
                    line(f, 1, false)?;
                }
                Bond::Triple => {
                    line(f, -2, false)?;
                    line(f, 0, false)?;
                    line(f, 2, false)?;
                }
                Bond::Quad => {
                    line(f, -3, false)?;
                    line(f, -1, false)?;
                    line(f, 1, false)?;
                    line(f, 3, false)?;
                }
                Bond::Aromatic => {
                    line(f, -1, false)?;
                    line(f, 1, true)?;
                }
                _ => line(f, 0, true)?,
            }
        }

        for (atom, &(cx, cy)) in graph.node_weights().zip(&locs) {
            let r = atom_radius(atom.element);
            write!(f, "  <circle r=\"{r}\" cx=\"{cx}\" cy=\"{cy}\" fill=\"{}\" />\n  <text x=\"{cx}\" y=\"{cy}\" font-size=\"{r}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{SVG_TEXT_COLOR}\">{atom}</text>\n", svg_atom_color(atom.element))?;
            for i in 0..atom.unpaired {
                let ex = cx + r as i32 + 3 + 5 * i as i32;
                let ey = cy - r as i32;
                write!(
                    f,
                    "  <circle r=\"2\" cx=\"{ex}\" cy=\"{ey}\" fill=\"{SVG_RADICAL_COLOR}\" />\n"
                )?;
            }
        }

        f.write_str("</svg>\n")
    }
}
