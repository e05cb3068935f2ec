//! Fill colors and sizes for drawn atoms

use crate::atom_info::*;

pub const SVG_SURFACE: &str = "#B0B0B0";
pub const SVG_BOND_COLOR: &str = "#444";
pub const SVG_TEXT_COLOR: &str = "#222";
pub const SVG_RADICAL_COLOR: &str = "#C00000";

/// Jmol-like colors for the elements that show up in mechanisms, otherwise one per group
pub fn svg_atom_color(elem: Element) -> &'static str {
    match elem.symbol() {
        "R" => "#7FFF00",
        "H" => "#E8E8E8",
        "C" => "#909090",
        "N" => "#3050F8",
        "O" => "#FF4040",
        "F" | "Cl" => "#1FF01F",
        "S" => "#FFD230",
        "P" => "#FF8000",
        "Si" => "#DAA520",
        "Br" => "#A62929",
        "I" => "#940094",
        "Ar" | "He" | "Ne" => "#D0F0F0",
        "Pt" => "#D0D0E0",
        "Au" => "#FFD123",
        _ => match elem.info().group {
            ElemGroup::Pseudo => SVG_SURFACE,
            ElemGroup::Nonmet => "#20B2AA",
            ElemGroup::Noble => "#FF69B4",
            ElemGroup::Trans => "#778899",
            ElemGroup::Poor => "#2F4F4F",
            ElemGroup::Metoid => "#556B2F",
            ElemGroup::Alkali => "#8F40D4",
            ElemGroup::AlkEar => "#3DFF00",
            ElemGroup::Halogn => "#006000",
        },
    }
}

/// Circle radius, growing by period. Surface sites are drawn large so adsorbates stand out.
pub fn atom_radius(elem: Element) -> u8 {
    if elem.is_surface() {
        return 14;
    }
    match elem.info().protons {
        0 => 12,
        1..=2 => 8,
        3..=10 => 11,
        11..=18 => 14,
        19..=36 => 16,
        37..=54 => 19,
        _ => 22,
    }
}
