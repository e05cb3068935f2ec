use crate::disp::layout::{layout, BOND_LENGTH};
use crate::prelude::*;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn carbon_dioxide() {
    let co2 = adjlist!(
        "1 O u0 p2 c0 {3,D}
         2 O u0 p2 c0 {3,D}
         3 C u0 p0 c0 {1,D} {2,D}"
    );
    let svg = fmt_as_svg(&co2).to_string();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(count(&svg, "<circle"), 3);
    assert_eq!(count(&svg, "<line"), 4);
    assert_eq!(count(&svg, ">O</text>"), 2);
}

#[test]
fn radicals_get_dots() {
    let ch3 = adjlist!(
        "multiplicity 2
         1 C u1 p0 c0 {2,S} {3,S} {4,S}
         2 H u0 p0 c0 {1,S}
         3 H u0 p0 c0 {1,S}
         4 H u0 p0 c0 {1,S}"
    );
    let svg = fmt_as_svg(&ch3).to_string();
    assert_eq!(count(&svg, "<circle"), 5);
    assert_eq!(count(&svg, "<line"), 3);
}

#[test]
fn physisorbed_bond_is_dashed() {
    let ox = adjlist!(
        "1 O u0 p2 c0 {2,vdW}
         2 X u0 p0 c0 {1,vdW}"
    );
    let svg = fmt_as_svg(&ox).to_string();
    assert_eq!(count(&svg, "<line"), 1);
    assert_eq!(count(&svg, "stroke-dasharray"), 1);
}

#[test]
fn bonds_have_equal_length() {
    let ch4 = adjlist!(
        "1 C u0 p0 c0 {2,S} {3,S} {4,S} {5,S}
         2 H u0 p0 c0 {1,S}
         3 H u0 p0 c0 {1,S}
         4 H u0 p0 c0 {1,S}
         5 H u0 p0 c0 {1,S}"
    );
    let pos = layout(&ch4.graph);
    for i in 1..5 {
        let (dx, dy) = (pos[i].0 - pos[0].0, pos[i].1 - pos[0].1);
        assert!(((dx * dx + dy * dy).sqrt() - BOND_LENGTH).abs() < 1e-9);
    }
}

#[test]
fn empty_structure() {
    let svg = fmt_as_svg(&Structure::default()).to_string();
    assert!(svg.starts_with("<svg"));
    assert_eq!(count(&svg, "<circle"), 0);
}
