mod macros;

mod export;
mod prettify;
mod svg;

/// Surface species from a small methane-oxidation-on-platinum mechanism
pub(crate) const DICTIONARY: &str = "\
// generated by RMG

X(1)
1 X u0 p0 c0

CH4(2)
1 C u0 p0 c0 {2,S} {3,S} {4,S} {5,S}
2 H u0 p0 c0 {1,S}
3 H u0 p0 c0 {1,S}
4 H u0 p0 c0 {1,S}
5 H u0 p0 c0 {1,S}

OX(3)
1 O u0 p2 c0 {2,D}
2 X u0 p0 c0 {1,D}

CO2(4)
1 O u0 p2 c0 {3,D}
2 O u0 p2 c0 {3,D}
3 C u0 p0 c0 {1,D} {2,D}

HX(5)
1 H u0 p0 c0 {2,S}
2 X u0 p0 c0 {1,S}
";
