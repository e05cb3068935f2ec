use super::macros::trace_capture;
use super::DICTIONARY;
use crate::export::{canonical_labels, picture_path, DEFAULT_OVERRIDES};
use crate::parse::parse_dictionary;
use crate::prelude::*;
use ahash::AHashMap;
use std::cell::Cell;
use std::io;
use std::path::Path;

/// Reads and converts like the built-in toolkit, but only writes empty files
#[derive(Default)]
struct Counting {
    drawn: Cell<usize>,
}
impl Chemistry for Counting {
    fn load_species(&self, path: &Path) -> Result<SpeciesDictionary, DictionaryError> {
        BuiltinChemistry.load_species(path)
    }
    fn to_smiles(&self, structure: &Structure) -> Result<String, SmilesError> {
        BuiltinChemistry.to_smiles(structure)
    }
    fn draw(&self, _structure: &Structure, path: &Path) -> io::Result<()> {
        self.drawn.set(self.drawn.get() + 1);
        std::fs::write(path, "")
    }
}

fn default_overrides() -> AHashMap<String, String> {
    DEFAULT_OVERRIDES
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn smiles_labels() {
    let dict = parse_dictionary(DICTIONARY).unwrap();
    let labels = canonical_labels(
        &dict,
        LabelMode::Smiles,
        &default_overrides(),
        &BuiltinChemistry,
    );
    assert_eq!(
        labels
            .iter()
            .map(|(_, label)| label.as_str())
            .collect::<Vec<_>>(),
        ["[Pt]", "C", "O=[Pt]", "O=C=O", "H[Pt]"]
    );
    assert_eq!(labels[1].0, "CH4(2)");
}

#[test]
fn without_overrides() {
    let dict = parse_dictionary(DICTIONARY).unwrap();
    let labels = canonical_labels(&dict, LabelMode::Smiles, &AHashMap::new(), &BuiltinChemistry);
    assert_eq!(labels[4], ("HX(5)".to_string(), "[PtH]".to_string()));
}

#[test]
fn name_labels() {
    let dict = parse_dictionary(DICTIONARY).unwrap();
    let mut overrides = AHashMap::new();
    overrides.insert("CO2(4)".to_string(), "carbon dioxide".to_string());
    let labels = canonical_labels(&dict, LabelMode::Name, &overrides, &BuiltinChemistry);
    assert_eq!(
        labels
            .iter()
            .map(|(_, label)| label.as_str())
            .collect::<Vec<_>>(),
        ["X(1)", "CH4(2)", "OX(3)", "carbon dioxide", "HX(5)"]
    );
}

#[test]
fn fallback_labels() {
    trace_capture!();
    let dict = parse_dictionary(
        "R(1)
1 R u0 p0 c0

CH2O(2)
1 O u0 p2 c0 {2,D}
2 C u0 p0 c0 {1,D} {3,S} {4,S}
3 H u0 p0 c0 {2,S}
4 H u0 p0 c0 {2,S}
1 O u1 p2 c0 {2,S}
2 C u1 p0 c0 {1,S} {3,S} {4,S}
3 H u0 p0 c0 {2,S}
4 H u0 p0 c0 {2,S}
",
    )
    .unwrap();
    let labels = canonical_labels(&dict, LabelMode::Smiles, &AHashMap::new(), &BuiltinChemistry);
    assert_eq!(labels[0].1, "R");
    // the first of the duplicates wins
    assert_eq!(labels[1].1, "O=C");

    let bare = [Species::new("ghost".to_string(), Vec::new())]
        .into_iter()
        .collect::<SpeciesDictionary>();
    let labels = canonical_labels(&bare, LabelMode::Smiles, &AHashMap::new(), &BuiltinChemistry);
    assert_eq!(labels, [("ghost".to_string(), "ghost".to_string())]);
}

#[test]
fn skips_existing() {
    trace_capture!();
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("species_dictionary.txt");
    std::fs::write(&dict, DICTIONARY).unwrap();
    let out = dir.path().join("species_pictures");
    let opts = ExportOptions::new(&dict, &out);
    let chem = Counting::default();

    let report = save_pictures(&opts, &chem).unwrap();
    assert_eq!(report.written.len(), 5);
    assert!(report.skipped.is_empty());
    assert_eq!(chem.drawn.get(), 5);
    assert!(picture_path(&out, "O=C=O").exists());

    let report = save_pictures(&opts, &chem).unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.skipped.len(), 5);
    assert_eq!(chem.drawn.get(), 5);

    let report = save_pictures(&opts.clone().with_overwrite(true), &chem).unwrap();
    assert_eq!(report.written.len(), 5);
    assert_eq!(chem.drawn.get(), 10);
}

#[test]
fn draws_svgs() {
    trace_capture!();
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("species_dictionary.txt");
    std::fs::write(&dict, DICTIONARY).unwrap();
    let out = dir.path().join("pictures");
    save_pictures(&ExportOptions::new(&dict, &out), &BuiltinChemistry).unwrap();

    let methane = std::fs::read_to_string(out.join("C.svg")).unwrap();
    assert!(methane.starts_with("<svg"));
    assert!(out.join("H[Pt].svg").exists());
    assert!(out.join("[Pt].svg").exists());
    assert!(!out.join("[PtH].svg").exists());
}

#[test]
fn missing_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let opts = ExportOptions::new(dir.path().join("nope.txt"), dir.path().join("out"));
    let err = save_pictures(&opts, &BuiltinChemistry).unwrap_err();
    assert!(matches!(
        err,
        crate::export::ExportError::Dictionary(DictionaryError::Io { .. })
    ));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn name_labels_match_dot_nodes() {
    use crate::prettify::{rewrite_line, PictureIndex};

    let dict = parse_dictionary(DICTIONARY).unwrap();
    let opts = ExportOptions::default().with_label(LabelMode::Name);
    assert!(opts.label_overrides().is_empty());
    let labels = canonical_labels(&dict, opts.label, &opts.label_overrides(), &BuiltinChemistry);
    assert_eq!(labels[4], ("HX(5)".to_string(), "HX(5)".to_string()));

    let pictures = PictureIndex::from_files(
        "pics",
        labels.iter().map(|(_, label)| format!("{label}.svg")),
    );
    let line = rewrite_line(
        "s5 [ fontname=\"Helvetica\", shape=box, label=\"HX(5)\"];\n",
        &pictures,
        false,
    );
    assert!(line.starts_with("s5 [ image=\""));
    assert!(line.contains("HX(5).svg"));
}

#[test]
fn user_overrides_apply_in_both_modes() {
    let opts = ExportOptions::default().with_override("CO2(4)", "carbon dioxide");
    let smiles = opts.label_overrides();
    assert_eq!(smiles.get("HX(5)").map(String::as_str), Some("H[Pt]"));
    assert_eq!(smiles.get("CO2(4)").map(String::as_str), Some("carbon dioxide"));

    let names = opts.clone().with_label(LabelMode::Name).label_overrides();
    assert_eq!(names.len(), 1);
    assert_eq!(names.get("CO2(4)").map(String::as_str), Some("carbon dioxide"));

    let plain = opts.without_default_overrides().label_overrides();
    assert!(!plain.contains_key("HX(5)"));
}
