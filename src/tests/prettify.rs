use super::macros::trace_capture;
use crate::prettify::*;
use std::path::Path;

const DOT: &str = r#"digraph reaction_paths {
center=1;
size="5,6";page="5,6";
s1 [ fontname="Helvetica", shape=box, label="C"];
s2 [ fontname="Helvetica", shape=box, label="O=[Pt]"];
s3 [ fontname="Helvetica", shape=box, label="unknown"];
s1 -> s2 [fontname="Helvetica", penwidth=6, arrowsize=3, color="0.7, 0.42, 0.9"
, label=" 0.42"];
label = "Scale = 1.0\l ";
}
"#;

fn image_line(node: &str, dir: &Path, file: &str) -> String {
    format!(
        "{node} [ image=\"{}\" label=\"\" width=\"1.0\" height=\"1.0\" imagescale=true fixedsize=false color=\"none\" ];",
        dir.join(file).display()
    )
}

/// A temporary directory holding `diagram.dot` and a picture folder with two species
fn setup() -> (tempfile::TempDir, PrettyOptions) {
    let dir = tempfile::tempdir().unwrap();
    let pictures = dir.path().join("species_pictures");
    std::fs::create_dir(&pictures).unwrap();
    std::fs::write(pictures.join("C.svg"), "<svg/>").unwrap();
    std::fs::write(pictures.join("O=[Pt].svg"), "<svg/>").unwrap();
    std::fs::write(pictures.join("README"), "").unwrap();
    let dot = dir.path().join("diagram.dot");
    std::fs::write(&dot, DOT).unwrap();
    (dir, PrettyOptions::new(pictures, dot))
}

#[test]
fn names() {
    assert_eq!(picture_identifier("C.svg"), Some("C"));
    assert_eq!(picture_identifier("O=[Pt].svg"), Some("O=[Pt]"));
    assert_eq!(picture_identifier("notes.txt"), None);
    assert_eq!(picture_identifier(".svg"), None);

    assert_eq!(
        pretty_path(Path::new("out/diagram.dot")),
        Path::new("out/diagram-pretty.dot")
    );
    assert_eq!(
        pretty_path(Path::new("diagram")),
        Path::new("diagram-pretty.dot")
    );
    assert_eq!(
        pretty_path(Path::new("run.dot/diagram.dot")),
        Path::new("run.dot/diagram-pretty.dot")
    );
}

#[test]
fn picture_index() {
    let index = PictureIndex::from_files("pics", ["C.svg", "CC.svg", "notes.txt"]);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("CC"), Some("CC.svg"));
    assert_eq!(index.get("notes"), None);
    assert_eq!(index.image_path("C.svg"), Path::new("pics").join("C.svg").display().to_string());
    assert!(PictureIndex::default().is_empty());
}

#[test]
fn single_lines() {
    let index = PictureIndex::from_files("pics", ["C.svg"]);
    assert_eq!(
        rewrite_line("size=\"5,6\";page=\"5,6\";\n", &index, false),
        "size=\"12,12\";page=\"12,12\";\n"
    );
    assert_eq!(
        rewrite_line(
            "s1 [ fontname=\"Helvetica\", shape=box, label=\"C\"];\n",
            &index,
            false
        ),
        image_line("s1", Path::new("pics"), "C.svg") + "\n"
    );
    let edge = "s1 -> s2 [color=\"0.7, 0.5, 0.9\", label=\"0.5\"];\n";
    assert_eq!(
        rewrite_line(edge, &index, false),
        "s1 -> s2 [color=\"1.0, 0.5, 0.7*0.5\", label=\"0.5\"];\n"
    );
    assert_eq!(
        rewrite_line(edge, &index, true),
        "s1 -> s2 [color=\"1.0, 0.5, 0.7*0.5\", label=\"\"];\n"
    );
    assert_eq!(rewrite_line("center=1;\n", &index, true), "center=1;\n");
}

#[test]
fn crlf_lines_stay_crlf() {
    let index = PictureIndex::from_files("pics", ["C.svg"]);
    assert_eq!(
        rewrite_line(
            "s1 [ fontname=\"Helvetica\", shape=box, label=\"C\"];\r\n",
            &index,
            false
        ),
        image_line("s1", Path::new("pics"), "C.svg") + "\r\n"
    );
    assert_eq!(
        rewrite_line("size=\"5,6\";page=\"5,6\";\r\n", &index, false),
        "size=\"12,12\";page=\"12,12\";\r\n"
    );
    // last line without a newline
    assert_eq!(
        rewrite_line(
            "s1 [ fontname=\"Helvetica\", shape=box, label=\"C\"];",
            &index,
            false
        ),
        image_line("s1", Path::new("pics"), "C.svg") + "\n"
    );
}

#[test]
fn rewrite_file() {
    trace_capture!();
    let (dir, opts) = setup();
    let out = prettydot(&opts).unwrap();
    assert_eq!(out, dir.path().join("diagram-pretty.dot"));
    let text = std::fs::read_to_string(&out).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), DOT.lines().count());
    assert_eq!(lines[0], "digraph reaction_paths {");
    assert_eq!(lines[2], r#"size="12,12";page="12,12";"#);
    assert_eq!(lines[3], image_line("s1", &opts.pictures, "C.svg"));
    assert_eq!(lines[4], image_line("s2", &opts.pictures, "O=[Pt].svg"));
    assert_eq!(
        lines[5],
        r#"s3 [ fontname="Helvetica", shape=box, label="unknown"];"#
    );
    assert!(lines[6].ends_with(r#"color="1.0, 0.42, 0.7*0.42""#));
    assert_eq!(lines[7], r#", label=" 0.42"];"#);
    assert_eq!(lines[8], r#"label = "Scale = 1.0\l ";"#);
}

#[test]
fn strip_line_labels() {
    trace_capture!();
    let (_dir, opts) = setup();
    let out = prettydot(&opts.with_strip_line_labels(true)).unwrap();
    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.contains("\n, label=\"\"];\n"));
    assert!(!text.contains("0.42\"];"));
}

#[test]
fn second_pass_changes_nothing() {
    let (_dir, opts) = setup();
    let first = prettydot(&opts).unwrap();
    let second = prettydot(&PrettyOptions::new(&opts.pictures, &first)).unwrap();
    assert_eq!(second.file_name().unwrap(), "diagram-pretty-pretty.dot");
    assert_eq!(
        std::fs::read_to_string(first).unwrap(),
        std::fs::read_to_string(second).unwrap()
    );
}

#[test]
fn not_a_digraph() {
    let (dir, opts) = setup();
    std::fs::write(&opts.dot_file, "graph g {\n}\n").unwrap();
    let err = prettydot(&opts).unwrap_err();
    assert!(matches!(err, PrettyDotError::NotDigraph(_)));
    assert!(err.to_string().ends_with(" - not a digraph"));
    assert!(!dir.path().join("diagram-pretty.dot").exists());
}

#[test]
fn missing_inputs() {
    let (dir, opts) = setup();
    let missing_dot = PrettyOptions::new(&opts.pictures, dir.path().join("nope.dot"));
    assert!(matches!(
        prettydot(&missing_dot),
        Err(PrettyDotError::Read { .. })
    ));
    let missing_pictures = PrettyOptions::new(dir.path().join("nope"), &opts.dot_file);
    assert!(matches!(
        prettydot(&missing_pictures),
        Err(PrettyDotError::Pictures { .. })
    ));
}
