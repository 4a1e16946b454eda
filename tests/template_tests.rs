//! Integration tests for the token substitution engine

use helium::core::report::template::{color_marker, fill_tokens, materialize, replace_literals};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a scratch document and return its path.
fn scratch_document(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("working.svg");
    fs::write(&path, content).expect("write scratch document");
    path
}

#[test]
fn fills_every_occurrence_of_a_token() {
    let dir = TempDir::new().unwrap();
    let doc = scratch_document(
        &dir,
        "<text>{{ proj_name }}</text>\n<title>{{proj_name}}</title>\n",
    );

    fill_tokens(&doc, &[("proj_name", "Acme")], false).expect("fill");

    let result = fs::read_to_string(&doc).unwrap();
    assert_eq!(result, "<text>Acme</text>\n<title>Acme</title>\n");
}

#[test]
fn unrelated_tokens_are_never_altered() {
    let dir = TempDir::new().unwrap();
    let doc = scratch_document(&dir, "{{ alpha }} and {{ beta }}\n");

    fill_tokens(&doc, &[("alpha", "1")], false).expect("fill");

    let result = fs::read_to_string(&doc).unwrap();
    assert_eq!(result, "1 and {{ beta }}\n");

    // Filling again with an unrelated name changes nothing further.
    fill_tokens(&doc, &[("gamma", "3")], false).expect("fill");
    assert_eq!(fs::read_to_string(&doc).unwrap(), "1 and {{ beta }}\n");
}

#[test]
fn commented_mode_only_touches_comment_wrapped_tokens() {
    let dir = TempDir::new().unwrap();
    let doc = scratch_document(&dir, "<!-- {{ note }} --> and {{ note }}\n");

    fill_tokens(&doc, &[("note", "visible")], true).expect("fill");

    let result = fs::read_to_string(&doc).unwrap();
    assert_eq!(result, "visible and {{ note }}\n");
}

#[test]
fn replacement_values_are_taken_literally() {
    let dir = TempDir::new().unwrap();
    let doc = scratch_document(&dir, "{{ path }}\n");

    // `$1` must not be interpreted as a capture reference.
    fill_tokens(&doc, &[("path", "src/$1/mod.py")], false).expect("fill");

    assert_eq!(fs::read_to_string(&doc).unwrap(), "src/$1/mod.py\n");
}

#[test]
fn literal_color_markers_are_rewritten() {
    let dir = TempDir::new().unwrap();
    let doc = scratch_document(
        &dir,
        "<circle fill=\"#ff01ff\"/>\n<circle fill=\"#ff02ff\"/>\n",
    );

    replace_literals(&doc, &[(color_marker(1), "#217821")]).expect("replace");

    let result = fs::read_to_string(&doc).unwrap();
    assert_eq!(
        result,
        "<circle fill=\"#217821\"/>\n<circle fill=\"#ff02ff\"/>\n"
    );
}

#[test]
fn unfilled_placeholders_are_left_as_authored() {
    let dir = TempDir::new().unwrap();
    let doc = scratch_document(&dir, "{{ m1 }} {{ m2 }} {{ m3 }}\n");

    fill_tokens(&doc, &[("m1", "A"), ("m2", "B")], false).expect("fill");

    // The unfilled slot stays; the engine performs no completeness check.
    assert_eq!(fs::read_to_string(&doc).unwrap(), "A B {{ m3 }}\n");
}

#[test]
fn materialize_prefers_the_configured_template() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.svg");
    fs::write(&custom, "<svg>{{ proj_name }}</svg>").unwrap();

    let dest = dir.path().join("working.svg");
    materialize(custom.to_str().unwrap(), &dest).expect("materialize");

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "<svg>{{ proj_name }}</svg>"
    );
}

#[test]
fn materialize_falls_back_to_the_embedded_default() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("working.svg");

    materialize("./does-not-exist.svg", &dest).expect("materialize");

    let content = fs::read_to_string(&dest).unwrap();
    assert!(content.contains("{{ proj_name }}"));
    assert!(content.contains("{{ report_date }}"));
    // The default page pre-declares all eleven colourable regions.
    for slot in 1..=11 {
        assert!(content.contains(&color_marker(slot)), "missing marker {slot}");
    }
}
