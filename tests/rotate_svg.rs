pub mod utils;
use utils::{compare, contains};

#[test]
fn test_rotate_path_half_turn() {
    let input = r##"<svg viewBox="0 0 100 100">
  <path d="M10 10 L90 10 L90 90 Z"/>
</svg>"##;
    let expected = r##"<svg viewBox="0 0 100 100">
  <path d="M90 90 L10 90 L10 10 Z"/>
</svg>"##;

    compare(input, 180., expected);
}

#[test]
fn test_rotate_all_shapes_quarter_turn() {
    let input = r##"<svg viewBox="0 0 100 100">
  <circle cx="20" cy="30" r="5"/>
  <rect x="10" y="10" width="20" height="10"/>
  <line x1="0" y1="0" x2="100" y2="100"/>
  <polygon points="0,0 100,0 50,100"/>
</svg>"##;
    let expected = r##"<svg viewBox="0 0 100 100">
  <circle cx="70" cy="20" r="5"/>
  <rect x="75" y="15" width="20" height="10"/>
  <line x1="100" y1="0" x2="0" y2="100"/>
  <polygon points="100,0 100,100 0,50"/>
</svg>"##;

    compare(input, 90., expected);
}

#[test]
fn test_rotate_arc() {
    let input = r##"<svg viewBox="0 0 100 100"><path d="M0 50 A25 25 0 1 1 100 50"/></svg>"##;
    let expected =
        r##"<svg viewBox="0 0 100 100"><path d="M50 0 A25 25 90 1 1 50 100"/></svg>"##;

    compare(input, 90., expected);
}

#[test]
fn test_relative_path_canonicalized() {
    // relative/shorthand commands come out absolute even at angle 0
    let input = r##"<svg viewBox="0 0 100 100"><path d="m10 10 h80 v80 z"/></svg>"##;
    let expected =
        r##"<svg viewBox="0 0 100 100"><path d="M10 10 L90 10 L90 90 Z"/></svg>"##;

    compare(input, 0., expected);
}

#[test]
fn test_rotate_nested_and_namespaced() {
    // shapes inside groups/defs are rotated too; namespace prefixes kept
    let input = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <defs>
    <svg:circle cx="10" cy="10" r="2"/>
  </defs>
  <g>
    <line x1="10" y1="50" x2="90" y2="50"/>
  </g>
</svg>"##;
    let expected = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <defs>
    <svg:circle cx="90" cy="90" r="2"/>
  </defs>
  <g>
    <line x1="90" y1="50" x2="10" y2="50"/>
  </g>
</svg>"##;

    compare(input, 180., expected);
}

#[test]
fn test_offset_viewbox_pivot() {
    // viewBox "-50 -50 100 100" puts the pivot at the origin
    let input = r##"<svg viewBox="-50 -50 100 100"><circle cx="30" cy="0" r="1"/></svg>"##;

    contains(input, 180., r#"cx="-30" cy="0""#);
}

#[test]
fn test_declaration_and_comments_preserved() {
    let input = r##"<?xml version="1.0" encoding="utf-8"?>
<!-- hand drawn -->
<svg viewBox="0 0 10 10">
  <text x="1" y="1">label</text>
</svg>"##;

    // text elements and document structure are untouched
    compare(input, 90., input);
}

#[test]
fn test_smooth_curves_rotate_consistently() {
    let input =
        r##"<svg viewBox="0 0 10 10"><path d="M0,0 C1,1 2,2 3,3 S4,4 5,5"/></svg>"##;

    // reflected control point (4,4) made explicit, then rotated with the rest
    contains(input, 180., r#"d="M10 10 C9 9 8 8 7 7 C6 6 6 6 5 5""#);
}

#[test]
fn test_escaped_attribute_values_preserved() {
    let input = r##"<svg viewBox="0 0 10 10"><a href="x?a=1&amp;b=2"><path d="M1 1 L2 2"/></a></svg>"##;

    // entity references in attribute values must survive the rewrite
    contains(input, 0., r#"href="x?a=1&amp;b=2""#);
}

#[test]
fn test_rotate_str_default_canonicalizes() {
    let input = r##"<svg viewBox="0 0 100 100"><path d="m10 10 h80"/></svg>"##;

    let output = svgrot::rotate_str_default(input).unwrap();
    assert!(output.contains(r#"d="M10 10 L90 10""#), "got: {output}");
}
