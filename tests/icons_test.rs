//! End-to-end tests: SVG markup in, packed icon fragments out.

use pathpack::{PathpackError, extract_svg, parse_svg_content};
use pretty_assertions::assert_eq;

/// A single plain path is passed through untouched.
#[test]
fn test_single_path_simple_mode() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
        <path d="M0 0 L10 10"/>
    </svg>"#;

    let result = parse_svg_content("arrow", svg).unwrap();
    assert_eq!(result.view_box, "");
    assert_eq!(result.paths, "M0 0 L10 10");
}

/// One styled shape switches every shape to the rich encoding.
#[test]
fn test_styled_shape_rich_mode() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg">
        <path d="M0 0h24v24H0z" fill="none"/>
        <circle cx="12" cy="12" r="4" fill="#ff0000"/>
    </svg>"##;

    let result = parse_svg_content("dot", svg).unwrap();
    assert_eq!(
        result.paths,
        "M0 0h24v24H0z@@fill:none;&&M12 12 m-4,0 a4,4 0 1,0 8,0 a4,4 0 1,0 -8,0@@fill:currentColor;"
    );
}

/// Mixed shapes without styles are concatenated in document order.
#[test]
fn test_mixed_shapes() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 48" fill="currentColor">
        <title>Mixed</title>
        <g>
            <rect x="4" y="4" width="8" height="8"/>
            <polygon points="20,4 28,4 24,12"/>
        </g>
        <line x1="4" y1="40" x2="44" y2="40"/>
    </svg>"#;

    let result = parse_svg_content("mixed", svg).unwrap();
    assert_eq!(result.view_box, "|0 0 48 48");
    assert_eq!(
        result.paths,
        "M4 4 H12 V12 H4 V4 ZM20 4 L28 4 L24 12zM4,40L44,40"
    );
}

/// Transforms ride along in the third slot with an empty style slot.
#[test]
fn test_transform_encoding() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg">
        <rect width="10" height="10" transform="rotate(45 5 5)"/>
        <path d="M1 1" stroke="#abc" transform="translate(2)"/>
    </svg>"##;

    let result = parse_svg_content("turned", svg).unwrap();
    assert_eq!(
        result.paths,
        "M0 0 H10 V10 H0 V0 Z@@@@rotate(45 5 5)&&M1 1@@stroke:currentColor;@@translate(2)"
    );
}

#[test]
fn test_relative_path_gets_anchor() {
    let svg = r#"<svg><path d="m4 4h16v16H4z"/></svg>"#;
    let result = parse_svg_content("box", svg).unwrap();
    assert_eq!(result.paths, "M0 0zm4 4h16v16H4z");
}

#[test]
fn test_only_hidden_content() {
    let svg = r#"<svg><path opacity="0" d="M0 0 L10 10"/></svg>"#;

    let err = parse_svg_content("ghost", svg).unwrap_err();
    assert!(matches!(err.kind(), PathpackError::NoPathsFound));
    assert!(err.to_string().contains("\"ghost\""), "{err}");
}

#[test]
fn test_unknown_tag() {
    let svg = r#"<svg><path d="M0 0"/><foreignObject/></svg>"#;

    let err = parse_svg_content("foreign", svg).unwrap_err();
    assert!(
        matches!(err.kind(), PathpackError::UnknownTagType(tag) if tag == "foreignObject"),
        "{err}"
    );
    assert!(err.to_string().contains("foreign"), "{err}");
}

#[test]
fn test_malformed_markup() {
    let err = parse_svg_content("broken", "<svg><path d=\"M0 0\"></svg>").unwrap_err();
    assert!(matches!(err.kind(), PathpackError::XmlParse(_)), "{err}");
}

#[test]
fn test_extract_svg_fragments() {
    let svg = "<svg viewBox=\"0 0 20 20\"><path d=\"M0 0\n\tL10 10\"/></svg>";

    let entry = extract_svg("symArrow", svg).unwrap();
    assert_eq!(entry.svg_def, "export const symArrow = 'M0 0,L10 10|0 0 20 20'");
    assert_eq!(entry.type_def, "export declare const symArrow: string;");
}

/// A zero or non-numeric corner radius counts as unset.
#[test]
fn test_rect_unset_radii() {
    let svg = r#"<svg><rect width="20" height="10" rx="0" ry="3"/></svg>"#;
    let result = parse_svg_content("pill", svg).unwrap();
    assert_eq!(
        result.paths,
        "M3 0 H17 A3 3 0 0 1 20 3 V7 A3 3 0 0 1 17 10 H3 A3 3 0 0 1 0 7 V3 A3 3 0 0 1 3 0 Z"
    );

    let svg = r#"<svg><rect width="20" height="10" rx="abc"/></svg>"#;
    let result = parse_svg_content("plain", svg).unwrap();
    assert_eq!(result.paths, "M0 0 H20 V10 H0 V0 Z");
}

#[test]
fn test_empty_view_box_uses_default() {
    let svg = r#"<svg viewBox=""><path d="M0 0"/></svg>"#;
    let result = parse_svg_content("blank", svg).unwrap();
    assert_eq!(result.view_box, "");
}

#[test]
fn test_tiny_circle_prints_plain_decimals() {
    let svg = r#"<svg><circle cx="0.000001" cy="1" r="2"/></svg>"#;
    let result = parse_svg_content("speck", svg).unwrap();
    assert!(result.paths.starts_with("M0.000001 1 "), "{}", result.paths);
}
