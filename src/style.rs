//! Presentation attributes folded into an inline style declaration.

use crate::ast::Element;

/// Attributes that never end up in the generated style: geometry, identity
/// and document plumbing.
pub const STYLE_EXCLUDED_ATTRS: &[&str] = &[
    "d",
    "style",
    "width",
    "height",
    "rx",
    "ry",
    "r",
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "cx",
    "cy",
    "points",
    "class",
    "xmlns",
    "viewBox",
    "id",
    "name",
    "transform",
    "data-name",
];

/// Serialize an element's presentation attributes as `name:value;` pairs.
///
/// `fill="currentColor"` is dropped since the icon component already renders
/// with it.
pub fn attributes_as_style(elem: &Element) -> String {
    let mut style = String::new();

    for attr in &elem.attributes {
        let name = attr.name.full_name();
        if STYLE_EXCLUDED_ATTRS.contains(&name.as_str()) {
            continue;
        }
        if name == "fill" && attr.value == "currentColor" {
            continue;
        }
        style.push_str(&name);
        style.push(':');
        style.push_str(&attr.value);
        style.push(';');
    }

    style
}
