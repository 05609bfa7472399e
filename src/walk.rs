//! Collect drawable shapes from the SVG tree.

use tracing::trace;

use crate::ast::{Element, Node};
use crate::decode::Shape;
use crate::error::PathpackError;
use crate::style::attributes_as_style;

/// Tags that are traversed but never decoded themselves.
pub const EXEMPT_TAGS: &[&str] = &["g", "svg", "defs", "style", "title"];

/// One decoded shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDefinition {
    /// Path data, never empty
    pub path: String,
    pub style: Option<String>,
    pub transform: Option<String>,
}

/// Walk the tree under `root` in document order and collect every shape.
pub fn collect_paths(root: &Element) -> Result<Vec<PathDefinition>, PathpackError> {
    let mut defs = Vec::new();
    visit(root, &mut defs)?;
    Ok(defs)
}

fn visit(elem: &Element, defs: &mut Vec<PathDefinition>) -> Result<(), PathpackError> {
    let hidden = elem.get_attr("opacity") == Some("0");
    let tag = elem.name.local.as_str();

    if !hidden && !EXEMPT_TAGS.contains(&tag) {
        let shape = Shape::from_tag(tag)
            .ok_or_else(|| PathpackError::UnknownTagType(elem.name.full_name()))?;

        let path = shape.decode(elem);
        if !path.is_empty() {
            let style = match elem.get_attr("style") {
                Some(style) if !style.is_empty() => style.to_string(),
                _ => attributes_as_style(elem),
            };
            let def = PathDefinition {
                path,
                style: Some(style).filter(|s| !s.is_empty()),
                transform: elem
                    .get_attr("transform")
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            };
            trace!(tag, ?def, "collected shape");
            defs.push(def);
        }
    }

    for child in elem.children.iter().filter_map(Node::as_element) {
        visit(child, defs)?;
    }

    Ok(())
}
