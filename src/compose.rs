//! Merge collected shapes into the packed icon string.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::ast::Element;
use crate::error::PathpackError;
use crate::walk::PathDefinition;

/// The viewBox icons are assumed to use unless they say otherwise.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Separates the shapes of a rich-mode icon.
pub const SHAPE_SEPARATOR: &str = "&&";

/// Separates a shape's path data, style and transform.
pub const FIELD_SEPARATOR: &str = "@@";

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,6}").expect("valid hex color regex"));

/// The packed form of one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// `""` for the default viewBox, else `"|minX minY width height"`
    pub view_box: String,
    pub paths: String,
}

/// Pack `defs` (collected from `root`) into a single path string.
pub fn compose(root: &Element, defs: &[PathDefinition]) -> Result<ParseResult, PathpackError> {
    if defs.is_empty() {
        return Err(PathpackError::NoPathsFound);
    }

    let view_box = root
        .get_attr("viewBox")
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_VIEW_BOX);
    let view_box = if view_box == DEFAULT_VIEW_BOX {
        String::new()
    } else {
        format!("|{}", view_box)
    };

    let simple = defs
        .iter()
        .all(|def| def.style.is_none() && def.transform.is_none());
    debug!(shapes = defs.len(), simple, "composing icon");

    let paths = if simple {
        defs.iter().map(|def| def.path.as_str()).collect::<String>()
    } else {
        defs.iter()
            .map(encode_rich)
            .collect::<Vec<_>>()
            .join(SHAPE_SEPARATOR)
    };

    Ok(ParseResult { view_box, paths })
}

/// `path[@@style][@@transform]`, with an empty style slot when only a
/// transform is present.
fn encode_rich(def: &PathDefinition) -> String {
    let mut out = def.path.clone();

    if let Some(style) = &def.style {
        out.push_str(FIELD_SEPARATOR);
        out.push_str(&RE_HEX_COLOR.replace_all(style, "currentColor"));
    } else if def.transform.is_some() {
        out.push_str(FIELD_SEPARATOR);
    }

    if let Some(transform) = &def.transform {
        out.push_str(FIELD_SEPARATOR);
        out.push_str(transform);
    }

    out
}
