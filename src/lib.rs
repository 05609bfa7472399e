//! pathpack - packs SVG icons into compact path strings
//!
//! Every drawable shape in an icon is turned into path data and the results
//! are merged into one string an icon component can expand again:
//!
//! ```text
//! result     := paths viewbox
//! viewbox    := "" | "|" minX " " minY " " width " " height
//! paths      := pathData pathData ...            (no shape has style/transform)
//!             | shape "&&" shape "&&" ...         (otherwise)
//! shape      := pathData ["@@" style] ["@@" transform]
//! ```

mod ast;
mod attr;
mod compose;
mod decode;
mod entry;
mod error;
mod parse;
mod style;
mod walk;

pub use ast::*;
pub use attr::*;
pub use compose::*;
pub use decode::*;
pub use entry::*;
pub use error::*;
pub use parse::*;
pub use style::*;
pub use walk::*;

use tracing::error;

/// Pack the SVG markup of the icon `name`.
///
/// Errors carry `name` so batch callers can tell which icon failed.
pub fn parse_svg_content(name: &str, svg: &str) -> Result<ParseResult, PathpackError> {
    pack(svg).map_err(|e| {
        error!("\"{}\" could not be parsed: {}", name, e);
        e.for_icon(name)
    })
}

fn pack(svg: &str) -> Result<ParseResult, PathpackError> {
    let doc = parse_svg(svg)?;
    let defs = collect_paths(&doc.root)?;
    compose(&doc.root, &defs)
}

/// Pack an icon and wrap it as a named constant plus its type declaration.
pub fn extract_svg(name: &str, svg: &str) -> Result<IconEntry, PathpackError> {
    let result = parse_svg_content(name, svg)?;
    Ok(format_entry(name, &result))
}
