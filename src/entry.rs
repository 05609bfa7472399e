//! Wrap a packed icon as generated-source fragments.

use std::sync::LazyLock;

use regex::Regex;

use crate::compose::ParseResult;

static RE_CONTROL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t]+").expect("valid control run regex"));

/// The two fragments emitted for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// `export const <name> = '<paths><viewBox>'`
    pub svg_def: String,
    /// `export declare const <name>: string;`
    pub type_def: String,
}

/// Replace line breaks and tabs with commas, then squash doubled commas.
pub fn clean_path(paths: &str) -> String {
    RE_CONTROL_RUN.replace_all(paths, ",").replace(",,", ",")
}

/// Build the value and type declaration for the icon `name`.
pub fn format_entry(name: &str, result: &ParseResult) -> IconEntry {
    let path = clean_path(&result.paths);

    IconEntry {
        svg_def: format!("export const {} = '{}{}'", name, path, result.view_box),
        type_def: format!("export declare const {}: string;", name),
    }
}
