use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathpackError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("Encountered unknown tag type: \"{0}\"")]
    UnknownTagType(String),

    #[error("Could not infer any paths")]
    NoPathsFound,

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("\"{name}\" could not be parsed: {source}")]
    Icon {
        name: String,
        #[source]
        source: Box<PathpackError>,
    },
}

impl PathpackError {
    /// Attach the icon's symbol name to an error.
    pub fn for_icon(self, name: impl Into<String>) -> Self {
        match self {
            // Already named
            e @ PathpackError::Icon { .. } => e,
            e => PathpackError::Icon {
                name: name.into(),
                source: Box::new(e),
            },
        }
    }

    /// The underlying error, looking through any icon name attached to it.
    pub fn kind(&self) -> &PathpackError {
        match self {
            PathpackError::Icon { source, .. } => source.kind(),
            e => e,
        }
    }
}
