//! Error types for sequence rendering.

use crate::template::TemplateError;

/// Error raised while rendering an item into a sink.
///
/// The engine never produces these itself; they come from item renderers and
/// are passed through to the caller unchanged. Output written before the
/// failing item stays in the sink.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The renderer does not know how to turn the item into text.
    #[error("Unsupported item type: {kind}")]
    UnsupportedItemType {
        /// Short description of the rejected item shape (e.g. "number").
        kind: String,
    },
    /// A template could not be built or rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// An item referenced an unknown preset or action name.
    #[error(transparent)]
    UnknownName(#[from] ParseNameError),
}

impl RenderError {
    /// Create an [`UnsupportedItemType`](Self::UnsupportedItemType) error.
    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedItemType { kind: kind.into() }
    }
}

/// Error returned when parsing a kebab-case action, preset or newline name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {name}")]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
        }
    }

    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = RenderError::unsupported("number");
        assert_eq!(err.to_string(), "Unsupported item type: number");
    }

    #[test]
    fn test_parse_name_error_message() {
        let err = ParseNameError::new("preset", "tabs");
        assert_eq!(err.to_string(), "Unknown preset: tabs");
        assert_eq!(err.name(), "tabs");
    }
}
