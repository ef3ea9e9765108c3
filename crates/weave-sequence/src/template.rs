//! Templates with interpolated fragments.
//!
//! A [`Template`] is literal text with holes. Each hole holds a [`Fragment`]
//! that is rendered in place, so a sequence interpolated into a template is
//! separated by the engine and the template text that follows it picks up
//! any deferred line break the sequence left behind.
//!
//! # Example
//!
//! ```
//! use weave_sequence::{CodegenWriter, Fragment, Template};
//!
//! let fields: Fragment = vec!["id: u64,", "name: String,"].into();
//! let template = Template::parse("struct User {{\n{0}\n}}", vec![fields]).unwrap();
//!
//! let mut writer = CodegenWriter::new();
//! writer.write_fragment(template).unwrap();
//! assert_eq!(writer.as_str(), "struct User {\nid: u64,\nname: String,\n}");
//! ```

use std::mem;

use crate::error::RenderError;
use crate::fragment::{Fragment, FragmentRenderer};
use crate::sink::TextSink;

/// Literal text interleaved with interpolated fragments.
#[derive(Debug, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

#[derive(Debug)]
enum Segment {
    Literal(String),
    Hole(Fragment),
}

/// Error raised while parsing a template format string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// `{` without a matching `}`.
    #[error("Unclosed placeholder at offset {offset}")]
    UnclosedPlaceholder {
        /// Byte offset of the opening brace.
        offset: usize,
    },
    /// `}` outside a placeholder and not escaped as `}}`.
    #[error("Unmatched '}}' at offset {offset}")]
    UnmatchedBrace {
        /// Byte offset of the brace.
        offset: usize,
    },
    /// Placeholder content is not an argument index.
    #[error("Invalid placeholder: {{{placeholder}}}")]
    InvalidPlaceholder {
        /// Text between the braces.
        placeholder: String,
    },
    /// Placeholder refers to an argument that was not supplied.
    #[error("Missing argument {index}")]
    MissingArgument {
        /// Requested argument index.
        index: usize,
    },
    /// The same argument is interpolated twice.
    #[error("Argument {index} is used more than once")]
    ArgumentReused {
        /// Repeated argument index.
        index: usize,
    },
}

impl Template {
    /// Create an empty template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.push_literal(text.into());
        self
    }

    /// Append an interpolated fragment.
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.segments.push(Segment::Hole(fragment.into()));
        self
    }

    /// Parse a format string with positional `{N}` placeholders.
    ///
    /// `{{` and `}}` produce literal braces. Fragments are not cloneable, so
    /// each argument can be interpolated at most once; unused arguments are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unbalanced braces, non-numeric
    /// placeholders, missing arguments, or reused arguments.
    pub fn parse(format: &str, args: Vec<Fragment>) -> Result<Self, TemplateError> {
        let mut args: Vec<Option<Fragment>> = args.into_iter().map(Some).collect();
        let mut template = Self::new();
        let mut literal = String::new();
        let mut chars = format.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' if chars.next_if(|&(_, c)| c == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, c)| c == '}').is_some() => literal.push('}'),
                '{' => {
                    let start = offset + 1;
                    let end = format[start..]
                        .find('}')
                        .map(|len| start + len)
                        .ok_or(TemplateError::UnclosedPlaceholder { offset })?;
                    let placeholder = &format[start..end];
                    let index: usize = placeholder.trim().parse().map_err(|_| {
                        TemplateError::InvalidPlaceholder {
                            placeholder: placeholder.to_owned(),
                        }
                    })?;
                    let fragment = args
                        .get_mut(index)
                        .ok_or(TemplateError::MissingArgument { index })?
                        .take()
                        .ok_or(TemplateError::ArgumentReused { index })?;

                    template.push_literal(mem::take(&mut literal));
                    template.segments.push(Segment::Hole(fragment));
                    while chars.next_if(|&(i, _)| i <= end).is_some() {}
                }
                '}' => return Err(TemplateError::UnmatchedBrace { offset }),
                _ => literal.push(ch),
            }
        }

        template.push_literal(literal);
        Ok(template)
    }

    /// Write the template into `sink`, rendering holes in place.
    pub(crate) fn render_into<S: TextSink + ?Sized>(self, sink: &mut S) -> Result<(), RenderError> {
        for segment in self.segments {
            match segment {
                Segment::Literal(text) => sink.write(&text),
                Segment::Hole(fragment) => FragmentRenderer::render_fragment(sink, fragment)?,
            }
        }
        Ok(())
    }

    fn push_literal(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Literal(last)) = self.segments.last_mut() {
            last.push_str(&text);
        } else {
            self.segments.push(Segment::Literal(text));
        }
    }
}
