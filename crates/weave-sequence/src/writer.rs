//! String-backed [`TextSink`] implementation.

use std::fmt;
use std::str::FromStr;

use crate::engine::SeparatorEngine;
use crate::error::{ParseNameError, RenderError};
use crate::fragment::{Fragment, FragmentRenderer};
use crate::options::RenderOptions;
use crate::sequence::RenderableSequence;
use crate::sink::TextSink;

/// Line break style written by [`CodegenWriter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Newline {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl Newline {
    /// The line break characters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Config name of the style (`lf` or `crlf`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::CrLf => "crlf",
        }
    }
}

impl FromStr for Newline {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::CrLf),
            _ => Err(ParseNameError::new("newline style", s)),
        }
    }
}

/// In-memory writer for generated text.
///
/// Line breaks in written text (`\n` or `\r\n`) are normalized to the
/// configured [`Newline`] style.
///
/// # Example
///
/// ```
/// use weave_sequence::{CodegenWriter, RenderSequenceExt, TextSink};
///
/// let mut writer = CodegenWriter::new();
/// writer.write("fn main() {\n");
/// writer.render(["let a = 1;", "let b = 2;"].render()).unwrap();
/// writer.write("\n}");
///
/// assert_eq!(writer.as_str(), "fn main() {\nlet a = 1;\nlet b = 2;\n}");
/// ```
#[derive(Debug)]
pub struct CodegenWriter {
    output: String,
    newline: Newline,
    dirty: bool,
    line_breaks: usize,
    pending_line_break: bool,
    default_options: RenderOptions,
}

impl Default for CodegenWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodegenWriter {
    /// Create an empty writer with `\n` line breaks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            newline: Newline::Lf,
            dirty: false,
            line_breaks: 0,
            pending_line_break: false,
            default_options: RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER,
        }
    }

    /// Set the line break style.
    #[must_use]
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    /// Set the options used for sequences rendered without explicit options.
    #[must_use]
    pub fn with_default_options(mut self, options: RenderOptions) -> Self {
        self.default_options = options;
        self
    }

    /// Replace the options used for sequences rendered without explicit options.
    pub fn set_default_options(&mut self, options: RenderOptions) {
        self.default_options = options;
    }

    /// Text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the writer and return the written text.
    ///
    /// A pending deferred line break is dropped: nothing followed it.
    #[must_use]
    pub fn into_string(self) -> String {
        self.output
    }

    /// Render a sequence, turning each item into a [`Fragment`].
    pub fn render<I>(&mut self, sequence: RenderableSequence<I>) -> Result<(), RenderError>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        SeparatorEngine::render(sequence, self, &mut FragmentRenderer)
    }

    /// Render a single fragment at the current position.
    pub fn write_fragment(&mut self, fragment: impl Into<Fragment>) -> Result<(), RenderError> {
        FragmentRenderer::render_fragment(self, fragment.into())
    }

    fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.output.push_str(text);
            self.dirty = true;
        }
    }

    fn push_line_break(&mut self) {
        self.output.push_str(self.newline.as_str());
        self.dirty = false;
        self.line_breaks += 1;
    }
}

impl TextSink for CodegenWriter {
    fn is_line_dirty(&self) -> bool {
        self.dirty
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if self.pending_line_break {
            self.pending_line_break = false;
            // Text that opens with its own line break satisfies the obligation.
            if !starts_with_line_break(text) {
                self.push_line_break();
            }
        }

        let mut rest = text;
        while let Some(pos) = rest.find('\n') {
            let line = &rest[..pos];
            self.push_text(line.strip_suffix('\r').unwrap_or(line));
            self.push_line_break();
            rest = &rest[pos + 1..];
        }
        self.push_text(rest);
    }

    fn write_line_break(&mut self) {
        self.pending_line_break = false;
        self.push_line_break();
    }

    fn arm_deferred_line_break(&mut self) {
        self.pending_line_break = true;
    }

    fn has_pending_line_break(&self) -> bool {
        self.pending_line_break
    }

    fn line_breaks_written(&self) -> usize {
        self.line_breaks
    }

    fn default_options(&self) -> RenderOptions {
        self.default_options.clone()
    }
}

impl fmt::Write for CodegenWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        TextSink::write(self, s);
        Ok(())
    }
}

impl fmt::Display for CodegenWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

fn starts_with_line_break(text: &str) -> bool {
    text.starts_with('\n') || text.starts_with("\r\n")
}
