//! Separator rendering for sequences of generated text.
//!
//! This crate decides what to write between and after the items of a
//! sequence so that generated text has no accidental blank lines, no missing
//! line breaks, and the right spacing for single-line and multi-line items.
//!
//! # Architecture
//!
//! - [`SeparatorAction`]: a single separator decision
//! - [`RenderOptions`]: the between-items and after-last actions plus a custom
//!   separator, with named presets ([`Preset`])
//! - [`RenderableSequence`]: items paired with optional options, built with
//!   [`RenderSequenceExt`]
//! - [`SeparatorEngine`]: renders each item through an [`ItemRenderer`] and
//!   applies the action for its position to a [`TextSink`]
//!
//! [`CodegenWriter`] is the bundled sink. [`FragmentRenderer`] renders text,
//! producers, [`Template`]s and nested sequences; [`ValueRenderer`] renders
//! JSON values.
//!
//! # Example
//!
//! ```
//! use weave_sequence::{CodegenWriter, RenderOptions, RenderSequenceExt, TextSink};
//!
//! let mut writer = CodegenWriter::new();
//! writer.write("enum Color {\n");
//! writer
//!     .render(["Red", "Green", "Blue"].render_with(RenderOptions::MULTI_LINE_CSV))
//!     .unwrap();
//! writer.write("\n}");
//!
//! assert_eq!(writer.as_str(), "enum Color {\nRed,\nGreen,\nBlue\n}");
//! ```

mod action;
mod engine;
mod error;
mod fragment;
mod options;
mod sequence;
mod sink;
mod template;
mod value;
mod writer;

pub use action::SeparatorAction;
pub use engine::{ItemRenderer, RendererFn, SeparatorEngine, renderer_fn};
pub use error::{ParseNameError, RenderError};
pub use fragment::{Fragment, FragmentRenderer};
pub use options::{DEFAULT_SEPARATOR, OptionsError, Preset, RenderOptions};
pub use sequence::{RenderSequenceExt, RenderableSequence};
pub use sink::TextSink;
pub use template::{Template, TemplateError};
pub use value::ValueRenderer;
pub use writer::{CodegenWriter, Newline};
