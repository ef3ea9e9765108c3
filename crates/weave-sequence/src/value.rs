//! Rendering of JSON values.
//!
//! Lets sequences be described as data: a JSON string is literal text, a
//! JSON array is a nested sequence, and an object of the form
//! `{"items": [...], "preset": "single-line-csv"}` is a nested sequence with
//! explicit options. Anything else is rejected.

use serde_json::{Map, Value};

use crate::engine::{ItemRenderer, SeparatorEngine};
use crate::error::RenderError;
use crate::options::{Preset, RenderOptions};
use crate::sequence::RenderableSequence;
use crate::sink::TextSink;

/// Renders [`serde_json::Value`] items.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use weave_sequence::{CodegenWriter, RenderSequenceExt, SeparatorEngine, ValueRenderer};
///
/// let items = json!(["use std::fmt;", {"items": ["a", "b"], "preset": "single-line-csv"}]);
/// let items = items.as_array().cloned().unwrap_or_default();
///
/// let mut writer = CodegenWriter::new();
/// SeparatorEngine::render(items.render(), &mut writer, &mut ValueRenderer).unwrap();
/// assert_eq!(writer.as_str(), "use std::fmt;\na, b");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueRenderer;

impl<S: TextSink + ?Sized> ItemRenderer<Value, S> for ValueRenderer {
    fn render_item(&mut self, sink: &mut S, item: Value) -> Result<(), RenderError> {
        match item {
            Value::String(text) => {
                sink.write(&text);
                Ok(())
            }
            Value::Array(items) => {
                SeparatorEngine::render(RenderableSequence::new(items), sink, self)
            }
            Value::Object(map) => {
                let sequence = sequence_from_object(map)?;
                SeparatorEngine::render(sequence, sink, self)
            }
            other => Err(RenderError::unsupported(value_kind(&other))),
        }
    }
}

fn sequence_from_object(
    mut map: Map<String, Value>,
) -> Result<RenderableSequence<Vec<Value>>, RenderError> {
    let Some(Value::Array(items)) = map.remove("items") else {
        return Err(RenderError::unsupported("object"));
    };

    let options = match map.remove("preset") {
        None => None,
        Some(Value::String(name)) => Some(RenderOptions::from(name.parse::<Preset>()?)),
        Some(other) => return Err(RenderError::unsupported(value_kind(&other))),
    };

    Ok(match options {
        Some(options) => RenderableSequence::with_options(items, options),
        None => RenderableSequence::new(items),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
