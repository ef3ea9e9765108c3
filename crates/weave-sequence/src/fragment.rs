//! Built-in item shapes and their renderer.

use std::fmt;

use crate::engine::{ItemRenderer, SeparatorEngine};
use crate::error::RenderError;
use crate::sequence::RenderableSequence;
use crate::sink::TextSink;
use crate::template::Template;

/// A piece of text-producing content.
///
/// Covers the item shapes [`FragmentRenderer`] understands: literal text,
/// a parameterless function producing text, a nested [`Template`], and a
/// nested sequence of fragments.
pub enum Fragment {
    /// Literal text.
    Text(String),
    /// Text produced on demand when the fragment is rendered.
    Producer(Box<dyn Fn() -> String>),
    /// Nested template.
    Template(Template),
    /// Nested sequence, rendered with its own options into the same sink.
    Sequence(RenderableSequence<Vec<Fragment>>),
}

impl Fragment {
    /// Create a fragment whose text is produced by `f` at render time.
    pub fn producer(f: impl Fn() -> String + 'static) -> Self {
        Self::Producer(Box::new(f))
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Sequence(sequence) => f.debug_tuple("Sequence").field(sequence).finish(),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Template> for Fragment {
    fn from(template: Template) -> Self {
        Self::Template(template)
    }
}

impl<T: Into<Fragment>> From<Vec<T>> for Fragment {
    fn from(items: Vec<T>) -> Self {
        RenderableSequence::new(items).into()
    }
}

impl<T: Into<Fragment>> From<RenderableSequence<Vec<T>>> for Fragment {
    fn from(sequence: RenderableSequence<Vec<T>>) -> Self {
        Self::Sequence(
            sequence.map_items(|items| items.into_iter().map(Into::into).collect()),
        )
    }
}

/// Renders anything convertible into a [`Fragment`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentRenderer;

impl FragmentRenderer {
    /// Write `fragment` into `sink`.
    pub fn render_fragment<S: TextSink + ?Sized>(
        sink: &mut S,
        fragment: Fragment,
    ) -> Result<(), RenderError> {
        match fragment {
            Fragment::Text(text) => sink.write(&text),
            Fragment::Producer(produce) => sink.write(&produce()),
            Fragment::Template(template) => template.render_into(sink)?,
            Fragment::Sequence(sequence) => {
                SeparatorEngine::render(sequence, sink, &mut FragmentRenderer)?;
            }
        }
        Ok(())
    }
}

impl<T, S> ItemRenderer<T, S> for FragmentRenderer
where
    T: Into<Fragment>,
    S: TextSink + ?Sized,
{
    fn render_item(&mut self, sink: &mut S, item: T) -> Result<(), RenderError> {
        Self::render_fragment(sink, item.into())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::options::RenderOptions;
    use crate::sequence::RenderSequenceExt;
    use crate::writer::CodegenWriter;

    #[test]
    fn test_producer_runs_at_render_time() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let fragment = Fragment::producer(move || {
            counter.set(counter.get() + 1);
            "generated".to_owned()
        });
        assert_eq!(calls.get(), 0);

        let mut writer = CodegenWriter::new();
        writer.write_fragment(fragment).unwrap();

        assert_eq!(writer.as_str(), "generated");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_mixed_fragments() {
        let items = vec![
            Fragment::from("one"),
            Fragment::producer(|| "two".to_owned()),
            Fragment::from(Template::new().text("thr").text("ee")),
        ];

        let mut writer = CodegenWriter::new();
        writer.render(items.render_as_single_line_csv()).unwrap();

        assert_eq!(writer.as_str(), "one, two, three");
    }

    #[test]
    fn test_nested_sequence_uses_its_own_options() {
        let inner = vec!["x", "y"].render_as_single_line_csv();
        let items = vec![Fragment::from("a"), Fragment::from(inner), Fragment::from("b")];

        let mut writer = CodegenWriter::new();
        writer
            .render(items.render_with(RenderOptions::LINE_BREAKS_WITHOUT_SPACER))
            .unwrap();

        assert_eq!(writer.as_str(), "a\nx, y\nb");
    }

    #[test]
    fn test_nested_sequence_deferred_break_closed_by_outer_separator() {
        let inner: Fragment = vec!["x", "y"].into();
        let items = vec![inner, Fragment::from("z")];

        let mut writer = CodegenWriter::new();
        writer
            .render(items.render_with(RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER))
            .unwrap();

        // The nested sequence spans two lines, so a spacer follows it.
        assert_eq!(writer.as_str(), "x\ny\n\nz");
    }

    #[test]
    fn test_debug_hides_producer() {
        let fragment = Fragment::producer(String::new);
        assert_eq!(format!("{fragment:?}"), "Producer(..)");
    }
}
