//! Sequences submitted to the engine.

use crate::options::RenderOptions;

/// Items paired with the options that separate them.
///
/// The items are consumed once, lazily, in order. Without options the
/// engine falls back to [`TextSink::default_options`](crate::TextSink::default_options).
#[derive(Clone, Debug)]
pub struct RenderableSequence<I> {
    items: I,
    options: Option<RenderOptions>,
}

impl<I: IntoIterator> RenderableSequence<I> {
    /// Wrap items without options.
    pub fn new(items: I) -> Self {
        Self {
            items,
            options: None,
        }
    }

    /// Wrap items with explicit options.
    pub fn with_options(items: I, options: RenderOptions) -> Self {
        Self {
            items,
            options: Some(options),
        }
    }

    /// Explicit options, if any.
    pub fn options(&self) -> Option<&RenderOptions> {
        self.options.as_ref()
    }

    /// Split into items and options.
    pub fn into_parts(self) -> (I, Option<RenderOptions>) {
        (self.items, self.options)
    }

    /// Convert the item collection, keeping the options.
    pub fn map_items<J: IntoIterator>(self, f: impl FnOnce(I) -> J) -> RenderableSequence<J> {
        RenderableSequence {
            items: f(self.items),
            options: self.options,
        }
    }
}

/// Declarative constructors for [`RenderableSequence`] on any iterable.
///
/// # Example
///
/// ```
/// use weave_sequence::{CodegenWriter, RenderSequenceExt};
///
/// let mut writer = CodegenWriter::new();
/// writer.render(vec!["a", "b", "c"].render_as_single_line_csv()).unwrap();
/// assert_eq!(writer.as_str(), "a, b, c");
/// ```
pub trait RenderSequenceExt: IntoIterator + Sized {
    /// Render with the sink's default options.
    fn render(self) -> RenderableSequence<Self> {
        RenderableSequence::new(self)
    }

    /// Render with explicit options (e.g. one of the [`RenderOptions`] presets).
    fn render_with(self, options: RenderOptions) -> RenderableSequence<Self> {
        RenderableSequence::with_options(self, options)
    }

    /// Render one item per line, with an empty line between items if
    /// `use_spacer` is set.
    fn render_with_line_breaks(self, use_spacer: bool) -> RenderableSequence<Self> {
        let options = if use_spacer {
            RenderOptions::LINE_BREAKS_WITH_SPACER
        } else {
            RenderOptions::LINE_BREAKS_WITHOUT_SPACER
        };
        RenderableSequence::with_options(self, options)
    }

    /// Join single-line items with `", "`, nothing after the last item.
    fn render_as_single_line_csv(self) -> RenderableSequence<Self> {
        RenderableSequence::with_options(self, RenderOptions::SINGLE_LINE_CSV)
    }
}

impl<I: IntoIterator> RenderSequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_has_no_options() {
        let sequence = vec!["a"].render();
        assert!(sequence.options().is_none());
    }

    #[test]
    fn test_render_with_line_breaks() {
        let spaced = ["a"].render_with_line_breaks(true);
        assert_eq!(spaced.options(), Some(&RenderOptions::LINE_BREAKS_WITH_SPACER));

        let compact = ["a"].render_with_line_breaks(false);
        assert_eq!(
            compact.options(),
            Some(&RenderOptions::LINE_BREAKS_WITHOUT_SPACER)
        );
    }

    #[test]
    fn test_render_as_single_line_csv() {
        let sequence = (1..=3).render_as_single_line_csv();
        assert_eq!(sequence.options(), Some(&RenderOptions::SINGLE_LINE_CSV));
    }

    #[test]
    fn test_map_items_keeps_options() {
        let sequence = vec![1, 2]
            .render_with(RenderOptions::MULTI_LINE_CSV)
            .map_items(|items| items.into_iter().map(|n| n.to_string()).collect::<Vec<_>>());
        let (items, options) = sequence.into_parts();

        assert_eq!(items, vec!["1".to_owned(), "2".to_owned()]);
        assert_eq!(options, Some(RenderOptions::MULTI_LINE_CSV));
    }
}
