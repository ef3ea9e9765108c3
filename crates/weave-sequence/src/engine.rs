//! Separator engine.
//!
//! Renders the items of a [`RenderableSequence`] one by one and decides what
//! to write between and after them. The engine never buffers: each item is
//! rendered straight into the sink, the resulting sink state is inspected,
//! and the separator action for the item's position is applied before the
//! next item is rendered.

use crate::action::SeparatorAction;
use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::sequence::RenderableSequence;
use crate::sink::TextSink;

/// Turns one sequence item into text written to a sink.
///
/// Renderers may call back into [`SeparatorEngine::render`] with the same
/// sink to render nested sequences.
pub trait ItemRenderer<T, S: TextSink + ?Sized> {
    /// Write `item` into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedItemType`] for items the renderer
    /// can't handle, or any error from nested rendering.
    fn render_item(&mut self, sink: &mut S, item: T) -> Result<(), RenderError>;
}

/// [`ItemRenderer`] backed by a closure, created with [`renderer_fn`].
#[derive(Clone, Copy, Debug)]
pub struct RendererFn<F>(F);

/// Use a closure as an [`ItemRenderer`].
///
/// # Example
///
/// ```
/// use weave_sequence::{
///     CodegenWriter, RenderOptions, RenderSequenceExt, SeparatorEngine, TextSink, renderer_fn,
/// };
///
/// let mut writer = CodegenWriter::new();
/// let mut renderer = renderer_fn(|sink: &mut CodegenWriter, n: u32| {
///     sink.write(&format!("item{n}"));
///     Ok(())
/// });
///
/// let numbers = (1u32..=3).render_with(RenderOptions::SINGLE_LINE_CSV);
/// SeparatorEngine::render(numbers, &mut writer, &mut renderer).unwrap();
/// assert_eq!(writer.as_str(), "item1, item2, item3");
/// ```
pub fn renderer_fn<F>(f: F) -> RendererFn<F> {
    RendererFn(f)
}

impl<T, S, F> ItemRenderer<T, S> for RendererFn<F>
where
    S: TextSink + ?Sized,
    F: FnMut(&mut S, T) -> Result<(), RenderError>,
{
    fn render_item(&mut self, sink: &mut S, item: T) -> Result<(), RenderError> {
        (self.0)(sink, item)
    }
}

/// Applies separator actions around rendered sequence items.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeparatorEngine;

impl SeparatorEngine {
    /// Render every item of `sequence` into `sink`.
    ///
    /// Items are rendered in order through `renderer`. After each item the
    /// `between` action applies, except after the last item, which gets the
    /// `after_last` action. A sequence without options uses
    /// [`TextSink::default_options`].
    ///
    /// An empty sequence writes nothing. The deferred line break armed by
    /// [`SeparatorAction::EnsureLineBreakBeforeNextWrite`] is left to the
    /// sink; if nothing is written afterwards, no line break appears.
    ///
    /// # Errors
    ///
    /// Returns the first error from `renderer`. Rendering stops there and
    /// the output written so far stays in the sink.
    pub fn render<I, S, R>(
        sequence: RenderableSequence<I>,
        sink: &mut S,
        renderer: &mut R,
    ) -> Result<(), RenderError>
    where
        I: IntoIterator,
        S: TextSink + ?Sized,
        R: ItemRenderer<I::Item, S> + ?Sized,
    {
        let (items, options) = sequence.into_parts();
        let options = options.unwrap_or_else(|| sink.default_options());

        let mut items = items.into_iter().peekable();
        let mut index = 0usize;
        while let Some(item) = items.next() {
            // A pending break belongs to the preceding content, not to this item.
            let breaks_before =
                sink.line_breaks_written() + usize::from(sink.has_pending_line_break());
            renderer.render_item(sink, item)?;

            let multiline = spans_multiple_lines(sink, breaks_before);
            let action = if items.peek().is_some() {
                options.between()
            } else {
                options.after_last()
            };

            tracing::trace!(index, %action, multiline, "Applying separator");
            apply_action(action, &options, sink, multiline);
            index += 1;
        }

        tracing::debug!(items = index, "Rendered sequence");
        Ok(())
    }
}

/// Whether the text written since `breaks_before` covers more than one line.
///
/// Each line break closes a line; a dirty line at the end is one more. If
/// the item wrote nothing, a break that was pending before it is still
/// pending and the count saturates at zero.
fn spans_multiple_lines<S: TextSink + ?Sized>(sink: &S, breaks_before: usize) -> bool {
    let breaks = sink.line_breaks_written().saturating_sub(breaks_before);
    breaks + usize::from(sink.is_line_dirty()) > 1
}

fn apply_action<S: TextSink + ?Sized>(
    action: SeparatorAction,
    options: &RenderOptions,
    sink: &mut S,
    multiline: bool,
) {
    match action {
        SeparatorAction::WriteLineBreak => sink.write_line_break(),
        SeparatorAction::EnsureLineBreak => sink.ensure_line_break(),
        SeparatorAction::EnsureLineBreakBeforeNextWrite => sink.arm_deferred_line_break(),
        SeparatorAction::EnsureFullEmptyLine => write_empty_line(sink),
        SeparatorAction::EnsureFullEmptyLineAfterMultilineItems => {
            if multiline {
                write_empty_line(sink);
            } else {
                sink.ensure_line_break();
            }
        }
        SeparatorAction::WriteCustomSeparator => sink.write(options.separator()),
        SeparatorAction::None => {}
    }
}

fn write_empty_line<S: TextSink + ?Sized>(sink: &mut S) {
    sink.ensure_line_break();
    sink.write_line_break();
}
