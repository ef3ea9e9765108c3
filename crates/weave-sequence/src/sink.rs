//! Output sink contract.

use crate::options::RenderOptions;

/// Text output that sequences are rendered into.
///
/// The sink owns the line state the engine reasons about: whether the
/// current line is dirty, how many line breaks were written so far, and the
/// pending "line break before next write" obligation. The obligation is
/// honored by the sink itself on its next write, so it survives the render
/// call that armed it.
///
/// [`CodegenWriter`](crate::CodegenWriter) is the bundled implementation.
pub trait TextSink {
    /// Whether the current line has content since the last line break.
    fn is_line_dirty(&self) -> bool;

    /// Write literal text.
    ///
    /// Line breaks inside `text` count as written line breaks. If a deferred
    /// line break is pending and `text` is non-empty, the obligation is
    /// discharged before the text lands.
    fn write(&mut self, text: &str);

    /// Write one line break unconditionally.
    fn write_line_break(&mut self);

    /// Write a line break if the current line is dirty.
    fn ensure_line_break(&mut self) {
        if self.is_line_dirty() {
            self.write_line_break();
        }
    }

    /// Require a line break before the next non-empty write.
    fn arm_deferred_line_break(&mut self);

    /// Whether a deferred line break is waiting for the next write.
    ///
    /// Sinks that discharge the obligation inside [`write`](Self::write)
    /// must report it here, so the line break it adds is not attributed to
    /// the item being rendered.
    fn has_pending_line_break(&self) -> bool {
        false
    }

    /// Total number of line breaks written so far.
    fn line_breaks_written(&self) -> usize;

    /// Options used for sequences rendered without explicit options.
    fn default_options(&self) -> RenderOptions {
        RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER
    }
}
