//! Separator actions.
//!
//! A [`SeparatorAction`] describes what happens after an item has been
//! rendered. [`RenderOptions`](crate::RenderOptions) holds one action for the
//! slot between consecutive items and one for the slot after the last item.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

/// A single separator decision.
///
/// Actions are named in kebab-case when parsed from strings or (with the
/// `serde` feature) deserialized, e.g. `ensure-full-empty-line`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SeparatorAction {
    /// Unconditionally write one line break.
    WriteLineBreak,
    /// Write a line break only if the current line is dirty.
    ///
    /// Items that already end with a line break don't get a second one.
    EnsureLineBreak,
    /// Write nothing now, but make the sink insert a line break before the
    /// next content written to it, by anyone.
    ///
    /// Used after the last item: a sequence embedded in a template is
    /// usually followed by the template's own line break, so writing one
    /// eagerly would leave a blank line behind.
    EnsureLineBreakBeforeNextWrite,
    /// Like [`EnsureLineBreak`](Self::EnsureLineBreak), then write one more
    /// line break so a full empty line separates the items.
    EnsureFullEmptyLine,
    /// [`EnsureFullEmptyLine`](Self::EnsureFullEmptyLine) if the item spanned
    /// more than one line, otherwise [`EnsureLineBreak`](Self::EnsureLineBreak).
    EnsureFullEmptyLineAfterMultilineItems,
    /// Write the configured custom separator verbatim.
    WriteCustomSeparator,
    /// Write nothing.
    None,
}

impl SeparatorAction {
    /// All actions, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::WriteLineBreak,
        Self::EnsureLineBreak,
        Self::EnsureLineBreakBeforeNextWrite,
        Self::EnsureFullEmptyLine,
        Self::EnsureFullEmptyLineAfterMultilineItems,
        Self::WriteCustomSeparator,
        Self::None,
    ];

    /// Kebab-case name of the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WriteLineBreak => "write-line-break",
            Self::EnsureLineBreak => "ensure-line-break",
            Self::EnsureLineBreakBeforeNextWrite => "ensure-line-break-before-next-write",
            Self::EnsureFullEmptyLine => "ensure-full-empty-line",
            Self::EnsureFullEmptyLineAfterMultilineItems => {
                "ensure-full-empty-line-after-multiline-items"
            }
            Self::WriteCustomSeparator => "write-custom-separator",
            Self::None => "none",
        }
    }

    /// Whether applying this action writes the custom separator.
    #[must_use]
    pub const fn uses_custom_separator(self) -> bool {
        matches!(self, Self::WriteCustomSeparator)
    }
}

impl fmt::Display for SeparatorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeparatorAction {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| ParseNameError::new("separator action", s))
    }
}
