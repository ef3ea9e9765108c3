//! Render options and named presets.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::action::SeparatorAction;
use crate::error::ParseNameError;

/// Separator used when none is given explicitly.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// How the items of a sequence are separated.
///
/// Holds the action applied between consecutive items, the action applied
/// after the last item, and the literal separator written by
/// [`SeparatorAction::WriteCustomSeparator`]. Values are immutable; the
/// `with_*` adjusters return modified copies.
///
/// # Example
///
/// ```
/// use weave_sequence::{RenderOptions, SeparatorAction};
///
/// let options = RenderOptions::with_custom_separator(" | ", true);
/// assert_eq!(options.between(), SeparatorAction::WriteCustomSeparator);
/// assert_eq!(options.after_last(), SeparatorAction::None);
/// assert_eq!(options.separator(), " | ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    between: SeparatorAction,
    after_last: SeparatorAction,
    separator: Cow<'static, str>,
}

/// Error raised when constructing inconsistent [`RenderOptions`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// A custom separator action was chosen without a separator string.
    #[error("Invalid configuration: {slot} action is write-custom-separator but no separator is set")]
    InvalidConfiguration {
        /// Which slot requested the separator (`between` or `after_last`).
        slot: &'static str,
    },
}

impl RenderOptions {
    /// Between items: ensure a line break. After the last item: line break
    /// before the next write.
    pub const LINE_BREAKS_WITHOUT_SPACER: Self =
        Self::line_breaks(SeparatorAction::EnsureLineBreak);

    /// Between items: a full empty line. After the last item: line break
    /// before the next write.
    pub const LINE_BREAKS_WITH_SPACER: Self =
        Self::line_breaks(SeparatorAction::EnsureFullEmptyLine);

    /// Between items: a full empty line after multi-line items, a plain line
    /// break after single-line items. After the last item: line break before
    /// the next write.
    ///
    /// This is the recommended behavior and the default for sequences
    /// rendered without explicit options.
    pub const LINE_BREAKS_WITH_AUTO_SPACER: Self =
        Self::line_breaks(SeparatorAction::EnsureFullEmptyLineAfterMultilineItems);

    /// Items joined by `", "`, nothing after the last item.
    pub const SINGLE_LINE_CSV: Self = Self::custom(DEFAULT_SEPARATOR, true);

    /// Items joined by `",\n"`, line break before the next write after the
    /// last item.
    pub const MULTI_LINE_CSV: Self = Self::custom(",\n", false);

    /// Items joined by `",\n\n"`, line break before the next write after the
    /// last item.
    pub const SPACED_MULTI_LINE_CSV: Self = Self::custom(",\n\n", false);

    const fn line_breaks(between: SeparatorAction) -> Self {
        Self {
            between,
            after_last: SeparatorAction::EnsureLineBreakBeforeNextWrite,
            separator: Cow::Borrowed(DEFAULT_SEPARATOR),
        }
    }

    const fn custom(separator: &'static str, single_line: bool) -> Self {
        Self {
            between: SeparatorAction::WriteCustomSeparator,
            after_last: if single_line {
                SeparatorAction::None
            } else {
                SeparatorAction::EnsureLineBreakBeforeNextWrite
            },
            separator: Cow::Borrowed(separator),
        }
    }

    /// Create options from two actions, using [`DEFAULT_SEPARATOR`] as the
    /// custom separator.
    #[must_use]
    pub const fn new(between: SeparatorAction, after_last: SeparatorAction) -> Self {
        Self {
            between,
            after_last,
            separator: Cow::Borrowed(DEFAULT_SEPARATOR),
        }
    }

    /// Create options from two actions and an optional separator.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidConfiguration`] if either action is
    /// [`SeparatorAction::WriteCustomSeparator`] and `separator` is `None`.
    pub fn try_new(
        between: SeparatorAction,
        after_last: SeparatorAction,
        separator: Option<String>,
    ) -> Result<Self, OptionsError> {
        let separator = match separator {
            Some(separator) => Cow::Owned(separator),
            None if between.uses_custom_separator() => {
                return Err(OptionsError::InvalidConfiguration { slot: "between" });
            }
            None if after_last.uses_custom_separator() => {
                return Err(OptionsError::InvalidConfiguration { slot: "after_last" });
            }
            None => Cow::Borrowed(DEFAULT_SEPARATOR),
        };

        Ok(Self {
            between,
            after_last,
            separator,
        })
    }

    /// Join items with `separator`.
    ///
    /// With `single_line` nothing is written after the last item; otherwise
    /// the next write after the sequence starts on a new line.
    #[must_use]
    pub fn with_custom_separator(
        separator: impl Into<Cow<'static, str>>,
        single_line: bool,
    ) -> Self {
        Self {
            separator: separator.into(),
            ..Self::custom(DEFAULT_SEPARATOR, single_line)
        }
    }

    /// Replace the action applied between items.
    #[must_use]
    pub fn with_between(mut self, action: SeparatorAction) -> Self {
        self.between = action;
        self
    }

    /// Replace the action applied after the last item.
    #[must_use]
    pub fn with_after_last(mut self, action: SeparatorAction) -> Self {
        self.after_last = action;
        self
    }

    /// Replace the custom separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Action applied between consecutive items.
    #[must_use]
    pub const fn between(&self) -> SeparatorAction {
        self.between
    }

    /// Action applied after the last item.
    #[must_use]
    pub const fn after_last(&self) -> SeparatorAction {
        self.after_last
    }

    /// Literal separator written by [`SeparatorAction::WriteCustomSeparator`].
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for RenderOptions {
    /// Both slots use [`SeparatorAction::EnsureLineBreakBeforeNextWrite`].
    ///
    /// Sequences rendered without options do not use this value; they fall
    /// back to the sink's default, normally
    /// [`LINE_BREAKS_WITH_AUTO_SPACER`](Self::LINE_BREAKS_WITH_AUTO_SPACER).
    fn default() -> Self {
        Self::new(
            SeparatorAction::EnsureLineBreakBeforeNextWrite,
            SeparatorAction::EnsureLineBreakBeforeNextWrite,
        )
    }
}

/// Named [`RenderOptions`] presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Preset {
    /// [`RenderOptions::LINE_BREAKS_WITHOUT_SPACER`]
    LineBreaksWithoutSpacer,
    /// [`RenderOptions::LINE_BREAKS_WITH_SPACER`]
    LineBreaksWithSpacer,
    /// [`RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER`]
    LineBreaksWithAutoSpacer,
    /// [`RenderOptions::SINGLE_LINE_CSV`]
    SingleLineCsv,
    /// [`RenderOptions::MULTI_LINE_CSV`]
    MultiLineCsv,
    /// [`RenderOptions::SPACED_MULTI_LINE_CSV`]
    SpacedMultiLineCsv,
}

impl Preset {
    /// All presets, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::LineBreaksWithoutSpacer,
        Self::LineBreaksWithSpacer,
        Self::LineBreaksWithAutoSpacer,
        Self::SingleLineCsv,
        Self::MultiLineCsv,
        Self::SpacedMultiLineCsv,
    ];

    /// Kebab-case name of the preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LineBreaksWithoutSpacer => "line-breaks-without-spacer",
            Self::LineBreaksWithSpacer => "line-breaks-with-spacer",
            Self::LineBreaksWithAutoSpacer => "line-breaks-with-auto-spacer",
            Self::SingleLineCsv => "single-line-csv",
            Self::MultiLineCsv => "multi-line-csv",
            Self::SpacedMultiLineCsv => "spaced-multi-line-csv",
        }
    }

    /// The options this preset stands for.
    #[must_use]
    pub const fn options(self) -> RenderOptions {
        match self {
            Self::LineBreaksWithoutSpacer => RenderOptions::LINE_BREAKS_WITHOUT_SPACER,
            Self::LineBreaksWithSpacer => RenderOptions::LINE_BREAKS_WITH_SPACER,
            Self::LineBreaksWithAutoSpacer => RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER,
            Self::SingleLineCsv => RenderOptions::SINGLE_LINE_CSV,
            Self::MultiLineCsv => RenderOptions::MULTI_LINE_CSV,
            Self::SpacedMultiLineCsv => RenderOptions::SPACED_MULTI_LINE_CSV,
        }
    }
}

impl From<Preset> for RenderOptions {
    fn from(preset: Preset) -> Self {
        preset.options()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| ParseNameError::new("preset", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SeparatorAction as A;

    static_assertions::assert_impl_all!(RenderOptions: Send, Sync, Clone);

    #[test]
    fn test_default_keeps_constructor_actions() {
        let options = RenderOptions::default();
        assert_eq!(options.between(), A::EnsureLineBreakBeforeNextWrite);
        assert_eq!(options.after_last(), A::EnsureLineBreakBeforeNextWrite);
        assert_eq!(options.separator(), ", ");
    }

    #[test]
    fn test_line_break_presets() {
        let cases = [
            (RenderOptions::LINE_BREAKS_WITHOUT_SPACER, A::EnsureLineBreak),
            (RenderOptions::LINE_BREAKS_WITH_SPACER, A::EnsureFullEmptyLine),
            (
                RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER,
                A::EnsureFullEmptyLineAfterMultilineItems,
            ),
        ];
        for (options, between) in cases {
            assert_eq!(options.between(), between);
            assert_eq!(options.after_last(), A::EnsureLineBreakBeforeNextWrite);
        }
    }

    #[test]
    fn test_csv_presets() {
        assert_eq!(RenderOptions::SINGLE_LINE_CSV.separator(), ", ");
        assert_eq!(RenderOptions::SINGLE_LINE_CSV.after_last(), A::None);
        assert_eq!(RenderOptions::MULTI_LINE_CSV.separator(), ",\n");
        assert_eq!(
            RenderOptions::MULTI_LINE_CSV.after_last(),
            A::EnsureLineBreakBeforeNextWrite
        );
        assert_eq!(RenderOptions::SPACED_MULTI_LINE_CSV.separator(), ",\n\n");
        assert_eq!(
            RenderOptions::SPACED_MULTI_LINE_CSV.between(),
            A::WriteCustomSeparator
        );
    }

    #[test]
    fn test_with_custom_separator_multi_line() {
        let options = RenderOptions::with_custom_separator(String::from(";\n"), false);
        assert_eq!(options.between(), A::WriteCustomSeparator);
        assert_eq!(options.after_last(), A::EnsureLineBreakBeforeNextWrite);
        assert_eq!(options.separator(), ";\n");
    }

    #[test]
    fn test_try_new_requires_separator() {
        let err = RenderOptions::try_new(A::WriteCustomSeparator, A::None, None).unwrap_err();
        assert_eq!(err, OptionsError::InvalidConfiguration { slot: "between" });

        let err = RenderOptions::try_new(A::EnsureLineBreak, A::WriteCustomSeparator, None)
            .unwrap_err();
        assert_eq!(err, OptionsError::InvalidConfiguration { slot: "after_last" });
    }

    #[test]
    fn test_try_new_with_separator() {
        let options =
            RenderOptions::try_new(A::WriteCustomSeparator, A::None, Some(" + ".to_owned()))
                .unwrap();
        assert_eq!(options.separator(), " + ");
    }

    #[test]
    fn test_try_new_without_custom_action_uses_default() {
        let options = RenderOptions::try_new(A::EnsureLineBreak, A::None, None).unwrap();
        assert_eq!(options.separator(), DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_adjusters() {
        let options = RenderOptions::SINGLE_LINE_CSV
            .with_after_last(A::WriteLineBreak)
            .with_separator(" / ");
        assert_eq!(options.between(), A::WriteCustomSeparator);
        assert_eq!(options.after_last(), A::WriteLineBreak);
        assert_eq!(options.separator(), " / ");
    }

    #[test]
    fn test_preset_round_trip_names() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
        assert!("csv".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_into_options() {
        let options: RenderOptions = Preset::MultiLineCsv.into();
        assert_eq!(options, RenderOptions::MULTI_LINE_CSV);
    }
}
