//! `weave presets` command implementation.

use weave_sequence::{Preset, RenderOptions, SeparatorAction};

use crate::output::Output;

/// Print every preset with the actions it uses.
pub(crate) fn execute() {
    let output = Output::stdout();
    for preset in Preset::ALL {
        output.highlight(preset.name());
        for line in describe(&preset.options()) {
            output.info(&line);
        }
    }
}

/// Indented description lines for a set of options.
fn describe(options: &RenderOptions) -> Vec<String> {
    let mut lines = vec![
        format!("  between:    {}", options.between()),
        format!("  after last: {}", options.after_last()),
    ];
    let uses_separator = [options.between(), options.after_last()]
        .into_iter()
        .any(SeparatorAction::uses_custom_separator);
    if uses_separator {
        lines.push(format!("  separator:  {:?}", options.separator()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_describe_line_breaks() {
        assert_eq!(
            describe(&RenderOptions::LINE_BREAKS_WITH_SPACER),
            vec![
                "  between:    ensure-full-empty-line".to_owned(),
                "  after last: ensure-line-break-before-next-write".to_owned(),
            ]
        );
    }

    #[test]
    fn test_describe_shows_escaped_separator() {
        let lines = describe(&RenderOptions::MULTI_LINE_CSV);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], r#"  separator:  ",\n""#);
    }
}
