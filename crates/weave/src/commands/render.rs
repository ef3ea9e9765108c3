//! `weave render` command implementation.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Args;
use weave_config::{CliSettings, Config};
use weave_sequence::{
    CodegenWriter, ItemRenderer, Newline, Preset, RenderSequenceExt, SeparatorAction, TextSink,
    ValueRenderer,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file (default: read stdin).
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover weave.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Separator preset (overrides config).
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Action between items (overrides config).
    #[arg(long)]
    between: Option<SeparatorAction>,

    /// Action after the last item (overrides config).
    #[arg(long)]
    after_last: Option<SeparatorAction>,

    /// Custom separator; `\n`, `\t` and `\\` escapes are expanded (overrides config).
    #[arg(short, long)]
    separator: Option<String>,

    /// Line break style: lf or crlf (overrides config).
    #[arg(long)]
    newline: Option<Newline>,

    /// End output with a line break if one is pending after the last item.
    #[arg(long)]
    trailing_newline: bool,

    /// Read input as a JSON array instead of blank-line separated blocks.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input can't be read, or
    /// an item can't be rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            preset: self.preset,
            between: self.between,
            after_last: self.after_last,
            separator: self.separator.as_deref().map(unescape),
            newline: self.newline,
            trailing_newline: self.trailing_newline.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration file");
        }

        let input = match &self.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        if input.trim().is_empty() {
            Output::new().warning("Input is empty, nothing to render");
        }

        let rendered = render_input(&input, self.json, &config)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Render `input` with the configured writer and return the generated text.
fn render_input(input: &str, json: bool, config: &Config) -> Result<String, CliError> {
    let mut writer = config.writer();

    if json {
        let value: serde_json::Value = serde_json::from_str(input)?;
        ValueRenderer.render_item(&mut writer, value)?;
    } else {
        let blocks = split_blocks(input);
        tracing::info!(items = blocks.len(), "Rendering text blocks");
        writer.render(blocks.render())?;
    }

    Ok(finish(writer, config.output.trailing_newline))
}

/// Close the output, resolving a pending line break.
fn finish(mut writer: CodegenWriter, trailing_newline: bool) -> String {
    if trailing_newline && writer.has_pending_line_break() {
        writer.write_line_break();
    }
    writer.into_string()
}

/// Split text into blocks separated by blank lines.
///
/// Lines inside a block keep their order; surrounding blank lines are
/// dropped.
fn split_blocks(input: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Expand `\n`, `\t` and `\\` escapes typed on the command line.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use weave_sequence::RenderError;

    use super::*;

    fn config(toml: &str) -> Config {
        Config::from_toml(toml).unwrap()
    }

    #[test]
    fn test_split_blocks() {
        let input = "\nfn a() {\n}\n\n\nconst B: u8 = 1;\n  \nconst C: u8 = 2;\n";
        assert_eq!(
            split_blocks(input),
            vec![
                "fn a() {\n}".to_owned(),
                "const B: u8 = 1;".to_owned(),
                "const C: u8 = 2;".to_owned(),
            ]
        );
    }

    #[test]
    fn test_split_blocks_empty() {
        assert!(split_blocks("\n \n").is_empty());
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(",\\n"), ",\n");
        assert_eq!(unescape("a\\tb"), "a\tb");
        assert_eq!(unescape("\\\\n"), "\\n");
        assert_eq!(unescape("\\x"), "\\x");
        assert_eq!(unescape("end\\"), "end\\");
    }

    #[test]
    fn test_render_text_auto_spacer() {
        let input = "fn a() {\n}\n\nconst B: u8 = 1;\n\nconst C: u8 = 2;\n";
        let output = render_input(input, false, &config("")).unwrap();
        assert_eq!(output, "fn a() {\n}\n\nconst B: u8 = 1;\nconst C: u8 = 2;");
    }

    #[test]
    fn test_render_text_trailing_newline() {
        let config = config("[output]\ntrailing_newline = true\n");
        let output = render_input("a\n\nb\n", false, &config).unwrap();
        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_render_text_single_line_csv_has_no_trailing_newline() {
        let config = config(
            "[sequence]\npreset = \"single-line-csv\"\n\n[output]\ntrailing_newline = true\n",
        );
        let output = render_input("a\n\nb\n\nc", false, &config).unwrap();
        assert_eq!(output, "a, b, c");
    }

    #[test]
    fn test_render_json() {
        let input = r#"["use a;", {"items": ["x", "y"], "preset": "single-line-csv"}]"#;
        let output = render_input(input, true, &config("")).unwrap();
        assert_eq!(output, "use a;\nx, y");
    }

    #[test]
    fn test_render_json_crlf() {
        let config = config("[sequence]\npreset = \"multi-line-csv\"\n\n[output]\nnewline = \"crlf\"\n");
        let output = render_input(r#"["a", "b"]"#, true, &config).unwrap();
        assert_eq!(output, "a,\r\nb");
    }

    #[test]
    fn test_render_json_unsupported_item() {
        let err = render_input("[\"a\", 1]", true, &config("")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Render(RenderError::UnsupportedItemType { .. })
        ));
        assert_eq!(err.to_string(), "Unsupported item type: number");
    }

    #[test]
    fn test_render_invalid_json() {
        let err = render_input("[", true, &config("")).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
