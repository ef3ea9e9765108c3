//! Configuration management for weave.
//!
//! Parses `weave.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [sequence]
//! preset = "multi-line-csv"
//! after_last = "none"
//!
//! [output]
//! newline = "crlf"
//! ```
//!
//! The `[sequence]` section describes the options used for sequences that
//! don't carry their own. `preset` picks the base options; `between`,
//! `after_last` and `separator` override individual parts of it. Without a
//! preset the base is `line-breaks-with-auto-spacer`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use weave_sequence::{
    CodegenWriter, Newline, OptionsError, Preset, RenderOptions, SeparatorAction,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
/// A preset replaces the whole `[sequence]` section of the file.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the sequence preset.
    pub preset: Option<Preset>,
    /// Override the between-items action.
    pub between: Option<SeparatorAction>,
    /// Override the after-last-item action.
    pub after_last: Option<SeparatorAction>,
    /// Override the custom separator.
    pub separator: Option<String>,
    /// Override the newline style.
    pub newline: Option<Newline>,
    /// Override whether output ends with a pending line break.
    pub trailing_newline: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "weave.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sequence options as written in TOML.
    sequence: SequenceConfigRaw,
    /// Output configuration.
    pub output: OutputConfig,

    /// Resolved sequence options (set after loading).
    #[serde(skip)]
    pub render_options: RenderOptions,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence: SequenceConfigRaw::default(),
            output: OutputConfig::default(),
            render_options: RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER,
            config_path: None,
        }
    }
}

/// Raw `[sequence]` section as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SequenceConfigRaw {
    preset: Option<Preset>,
    between: Option<SeparatorAction>,
    after_last: Option<SeparatorAction>,
    separator: Option<String>,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Line break style of generated text.
    pub newline: Newline,
    /// Terminate output with a line break when one is still pending after
    /// the last item.
    pub trailing_newline: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Sequence options are inconsistent.
    #[error("Configuration error in [sequence]: {0}")]
    Options(#[from] OptionsError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `weave.toml` in current directory and parents.
    ///
    /// CLI settings are applied before the sequence options are resolved, so
    /// an inconsistent combination fails here rather than mid-render.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting sequence options are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.resolve()?;

        Ok(config)
    }

    /// Parse configuration from TOML text and resolve it.
    ///
    /// # Errors
    ///
    /// Returns error if parsing fails or the sequence options are invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.resolve()?;
        Ok(config)
    }

    /// Create a writer using the configured newline style and default options.
    #[must_use]
    pub fn writer(&self) -> CodegenWriter {
        CodegenWriter::new()
            .with_newline(self.output.newline)
            .with_default_options(self.render_options.clone())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(preset) = settings.preset {
            self.sequence = SequenceConfigRaw {
                preset: Some(preset),
                ..SequenceConfigRaw::default()
            };
        }
        if let Some(between) = settings.between {
            self.sequence.between = Some(between);
        }
        if let Some(after_last) = settings.after_last {
            self.sequence.after_last = Some(after_last);
        }
        if let Some(separator) = &settings.separator {
            self.sequence.separator = Some(separator.clone());
        }
        if let Some(newline) = settings.newline {
            self.output.newline = newline;
        }
        if let Some(trailing_newline) = settings.trailing_newline {
            self.output.trailing_newline = trailing_newline;
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Resolve the `[sequence]` section into render options.
    fn resolve(&mut self) -> Result<(), ConfigError> {
        self.render_options = self.sequence.resolve()?;
        if self.has_unused_separator() {
            tracing::warn!("sequence.separator is set but no action writes it");
        }
        Ok(())
    }

    /// Whether `sequence.separator` is set while neither action writes it.
    fn has_unused_separator(&self) -> bool {
        let uses_separator = self.render_options.between().uses_custom_separator()
            || self.render_options.after_last().uses_custom_separator();
        self.sequence.separator.is_some() && !uses_separator
    }
}

impl SequenceConfigRaw {
    fn resolve(&self) -> Result<RenderOptions, OptionsError> {
        let Some(preset) = self.preset else {
            let base = RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER;
            return RenderOptions::try_new(
                self.between.unwrap_or(base.between()),
                self.after_last.unwrap_or(base.after_last()),
                self.separator.clone(),
            );
        };

        let mut options = preset.options();
        if let Some(between) = self.between {
            options = options.with_between(between);
        }
        if let Some(after_last) = self.after_last {
            options = options.with_after_last(after_last);
        }
        if let Some(separator) = &self.separator {
            options = options.with_separator(separator.clone());
        }
        Ok(options)
    }
}

/// Search for the config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
