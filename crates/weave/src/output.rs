//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a formatter writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::with_term(Term::stderr())
    }

    /// Create a formatter writing to stdout.
    #[must_use]
    pub(crate) fn stdout() -> Self {
        Self::with_term(Term::stdout())
    }

    fn with_term(term: Term) -> Self {
        Self {
            term,
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print an info message without styling.
    ///
    /// `weave presets` lists through a stdout formatter with this, so the
    /// listing stays plain text when piped.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }
}
