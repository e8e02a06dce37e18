//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Status messages go to stderr. Command results (page HTML, listings) go
/// to stdout so they can be piped.
pub(crate) struct Output {
    status: Term,
    results: Term,
    warn_style: Style,
    error_style: Style,
    heading_style: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            results: Term::stdout(),
            warn_style: Style::new().yellow(),
            error_style: Style::new().red(),
            heading_style: Style::new().cyan().bold(),
        }
    }

    /// Print a plain status line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    /// Print a warning (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&self.warn_style, msg);
    }

    /// Print an error (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.error_style, msg);
    }

    /// Print a heading (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        self.styled(&self.heading_style, msg);
    }

    /// Write one result line to stdout.
    pub(crate) fn result(&self, line: &str) -> std::io::Result<()> {
        self.results.write_line(line)
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.status.write_line(&style.apply_to(msg).to_string());
    }
}
