//! Terminal styling for headers and status messages.
//!
//! Styling is only applied when stdout is a terminal, so piped output stays plain.

use std::io::{self, IsTerminal};

/// ANSI color codes for terminal output.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan foreground color.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow foreground color.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/faint text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in the given codes when writing to a terminal.
fn paint(codes: &[&str], text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("{}{text}{}", codes.concat(), colors::RESET)
    } else {
        text.to_string()
    }
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    paint(&[colors::YELLOW], text)
}
