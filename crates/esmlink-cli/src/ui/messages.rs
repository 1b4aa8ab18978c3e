//! Status message functions for terminal output.

use owo_colors::{AnsiColors, OwoColorize};

fn symbol(text: &str, color: AnsiColors) -> String {
    if super::colors_enabled() {
        text.color(color).bold().to_string()
    } else {
        text.to_string()
    }
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    if super::is_quiet() {
        return;
    }
    eprintln!("{} {}", symbol("✓", AnsiColors::Green), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if super::is_quiet() {
        return;
    }
    eprintln!("{} {}", symbol("ℹ", AnsiColors::Blue), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if super::is_quiet() {
        return;
    }
    eprintln!("{} {}", symbol("⚠", AnsiColors::Yellow), message);
}
