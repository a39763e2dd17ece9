//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console handles NO_COLOR and non-tty detection):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: keys, paths, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print a success message with checkmark (green).
///
/// Example: `✓ added ephemeral`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: vocabvault login`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  username:  alice`
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        style(label).dim(),
        style(value.to_string()).bold()
    );
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print an indented secondary line under a list item.
pub fn list_detail(detail: &str) {
    println!("    {}", style(detail).dim());
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Format a key name in cyan for inline use.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}

/// Format a path string in cyan for inline use.
pub fn path(p: &str) -> String {
    style(p).cyan().to_string()
}

/// Print a dimmed/secondary message.
///
/// Example: `no words stored`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}
