//! Terminal output primitives for the typegen CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Color palette
pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51);
    pub const MAGENTA: Color = Color::Color256(201);
    pub const YELLOW: Color = Color::Color256(220);
    pub const NEON_GREEN: Color = Color::Color256(82);
    pub const DIM: Color = Color::Color256(240);
}

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}"; // ◆
    pub const DIAMOND_OUTLINE: &str = "\u{25C7}"; // ◇
    pub const TARGET_FILLED: &str = "\u{25C9}"; // ◉
    pub const TRIANGLE: &str = "\u{25B8}"; // ▸
    pub const DOT: &str = "\u{00B7}"; // ·
}

/// Print compact version header
pub fn print_compact_header(version: &str) {
    eprintln!(
        "  {} {} {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        style("typegen").fg(colors::CYAN).bold(),
        style(version).dim()
    );
}

/// Print a success message
pub fn success(msg: &str) {
    eprintln!("  {} {}", style(symbols::TARGET_FILLED).fg(colors::NEON_GREEN), msg);
}

/// Print an error header
pub fn error(msg: &str) {
    eprintln!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::MAGENTA).bold(),
        style(msg).fg(colors::MAGENTA).bold()
    );
}

/// Print a warning line
pub fn warn(msg: &str) {
    eprintln!("  {} {}", style(symbols::TRIANGLE).fg(colors::YELLOW), msg);
}

/// Print a dim/secondary message
pub fn dim(msg: &str) {
    eprintln!("    {}", style(msg).fg(colors::DIM));
}

/// Create a spinner for the schema load
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .tick_chars("\u{25CE}\u{25C9}\u{25CE}\u{25C9}") // ◎◉◎◉
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(spinner_style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(150));
    pb
}

/// "4 collections · 3 relations"
pub fn summary_line(collections: usize, relations: usize) -> String {
    format!(
        "{} {} {} {} {}",
        collections,
        plural(collections, "collection", "collections"),
        symbols::DOT,
        relations,
        plural(relations, "relation", "relations")
    )
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Print timing information
pub fn timing(label: &str, duration_ms: u128) {
    eprintln!(
        "  {} {} in {}ms",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CYAN),
        label,
        duration_ms
    );
}
