//! Terminal output for the CLI.

use console::style;
use wardrobe_commerce::catalog::StockStatus;

/// Prints human-readable messages, or stays quiet in JSON mode so stdout
/// carries only the JSON document.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn out(&self, line: String) {
        if !self.json {
            println!("{}", line);
        }
    }

    fn err(&self, line: String) {
        if !self.json {
            eprintln!("{}", line);
        }
    }

    pub fn info(&self, msg: &str) {
        self.out(format!("{} {}", style("ℹ").blue(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.out(format!("{} {}", style("✓").green(), msg));
    }

    pub fn warn(&self, msg: &str) {
        self.err(format!("{} {}", style("⚠").yellow(), msg));
    }

    /// Print an error message. In JSON mode this is an `{"error": ...}` object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only printed with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.err(format!("{} {}", style("→").dim(), style(msg).dim()));
        }
    }

    pub fn header(&self, msg: &str) {
        self.out(format!("\n{}", style(msg).bold().underlined()));
    }

    pub fn step(&self, num: usize, total: usize, msg: &str) {
        self.out(format!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg));
    }

    /// Print `value` as pretty JSON, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to serialize output: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.out(format!("  {}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.out(format!("  {} {}", style("•").dim(), item));
    }

    /// Print columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let padded: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| pad(col, *width))
            .collect();
        self.out(format!("  {}", padded.join("  ")));
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

// Pads by visible width so styled cells still line up.
fn pad(text: &str, width: usize) -> String {
    console::pad_str(text, width, console::Alignment::Left, None).into_owned()
}

/// Colored badge for a stock level.
pub fn stock_badge(status: StockStatus) -> String {
    let label = status.display_name();
    match status {
        StockStatus::InStock => style(label).green().to_string(),
        StockStatus::LowStock => style(label).yellow().to_string(),
        StockStatus::OutOfStock => style(label).red().to_string(),
    }
}

/// Colored badge for an on/off state.
pub fn active_badge(active: bool) -> String {
    if active {
        style("active").green().to_string()
    } else {
        style("inactive").dim().to_string()
    }
}

/// Shorten `text` to `max` characters, ending with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Charm Bracelet", 20), "Charm Bracelet");
        assert_eq!(truncate("Rose Gold Pearl Earrings", 10), "Rose Gold…");
    }
}
