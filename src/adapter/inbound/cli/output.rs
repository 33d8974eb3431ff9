//! CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and colors. Logs go through `tracing` to stderr;
//! everything here goes to stdout except errors.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Paint output with ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, color: bool) -> Self {
        Self { json, quiet, color }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Apply output settings from global CLI flags.
///
/// Call this early in the CLI entry point, before any handler prints.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

fn paint(value: impl Display, style: fn(&str) -> String) -> String {
    let value = value.to_string();
    if read_config().color {
        style(&value)
    } else {
        value
    }
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "{} {}",
        paint("supplyplan", |s| s.bold().to_string()),
        paint(version, |s| s.dimmed().to_string())
    );
}

/// Print a section header.
pub fn section(title: &str) {
    if regular_output_suppressed(read_config()) {
        return;
    }

    println!();
    println!("{}", paint(title, |s| s.bold().to_string()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if regular_output_suppressed(read_config()) {
        return;
    }

    let label = format!("{label:<14}");
    println!("  {} {}", paint(label, |s| s.dimmed().to_string()), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if regular_output_suppressed(read_config()) {
        return;
    }

    println!("  {} {}", paint("✓", |s| s.green().to_string()), message);
}

/// Print a warning line. Shown in quiet mode too.
pub fn warning(message: &str) {
    if read_config().json {
        return;
    }

    println!("  {} {}", paint("⚠", |s| s.yellow().to_string()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if read_config().json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", paint("×", |s| s.red().to_string()), message);
}

/// Print a note/hint.
pub fn note(message: &str) {
    if regular_output_suppressed(read_config()) {
        return;
    }

    println!("  {}", paint(message, |s| s.dimmed().to_string()));
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    if regular_output_suppressed(read_config()) {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Print essential multi-line content, indented. Shown in quiet mode too.
pub fn block(content: &str) {
    if read_config().json {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value directly.
pub fn json_output(value: &serde_json::Value) {
    println!("{value}");
}
