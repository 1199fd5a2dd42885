//! Status lines, prompts and listing output for the `dragonball` binary.
//!
//! Status markers and spinners go to stderr. Stdout carries only command
//! output (a token, a hero listing, JSON) so it can be piped.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Green check mark followed by `message`, on stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Failure marker, on stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Underlined title above a hero or transformation listing.
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// One indented field of a listed entry, e.g. `id: 1`.
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Spinner shown while a request is in flight.
///
/// indicatif draws on stderr, so a token printed to stdout is not mixed
/// with spinner frames.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Ask for a value missing from the command line, such as the user name.
pub fn input(prompt: &str) -> anyhow::Result<String> {
    use dialoguer::Input;
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

/// Rule between listed entries.
pub fn separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// Pretty-printed JSON on stdout, used by `--json`.
pub fn json(value: &serde_json::Value) {
    if let Ok(pretty) = serde_json::to_string_pretty(value) {
        println!("{}", pretty);
    }
}
