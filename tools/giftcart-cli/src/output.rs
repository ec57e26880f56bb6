//! Terminal output for the CLI.
//!
//! Commands render styled text by default. With `--json` they emit a single
//! machine-readable document instead, so every styled helper turns into a
//! no-op and only `json` (stdout) and `error` (stderr) still write.

use console::style;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Text,
    Json,
}

/// Handle for writing CLI output in the selected mode.
#[derive(Clone)]
pub struct Output {
    mode: Mode,
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            mode: if json { Mode::Json } else { Mode::Text },
            verbose,
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }

    fn text_mode(&self) -> bool {
        self.mode == Mode::Text
    }

    /// Neutral progress note.
    pub fn info(&self, msg: &str) {
        if self.text_mode() {
            println!("{} {}", style("·").blue(), msg);
        }
    }

    /// Something went right.
    pub fn success(&self, msg: &str) {
        if self.text_mode() {
            println!("{} {}", style("ok").green().bold(), msg);
        }
    }

    /// Recoverable problem, written to stderr.
    pub fn warn(&self, msg: &str) {
        if self.text_mode() {
            eprintln!("{} {}", style("warn").yellow().bold(), msg);
        }
    }

    /// Fatal problem, written to stderr in both modes.
    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
            Mode::Text => {
                eprintln!("{} {}", style("error").red().bold(), style(msg).red())
            }
        }
    }

    /// Extra detail, shown only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && self.text_mode() {
            eprintln!("{}", style(format!("# {msg}")).dim());
        }
    }

    /// Section title.
    pub fn header(&self, title: &str) {
        if self.text_mode() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Indented `key: value` row.
    pub fn kv(&self, key: &str, value: &str) {
        if self.text_mode() {
            println!("  {} {}", style(format!("{key}:")).dim(), value);
        }
    }

    /// Indented bullet row.
    pub fn list_item(&self, item: &str) {
        if self.text_mode() {
            println!("  - {}", item);
        }
    }

    /// Pretty-print a JSON document to stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(doc) => println!("{}", doc),
            Err(e) => self.error(&format!("serializing output: {e}")),
        }
    }

    /// Render a fixed-width meter for gift-threshold progress.
    pub fn meter(&self, percent: f64) -> String {
        const WIDTH: usize = 30;
        let filled = ((percent / 100.0) * WIDTH as f64).round() as usize;
        let filled = filled.min(WIDTH);
        format!(
            "[{}{}] {:>3.0}%",
            style("#".repeat(filled)).green(),
            "-".repeat(WIDTH - filled),
            percent
        )
    }
}
