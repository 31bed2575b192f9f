//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn colored(&self) -> bool {
        !self.no_color && self.resolved_format == OutputFormat::Human
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}") // ✓
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode — errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.colored() {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        } else {
            format!("\u{2717} {msg}") // ✗
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        } else {
            format!("\u{26a0} {msg}") // ⚠
        };
        self.term.write_line(&line)
    }

    /// Informational message, dimmed when colors are on.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            format!("{}", msg.dimmed())
        } else {
            msg.to_string()
        };
        self.term.write_line(&line)
    }

    /// Section header, bold when colors are on.
    pub fn header(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            format!("{}", msg.bold())
        } else {
            msg.to_string()
        };
        self.term.write_line(&line)
    }

    /// Aligned `key: value` line, key dimmed when colors are on.
    pub fn key_value(&self, key: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            format!("  {:<10} {}", format!("{key}:").dimmed(), value)
        } else {
            format!("  {:<10} {value}", format!("{key}:"))
        };
        self.term.write_line(&line)
    }
}
