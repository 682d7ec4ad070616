//! Syntax highlighting for shell input and semantic colors for output.

use rustyline::highlight::{CmdKind, Highlighter};
use std::borrow::Cow;
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

/// ANSI color codes for highlighting.
pub mod colors {
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";

    /// Red foreground.
    pub const RED: &str = "\x1b[31m";
    /// Green foreground.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Magenta foreground.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// White foreground.
    pub const WHITE: &str = "\x1b[37m";

    /// Bright red foreground.
    pub const BRIGHT_RED: &str = "\x1b[91m";
    /// Bright green foreground.
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    /// Bright cyan foreground.
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// Highlighter for shell input with syntax coloring.
pub struct ForgeHighlighter {
    registry: Arc<CommandRegistry>,
}

impl ForgeHighlighter {
    /// Creates a new highlighter.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    fn highlight_line(&self, line: &str) -> String {
        if line.trim().is_empty() {
            return line.to_string();
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return line.to_string();
        }

        let command = parts[0];
        let is_valid_command = self.registry.get(command).is_some();

        let mut result = String::new();
        let leading_ws = &line[..line.len() - line.trim_start().len()];
        result.push_str(leading_ws);

        if is_valid_command {
            result.push_str(colors::BOLD);
            result.push_str(colors::CYAN);
            result.push_str(command);
            result.push_str(colors::RESET);
        } else {
            result.push_str(colors::RED);
            result.push_str(command);
            result.push_str(colors::RESET);
        }

        let cmd_end = line.find(command).unwrap_or(0) + command.len();
        let rest = &line[cmd_end..];
        if !rest.is_empty() {
            result.push_str(&self.highlight_arguments(command, rest));
        }

        result
    }

    fn highlight_arguments(&self, command: &str, args_str: &str) -> String {
        let mut result = String::new();
        let parts: Vec<&str> = args_str.split_whitespace().collect();

        let mut pos = 0;
        for (i, part) in parts.iter().enumerate() {
            let part_start = args_str[pos..].find(part).unwrap_or(0) + pos;
            result.push_str(&args_str[pos..part_start]);

            let color = match command {
                // Entry names stand out; passwords stay dim.
                "generate" | "gen" | "g" | "find" | "search" | "f" => colors::MAGENTA,
                "analyze" | "strength" => colors::DIM,
                "help" | "h" | "?" => colors::YELLOW,
                "set" | "config" => {
                    if i == 0 {
                        colors::YELLOW
                    } else {
                        colors::WHITE
                    }
                }
                _ => colors::WHITE,
            };

            result.push_str(color);
            result.push_str(part);
            result.push_str(colors::RESET);

            pos = part_start + part.len();
        }

        if pos < args_str.len() {
            result.push_str(&args_str[pos..]);
        }

        result
    }
}

impl Highlighter for ForgeHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(format!(
            "{}{}{}{}",
            colors::BOLD,
            colors::BRIGHT_GREEN,
            prompt,
            colors::RESET
        ))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("{}{}{}", colors::DIM, hint, colors::RESET))
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        _completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        Cow::Owned(format!(
            "{}{}{}",
            colors::BRIGHT_CYAN,
            candidate,
            colors::RESET
        ))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Utilities for semantic highlighting in output.
pub struct OutputHighlighter;

impl OutputHighlighter {
    /// Formats a success message.
    #[allow(unused)]
    pub fn success(msg: &str) -> String {
        format!("{}{}{}", colors::GREEN, msg, colors::RESET)
    }

    /// Formats an error message.
    pub fn error(msg: &str) -> String {
        format!("{}{}{}", colors::BRIGHT_RED, msg, colors::RESET)
    }
}
