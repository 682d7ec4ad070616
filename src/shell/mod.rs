//! Rustyline-based interactive shell.
//!
//! Provides command completion, syntax highlighting, hints, and persistent
//! history around the command registry.

pub mod command;
pub mod commands;
pub mod completer;
pub mod highlighter;
pub mod hints;
pub mod history;

use anyhow::Result;
use rustyline::completion::Completer;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::{
    MatchingBracketValidator, ValidationContext, ValidationResult, Validator,
};
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow;
use std::sync::Arc;

use crate::generator::Generator;
use crate::store::Store;

use command::{CommandRegistry, CommandResult, ShellContext};
use commands::register_all;
use completer::ForgeCompleter;
use highlighter::{ForgeHighlighter, OutputHighlighter};
use hints::ForgeHinter;
use history::HistoryConfig;

/// The prompt displayed to the user.
const PROMPT: &str = "passforge> ";

/// Combined helper for rustyline that provides all shell features.
pub struct ForgeHelper {
    completer: ForgeCompleter,
    highlighter: ForgeHighlighter,
    hinter: ForgeHinter,
    validator: MatchingBracketValidator,
}

impl ForgeHelper {
    /// Creates a new helper with all shell features.
    pub fn new(registry: Arc<CommandRegistry>, store: Arc<Store>) -> Self {
        Self {
            completer: ForgeCompleter::new(Arc::clone(&registry), store),
            highlighter: ForgeHighlighter::new(Arc::clone(&registry)),
            hinter: ForgeHinter::new(registry),
            validator: MatchingBracketValidator::new(),
        }
    }
}

impl Completer for ForgeHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for ForgeHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        self.highlighter.highlight_prompt(prompt, default)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        self.highlighter.highlight_hint(hint)
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        self.highlighter.highlight_candidate(candidate, completion)
    }

    fn highlight_char(&self, line: &str, pos: usize, kind: rustyline::highlight::CmdKind) -> bool {
        self.highlighter.highlight_char(line, pos, kind)
    }
}

impl Hinter for ForgeHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Validator for ForgeHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        self.validator.validate(ctx)
    }
}

impl Helper for ForgeHelper {}

/// Configuration for the shell.
pub struct ShellConfig {
    /// History configuration.
    pub history: HistoryConfig,
    /// Whether to show the welcome message.
    pub show_welcome: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            show_welcome: true,
        }
    }
}

/// The interactive shell.
pub struct Shell {
    registry: Arc<CommandRegistry>,
    config: ShellConfig,
}

impl Shell {
    /// Creates a new shell with default configuration.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Creates a shell with custom configuration.
    pub fn with_config(config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    /// Runs the interactive shell until the user exits.
    pub fn run(&self, store: Arc<Store>, generator: &mut Generator) -> Result<()> {
        let helper = ForgeHelper::new(Arc::clone(&self.registry), Arc::clone(&store));

        let mut editor: Editor<ForgeHelper, FileHistory> = Editor::new()?;
        editor.set_helper(Some(helper));
        editor.set_max_history_size(self.config.history.max_entries)?;

        if self.config.history.path.exists() {
            if let Err(e) = editor.load_history(&self.config.history.path) {
                log::warn!("Could not load history: {}", e);
            }
        }

        if self.config.show_welcome {
            println!("Type 'help' for available commands.");
        }

        log::info!("Shell started");

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = editor.add_history_entry(line);

                    match self.execute_line(line, &store, generator) {
                        CommandResult::Success(Some(msg)) => println!("{}", msg),
                        CommandResult::Success(None) => {}
                        CommandResult::Error(msg) => {
                            eprintln!("{}", OutputHighlighter::error(&msg));
                        }
                        CommandResult::Exit => {
                            log::info!("User requested exit");
                            break;
                        }
                        CommandResult::Continue => {}
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("exit");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", OutputHighlighter::error(&format!("Error: {}", err)));
                    log::error!("Readline error: {}", err);
                    break;
                }
            }
        }

        if let Some(parent) = self.config.history.path.parent() {
            if !parent.exists() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        if let Err(e) = editor.save_history(&self.config.history.path) {
            log::warn!("Failed to save history: {}", e);
        }

        log::info!("Shell exited");
        Ok(())
    }

    /// Parses and executes a single command line.
    fn execute_line(
        &self,
        line: &str,
        store: &Store,
        generator: &mut Generator,
    ) -> CommandResult {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return CommandResult::Continue;
        }

        let cmd_name = parts[0];
        let args: Vec<&str> = parts[1..].to_vec();

        log::debug!("Executing command: {}", cmd_name);

        match self.registry.get(cmd_name) {
            Some(cmd) => {
                let mut ctx = ShellContext::new(store, generator).with_registry(&self.registry);
                cmd.execute(&args, &mut ctx)
            }
            None => CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            )),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
