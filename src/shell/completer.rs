//! Autocomplete for the shell.
//!
//! Completes command names from the registry and entry names from the store.

use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::sync::Arc;

use crate::shell::command::CommandRegistry;
use crate::store::Store;

/// Completer that handles both command and argument completion.
pub struct ForgeCompleter {
    registry: Arc<CommandRegistry>,
    store: Arc<Store>,
}

impl ForgeCompleter {
    /// Creates a new completer.
    pub fn new(registry: Arc<CommandRegistry>, store: Arc<Store>) -> Self {
        Self { registry, store }
    }

    fn complete_command(&self, partial: &str) -> Vec<Pair> {
        self.registry
            .completions(partial)
            .into_iter()
            .map(|s| Pair {
                display: s.clone(),
                replacement: s,
            })
            .collect()
    }

    fn complete_entry_name(&self, partial: &str) -> Vec<Pair> {
        let mut names = self.store.names_with_prefix(partial);
        names.sort();
        names
            .into_iter()
            .map(|s| Pair {
                display: s.clone(),
                replacement: s,
            })
            .collect()
    }

    /// Parses the input line to determine completion context.
    fn parse_context<'a>(&self, line: &'a str, pos: usize) -> CompletionContext<'a> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();

        if parts.is_empty() {
            return CompletionContext::Command { partial: "" };
        }

        let ends_with_space = line_to_pos.ends_with(' ');

        if parts.len() == 1 && !ends_with_space {
            return CompletionContext::Command { partial: parts[0] };
        }

        let command = parts[0];
        let arg_index = if ends_with_space {
            parts.len() - 1
        } else {
            parts.len() - 2
        };
        let partial = if ends_with_space {
            ""
        } else {
            parts.last().copied().unwrap_or("")
        };

        CompletionContext::Argument {
            command,
            arg_index,
            partial,
        }
    }
}

/// Whether the cursor sits in the command word or in an argument.
enum CompletionContext<'a> {
    Command {
        partial: &'a str,
    },
    Argument {
        command: &'a str,
        arg_index: usize,
        partial: &'a str,
    },
}

impl Completer for ForgeCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match self.parse_context(line, pos) {
            CompletionContext::Command { partial } => {
                let start = pos - partial.len();
                Ok((start, self.complete_command(partial)))
            }
            CompletionContext::Argument {
                command,
                arg_index,
                partial,
            } => {
                let completions = match command {
                    // Lookup commands complete stored entry names.
                    "find" | "search" | "f" => {
                        if arg_index == 0 {
                            self.complete_entry_name(partial)
                        } else {
                            vec![]
                        }
                    }
                    // Help completes command names.
                    "help" | "h" | "?" => {
                        if arg_index == 0 {
                            self.complete_command(partial)
                        } else {
                            vec![]
                        }
                    }
                    // generate takes a fresh name; analyze takes a password;
                    // everything else takes paths, numbers, or nothing.
                    _ => vec![],
                };

                let start = pos - partial.len();
                Ok((start, completions))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::shell::commands::register_all;
    use crate::store;
    use tempfile::TempDir;

    fn setup_completer() -> (ForgeCompleter, TempDir) {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path(), store::DEFAULT_FILENAME).unwrap();
        for name in ["github", "gitlab", "email"] {
            store
                .save(Entry::new(name, "secretA1", false).unwrap())
                .unwrap();
        }

        (
            ForgeCompleter::new(Arc::new(registry), Arc::new(store)),
            temp_dir,
        )
    }

    #[test]
    fn test_complete_command_partial() {
        let (completer, _temp_dir) = setup_completer();
        let completions = completer.complete_command("gen");

        let displays: Vec<&str> = completions.iter().map(|p| p.display.as_str()).collect();
        assert!(displays.contains(&"generate"));
    }

    #[test]
    fn test_complete_entry_name_partial() {
        let (completer, _temp_dir) = setup_completer();
        let completions = completer.complete_entry_name("git");

        assert_eq!(completions.len(), 2);
        let displays: Vec<&str> = completions.iter().map(|p| p.display.as_str()).collect();
        assert!(displays.contains(&"github"));
        assert!(displays.contains(&"gitlab"));
    }

    #[test]
    fn test_parse_context_command() {
        let (completer, _temp_dir) = setup_completer();

        let ctx = completer.parse_context("fi", 2);
        assert!(matches!(ctx, CompletionContext::Command { partial: "fi" }));

        let ctx = completer.parse_context("", 0);
        assert!(matches!(ctx, CompletionContext::Command { partial: "" }));
    }

    #[test]
    fn test_parse_context_argument() {
        let (completer, _temp_dir) = setup_completer();

        let ctx = completer.parse_context("find gi", 7);
        assert!(matches!(
            ctx,
            CompletionContext::Argument {
                command: "find",
                arg_index: 0,
                partial: "gi"
            }
        ));

        let ctx = completer.parse_context("find ", 5);
        assert!(matches!(
            ctx,
            CompletionContext::Argument {
                command: "find",
                arg_index: 0,
                partial: ""
            }
        ));
    }
}
