//! Generate command implementation.

use crate::entry::Entry;
use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::shell::commands::entry_details;

/// Command to generate a password and save it under a name.
pub struct GenerateCommand;

impl Command for GenerateCommand {
    fn name(&self) -> &str {
        "generate"
    }

    fn aliases(&self) -> &[&str] {
        &["gen", "g"]
    }

    fn description(&self) -> &str {
        "Generate and save a new password"
    }

    fn usage(&self) -> &str {
        "generate <name> [length] [special]"
    }

    fn help(&self) -> &str {
        "Generate a password and save it under the given name.\n\n\
         Arguments:\n  \
           <name>    - Unique identifier for the entry\n  \
           [length]  - Exact length (4-128); omitted = random within bounds\n  \
           [special] - Literal word 'special' to include symbol characters\n\n\
         Examples:\n  \
           generate github\n  \
           generate email 16\n  \
           generate bank 20 special"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!(
                "Usage: {}\nMissing entry name",
                self.usage()
            ));
        }

        let name = args[0];
        let mut length: Option<usize> = None;
        let mut include_special = false;

        for arg in &args[1..] {
            if arg.eq_ignore_ascii_case("special") {
                include_special = true;
            } else if let Ok(n) = arg.parse::<usize>() {
                length = Some(n);
            } else {
                return CommandResult::error(format!("Unrecognized argument: '{}'", arg));
            }
        }

        if ctx.store.contains_name(name) {
            return CommandResult::error(format!("An entry named '{}' already exists", name));
        }

        let password = match length {
            Some(len) => match ctx.generator.generate_with_length(len, include_special) {
                Ok(password) => password,
                Err(e) => return CommandResult::error(e.to_string()),
            },
            None => ctx.generator.generate(include_special),
        };

        let entry = match Entry::new(name, &password, include_special) {
            Ok(entry) => entry,
            Err(e) => return CommandResult::error(e.to_string()),
        };

        let details = entry_details(&entry);
        match ctx.store.save(entry) {
            Ok(()) => CommandResult::success(format!("{details}\n\nSaved '{name}'")),
            Err(e) => {
                log::warn!("Failed to save entry '{}': {}", name, e);
                CommandResult::error(e.to_string())
            }
        }
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(3)
    }
}
