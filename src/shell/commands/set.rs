//! Set command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to view or change generator settings.
pub struct SetCommand;

impl Command for SetCommand {
    fn name(&self) -> &str {
        "set"
    }

    fn aliases(&self) -> &[&str] {
        &["config"]
    }

    fn description(&self) -> &str {
        "View or change generator settings"
    }

    fn usage(&self) -> &str {
        "set [min|max] [value]"
    }

    fn help(&self) -> &str {
        "Without arguments, show the current settings.\n\
         With 'min <n>' or 'max <n>', change the generator length bounds\n\
         (4-128, min <= max). Invalid values leave the settings unchanged.\n\n\
         Examples:\n  \
           set\n  \
           set min 12\n  \
           set max 32"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::success(format!(
                "Current Settings:\n\
                 Minimum password length: {}\n\
                 Maximum password length: {}\n\
                 Storage location: {}",
                ctx.generator.min_length(),
                ctx.generator.max_length(),
                ctx.store.file_path().display()
            ));
        }

        if args.len() != 2 {
            return CommandResult::error(format!("Usage: {}", self.usage()));
        }

        let value: usize = match args[1].parse() {
            Ok(v) => v,
            Err(_) => return CommandResult::error(format!("Invalid number: '{}'", args[1])),
        };

        let result = match args[0] {
            "min" => ctx.generator.set_min_length(value),
            "max" => ctx.generator.set_max_length(value),
            other => {
                return CommandResult::error(format!(
                    "Unknown setting: '{}' (expected 'min' or 'max')",
                    other
                ));
            }
        };

        match result {
            Ok(()) => {
                log::info!("Generator {} length set to {}", args[0], value);
                CommandResult::success(format!("{} length updated to: {}", args[0], value))
            }
            Err(e) => CommandResult::error(e.to_string()),
        }
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}
