//! Reload command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to re-read the backing file.
pub struct ReloadCommand;

impl Command for ReloadCommand {
    fn name(&self) -> &str {
        "reload"
    }

    fn description(&self) -> &str {
        "Re-read entries from the backing file"
    }

    fn usage(&self) -> &str {
        "reload"
    }

    fn help(&self) -> &str {
        "Discard the in-memory collection and re-parse the backing file.\n\
         Useful after editing the file externally."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        match ctx.store.reload() {
            Ok(()) => CommandResult::success(format!("Reloaded {} entries.", ctx.store.len())),
            Err(e) => {
                log::warn!("Reload failed: {}", e);
                CommandResult::error(e.to_string())
            }
        }
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}
