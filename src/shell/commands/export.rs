//! Export command implementation.

use std::path::PathBuf;

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to export all entries to a snapshot file.
pub struct ExportCommand;

impl Command for ExportCommand {
    fn name(&self) -> &str {
        "export"
    }

    fn description(&self) -> &str {
        "Export all entries to a file"
    }

    fn usage(&self) -> &str {
        "export [path]"
    }

    fn help(&self) -> &str {
        "Write a snapshot of every entry, with strength ratings, to the\n\
         given file, overwriting it. Without a path a timestamped\n\
         'password_export_<time>.txt' is used.\n\n\
         Examples:\n  \
           export my_passwords.txt\n  \
           export /tmp/backup.txt"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if ctx.store.is_empty() {
            return CommandResult::error("No entries to export");
        }

        let path = if args.is_empty() {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            PathBuf::from(format!("password_export_{stamp}.txt"))
        } else {
            PathBuf::from(args.join(" "))
        };

        match ctx.store.export_to(&path) {
            Ok(()) => CommandResult::success(format!(
                "Exported {} entries to: {}",
                ctx.store.len(),
                path.display()
            )),
            Err(e) => {
                log::warn!("Export failed: {}", e);
                CommandResult::error(e.to_string())
            }
        }
    }

    fn min_args(&self) -> usize {
        0
    }
}
