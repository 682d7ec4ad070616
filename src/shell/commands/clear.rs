//! Clear command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to empty the store.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> &str {
        "Remove all entries from memory"
    }

    fn usage(&self) -> &str {
        "clear [file]"
    }

    fn help(&self) -> &str {
        "Empty the in-memory entry collection. With the literal argument\n\
         'file', the backing file is deleted as well; otherwise entries\n\
         reappear on the next start or 'reload'.\n\n\
         Examples:\n  \
           clear\n  \
           clear file"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let delete_file = match args {
            [] => false,
            [arg] if arg.eq_ignore_ascii_case("file") => true,
            _ => return CommandResult::error(format!("Usage: {}", self.usage())),
        };

        match ctx.store.clear(delete_file) {
            Ok(()) => {
                let msg = if delete_file {
                    "Cleared all entries and deleted the backing file."
                } else {
                    "Cleared all entries from memory."
                };
                CommandResult::success(msg)
            }
            Err(e) => {
                log::warn!("Clear failed: {}", e);
                CommandResult::error(e.to_string())
            }
        }
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::generator::Generator;
    use crate::shell::commands::test_support::temp_store;

    #[test]
    fn test_clear_memory_only() {
        let (store, _temp_dir) = temp_store();
        store
            .save(Entry::new("github", "s3cretA!", true).unwrap())
            .unwrap();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = ClearCommand;
        let result = cmd.execute(&[], &mut ctx);

        assert!(matches!(result, CommandResult::Success(Some(_))));
        assert!(store.is_empty());
        assert!(store.file_path().exists());
    }

    #[test]
    fn test_clear_with_file() {
        let (store, _temp_dir) = temp_store();
        store
            .save(Entry::new("github", "s3cretA!", true).unwrap())
            .unwrap();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = ClearCommand;
        let result = cmd.execute(&["file"], &mut ctx);

        assert!(matches!(result, CommandResult::Success(Some(_))));
        assert!(store.is_empty());
        assert!(!store.file_path().exists());
    }

    #[test]
    fn test_clear_rejects_unknown_argument() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = ClearCommand;
        let result = cmd.execute(&["everything"], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }
}
