//! Find command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::shell::commands::entry_details;

/// Command to look up an entry by name.
pub struct FindCommand;

impl Command for FindCommand {
    fn name(&self) -> &str {
        "find"
    }

    fn aliases(&self) -> &[&str] {
        &["search", "f"]
    }

    fn description(&self) -> &str {
        "Find an entry by name"
    }

    fn usage(&self) -> &str {
        "find <name>"
    }

    fn help(&self) -> &str {
        "Look up a stored entry by name (case-insensitive) and display\n\
         its details including the password and a strength rating.\n\n\
         Arguments:\n  \
           <name> - The entry name to search for\n\n\
         Examples:\n  \
           find github\n  \
           search GMAIL"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!("Usage: {}\nMissing entry name", self.usage()));
        }

        // Allow names with spaces.
        let name = args.join(" ");

        match ctx.store.find_by_name(&name) {
            Some(entry) => CommandResult::success(entry_details(&entry)),
            None => CommandResult::error(format!("No entry found with the name: {}", name)),
        }
    }

    fn min_args(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::generator::Generator;
    use crate::shell::commands::test_support::temp_store;

    #[test]
    fn test_find_case_insensitive() {
        let (store, _temp_dir) = temp_store();
        store
            .save(Entry::new("Gmail", "Ab3!xQ9z", true).unwrap())
            .unwrap();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = FindCommand;
        match cmd.execute(&["gmail"], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("Name: Gmail"));
                assert!(msg.contains("Password: Ab3!xQ9z"));
                assert!(msg.contains("Strength: "));
            }
            _ => panic!("Expected success with details"),
        }
    }

    #[test]
    fn test_find_not_found() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = FindCommand;
        let result = cmd.execute(&["missing"], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_find_multiword_name() {
        let (store, _temp_dir) = temp_store();
        store
            .save(Entry::new("my email", "s3cretA!", true).unwrap())
            .unwrap();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = FindCommand;
        let result = cmd.execute(&["my", "email"], &mut ctx);
        assert!(matches!(result, CommandResult::Success(Some(_))));
    }

    #[test]
    fn test_find_missing_args() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = FindCommand;
        let result = cmd.execute(&[], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }
}
