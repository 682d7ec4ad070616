//! List command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to display all stored entries in a table.
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn aliases(&self) -> &[&str] {
        &["ls", "l"]
    }

    fn description(&self) -> &str {
        "List all stored entries"
    }

    fn usage(&self) -> &str {
        "list"
    }

    fn help(&self) -> &str {
        "Display a table of all stored entries in insertion order,\n\
         including the stored password, its length, whether special\n\
         characters were requested, and the creation time.\n\n\
         Examples:\n  \
           list\n  \
           ls"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let entries = ctx.store.all();

        if entries.is_empty() {
            return CommandResult::success("No entries stored.");
        }

        let mut output = format!("Total entries: {}\n\n", entries.len());
        output.push_str(&format!(
            "{:<4} {:<20} {:<25} {:<8} {:<15} {:<20}\n",
            "#", "Name", "Password", "Length", "Special Chars", "Created"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for (i, entry) in entries.iter().enumerate() {
            output.push_str(&format!(
                "{:<4} {:<20} {:<25} {:<8} {:<15} {:<20}\n",
                i + 1,
                truncate(entry.name(), 20),
                entry.secret(),
                entry.secret_len(),
                if entry.has_special_chars() { "Yes" } else { "No" },
                entry.formatted_timestamp()
            ));
        }

        CommandResult::success(output.trim_end().to_string())
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::generator::Generator;
    use crate::shell::commands::test_support::temp_store;

    #[test]
    fn test_list_empty() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = ListCommand;
        match cmd.execute(&[], &mut ctx) {
            CommandResult::Success(Some(msg)) => assert!(msg.contains("No entries")),
            _ => panic!("Expected success message"),
        }
    }

    #[test]
    fn test_list_shows_entries_in_order() {
        let (store, _temp_dir) = temp_store();
        store
            .save(Entry::new("zeta", "secretA1", false).unwrap())
            .unwrap();
        store
            .save(Entry::new("alpha", "s3cretB!", true).unwrap())
            .unwrap();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = ListCommand;
        match cmd.execute(&[], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("Total entries: 2"));
                // Insertion order, not alphabetical.
                let zeta_pos = msg.find("zeta").unwrap();
                let alpha_pos = msg.find("alpha").unwrap();
                assert!(zeta_pos < alpha_pos);
                assert!(msg.contains("secretA1"));
            }
            _ => panic!("Expected success with table"),
        }
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 20), "short");
        let long = "a".repeat(30);
        let truncated = truncate(&long, 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with("..."));
    }
}
