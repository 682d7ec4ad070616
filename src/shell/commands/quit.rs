//! Quit command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to exit the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }

    fn description(&self) -> &str {
        "Exit passforge"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn help(&self) -> &str {
        "Exit the shell. Saved entries are already on disk.\n\n\
         Examples:\n  \
           quit\n  \
           exit\n  \
           q"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> CommandResult {
        CommandResult::Exit
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::shell::commands::test_support::temp_store;

    #[test]
    fn test_quit_command() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = QuitCommand;
        let result = cmd.execute(&[], &mut ctx);
        assert!(matches!(result, CommandResult::Exit));
    }
}
