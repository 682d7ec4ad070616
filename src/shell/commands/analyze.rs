//! Analyze command implementation.

use crate::generator;
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to score an arbitrary password.
pub struct AnalyzeCommand;

impl Command for AnalyzeCommand {
    fn name(&self) -> &str {
        "analyze"
    }

    fn aliases(&self) -> &[&str] {
        &["strength"]
    }

    fn description(&self) -> &str {
        "Analyze the strength of a password"
    }

    fn usage(&self) -> &str {
        "analyze <password>"
    }

    fn help(&self) -> &str {
        "Score any password from 0 to 100 and print recommendations.\n\
         The password does not have to come from the generator.\n\n\
         Arguments:\n  \
           <password> - The password to analyze\n\n\
         Examples:\n  \
           analyze hunter2\n  \
           strength Tr0ub4dor&3"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!("Usage: {}\nMissing password", self.usage()));
        }
        let _ = ctx;

        let password = args.join(" ");
        let score = generator::strength(&password);

        let mut output = format!(
            "Length: {} characters\n\
             Strength Score: {}/100\n\
             Strength Level: {}\n\n\
             Recommendations:",
            password.chars().count(),
            score,
            generator::strength_label(score)
        );

        if score < 60 {
            output.push_str(
                "\n- Consider using a longer password (12+ characters)\
                 \n- Include uppercase and lowercase letters\
                 \n- Add numbers and special characters\
                 \n- Avoid common words or patterns",
            );
        } else if score < 80 {
            output.push_str(
                "\n- Your password is good, but could be stronger\
                 \n- Consider adding more special characters\
                 \n- Ensure it's not based on personal information",
            );
        } else {
            output.push_str(
                "\n- Excellent password strength!\
                 \n- Your password meets security best practices",
            );
        }

        CommandResult::success(output)
    }

    fn min_args(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::shell::commands::test_support::temp_store;

    #[test]
    fn test_analyze_weak_password() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = AnalyzeCommand;
        match cmd.execute(&["abc"], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("Strength Score: 15/100"));
                assert!(msg.contains("Very Weak"));
                assert!(msg.contains("longer password"));
            }
            _ => panic!("Expected success with analysis"),
        }
    }

    #[test]
    fn test_analyze_strong_password() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = AnalyzeCommand;
        match cmd.execute(&["aB1!aB1!aB1!aB1!"], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("Strength Score: 100/100"));
                assert!(msg.contains("Excellent password strength"));
            }
            _ => panic!("Expected success with analysis"),
        }
    }

    #[test]
    fn test_analyze_missing_args() {
        let (store, _temp_dir) = temp_store();
        let mut r#gen = Generator::default();
        let mut ctx = ShellContext::new(&store, &mut r#gen);

        let cmd = AnalyzeCommand;
        let result = cmd.execute(&[], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }
}
