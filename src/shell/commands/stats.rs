//! Stats command implementation.

use crate::generator;
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to display store and generator statistics.
pub struct StatsCommand;

impl Command for StatsCommand {
    fn name(&self) -> &str {
        "stats"
    }

    fn description(&self) -> &str {
        "Show statistics about stored entries"
    }

    fn usage(&self) -> &str {
        "stats"
    }

    fn help(&self) -> &str {
        "Show the entry count, storage location, special-character usage,\n\
         average password length, a strength distribution, and the current\n\
         generator length bounds."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let entries = ctx.store.all();

        let mut output = format!(
            "Total entries stored: {}\nStorage file: {}\n",
            entries.len(),
            ctx.store.file_path().display()
        );

        if !entries.is_empty() {
            let with_special = entries.iter().filter(|e| e.has_special_chars()).count();
            let avg_length = entries.iter().map(|e| e.secret_len()).sum::<usize>() as f64
                / entries.len() as f64;

            output.push_str(&format!(
                "Entries with special characters: {}\n\
                 Entries without special characters: {}\n\
                 Average password length: {:.1} characters\n",
                with_special,
                entries.len() - with_special,
                avg_length
            ));

            let mut very_strong = 0;
            let mut strong = 0;
            let mut medium = 0;
            let mut weak = 0;
            for entry in &entries {
                match generator::strength(entry.secret()) {
                    80..=u8::MAX => very_strong += 1,
                    60..=79 => strong += 1,
                    40..=59 => medium += 1,
                    _ => weak += 1,
                }
            }

            output.push_str(&format!(
                "\nPassword Strength Distribution:\n\
                 Very Strong (80-100): {very_strong}\n\
                 Strong (60-79): {strong}\n\
                 Medium (40-59): {medium}\n\
                 Weak (0-39): {weak}\n"
            ));
        }

        output.push_str(&format!(
            "\nGenerator Settings:\nMin Length: {}\nMax Length: {}",
            ctx.generator.min_length(),
            ctx.generator.max_length()
        ));

        CommandResult::success(output)
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}
