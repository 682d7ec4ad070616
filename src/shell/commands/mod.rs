//! Individual command implementations.

mod analyze;
mod clear;
mod export;
mod find;
mod generate;
mod help;
mod list;
mod quit;
mod reload;
mod set;
mod stats;

pub use analyze::AnalyzeCommand;
pub use clear::ClearCommand;
pub use export::ExportCommand;
pub use find::FindCommand;
pub use generate::GenerateCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use quit::QuitCommand;
pub use reload::ReloadCommand;
pub use set::SetCommand;
pub use stats::StatsCommand;

use std::sync::Arc;

use crate::entry::Entry;
use crate::generator;
use crate::shell::command::CommandRegistry;

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(GenerateCommand));
    registry.register(Arc::new(ListCommand));
    registry.register(Arc::new(FindCommand));
    registry.register(Arc::new(AnalyzeCommand));
    registry.register(Arc::new(StatsCommand));
    registry.register(Arc::new(ExportCommand));
    registry.register(Arc::new(SetCommand));
    registry.register(Arc::new(ClearCommand));
    registry.register(Arc::new(ReloadCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(QuitCommand));
}

/// Full detail block shown by `generate` and `find`.
pub(crate) fn entry_details(entry: &Entry) -> String {
    format!(
        "Name: {}\n\
         Password: {}\n\
         Length: {} characters\n\
         Special Characters: {}\n\
         Strength: {}\n\
         Created: {}",
        entry.name(),
        entry.secret(),
        entry.secret_len(),
        if entry.has_special_chars() { "Yes" } else { "No" },
        generator::strength_description(entry.secret()),
        entry.formatted_timestamp()
    )
}
