//! Passforge - a password generation and storage library.
//!
//! This library provides the core functionality for the passforge password
//! manager: entropy-guaranteed password generation, strength scoring, and a
//! flat-file entry store with a shell-like interactive interface.

pub mod entry;
pub mod error;
pub mod generator;
pub mod logging;
pub mod paths;
pub mod shell;
pub mod store;

// Re-export commonly used types
pub use entry::Entry;
pub use error::{Error, Result};
pub use generator::Generator;
pub use logging::{LogConfig, init_logging};
pub use shell::Shell;
pub use store::Store;
