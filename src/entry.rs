//! The immutable password entry value type.

use chrono::{DateTime, Local};
use std::fmt;

use crate::error::{Error, Result};

/// Timestamp format used in serialized lines and file headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One named password record with creation metadata.
///
/// Entries are immutable once constructed. The name is trimmed at
/// construction; uniqueness across a store is enforced by [`crate::Store`],
/// not here.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    secret: String,
    created_at: DateTime<Local>,
    special_chars: bool,
}

impl Entry {
    /// Creates a new entry stamped with the current local time.
    ///
    /// Fails with [`Error::InvalidEntry`] if the trimmed name is empty or
    /// the secret is empty.
    pub fn new(name: &str, secret: &str, special_chars: bool) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidEntry("name cannot be empty"));
        }
        if secret.is_empty() {
            return Err(Error::InvalidEntry("secret cannot be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            secret: secret.to_string(),
            created_at: Local::now(),
            special_chars,
        })
    }

    /// The entry's name (trimmed, the store's case-insensitive key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored password.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// When this entry was constructed.
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Whether the generation that produced the secret included the special
    /// character class. Informational only; never re-validated against the
    /// secret's actual content.
    pub fn has_special_chars(&self) -> bool {
        self.special_chars
    }

    /// Length of the secret in characters.
    pub fn secret_len(&self) -> usize {
        self.secret.chars().count()
    }

    /// The creation timestamp rendered as `yyyy-MM-dd HH:mm:ss`.
    pub fn formatted_timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Renders the exact stored line format.
    ///
    /// ```text
    /// Name: <name> | Password: <secret> | Created: <timestamp> | Special Chars: <Yes|No>
    /// ```
    ///
    /// Names or secrets containing the literal ` | ` separator corrupt
    /// parsing; this is a documented format limitation kept for
    /// compatibility with existing files.
    pub fn to_line(&self) -> String {
        format!(
            "Name: {} | Password: {} | Created: {} | Special Chars: {}",
            self.name,
            self.secret,
            self.formatted_timestamp(),
            if self.special_chars { "Yes" } else { "No" }
        )
    }
}

/// Equality is defined by the `(name, secret)` pair; timestamps are ignored.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.secret == other.secret
    }
}

impl Eq for Entry {}

/// Masked representation: the secret never appears in `Display` output.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry {{ name: '{}', secret_len: {}, special_chars: {}, created: {} }}",
            self.name,
            self.secret_len(),
            self.special_chars,
            self.formatted_timestamp()
        )
    }
}
