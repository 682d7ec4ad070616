//! Entry persistence and lookup.
//!
//! The store keeps an insertion-ordered sequence of entries consistent with
//! an append-only text file. One mutex guards both the sequence and the file
//! append, so mutations are mutually exclusive with reads for the duration
//! of a single operation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;

use crate::entry::{Entry, TIMESTAMP_FORMAT};
use crate::error::{Error, Result};
use crate::generator;

/// Default backing file name inside the storage directory.
pub const DEFAULT_FILENAME: &str = "passwords.txt";

/// 80-character rule framing file headers.
const HEADER_RULE: &str =
    "================================================================================";
/// 40-dash separator used in export snapshots; lines containing it are
/// skipped by the parser.
const SEPARATOR: &str = "----------------------------------------";

const STORAGE_TITLE: &str = "Password Manager - Secure Password Storage";
const EXPORT_TITLE: &str = "Password Export";

/// The persistence and lookup layer managing the entry collection and its
/// backing file.
pub struct Store {
    file_path: PathBuf,
    entries: Mutex<Vec<Entry>>,
}

impl Store {
    /// Opens a store rooted at `storage_dir/filename`.
    ///
    /// Creates the directory if missing and eagerly loads the backing file
    /// if it exists. Malformed lines are skipped with a warning; directory
    /// or read failures are [`Error::StoreInit`].
    pub fn open(storage_dir: &Path, filename: &str) -> Result<Self> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(Error::StoreInit {
                path: storage_dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "filename cannot be empty"),
            });
        }

        fs::create_dir_all(storage_dir).map_err(|source| Error::StoreInit {
            path: storage_dir.to_path_buf(),
            source,
        })?;

        let file_path = storage_dir.join(filename);
        let entries = if file_path.exists() {
            let loaded = parse_file(&file_path).map_err(|source| Error::StoreInit {
                path: file_path.clone(),
                source,
            })?;
            log::info!(
                "Loaded {} entries from {}",
                loaded.len(),
                file_path.display()
            );
            loaded
        } else {
            Vec::new()
        };

        Ok(Self {
            file_path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    // A poisoned mutex only means another caller panicked mid-operation;
    // the sequence itself is still consistent, so recover the guard.
    fn entries(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an entry to the backing file and the in-memory sequence.
    ///
    /// Fails with [`Error::DuplicateName`] on a case-insensitive name
    /// collision, or [`Error::Persistence`] if the file append fails (in
    /// which case memory is left unchanged).
    pub fn save(&self, entry: Entry) -> Result<()> {
        let mut entries = self.entries();

        let needle = entry.name().to_lowercase();
        if entries.iter().any(|e| e.name().to_lowercase() == needle) {
            return Err(Error::DuplicateName(entry.name().to_string()));
        }

        self.append_line(&entry)
            .map_err(|source| Error::persistence(format!("append entry '{}'", entry.name()), source))?;

        log::info!("Saved entry '{}'", entry.name());
        entries.push(entry);
        Ok(())
    }

    /// First entry whose name matches case-insensitively (trimmed).
    pub fn find_by_name(&self, name: &str) -> Option<Entry> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries()
            .iter()
            .find(|e| e.name().to_lowercase() == needle)
            .cloned()
    }

    /// Whether an entry with this name exists (case-insensitive, trimmed).
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Defensive copy of the sequence in insertion order.
    pub fn all(&self) -> Vec<Entry> {
        self.entries().clone()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Entry names starting with `prefix`, for shell completion.
    pub fn names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries()
            .iter()
            .map(|e| e.name().to_string())
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    /// Writes a complete snapshot (header, count, every entry with its
    /// strength classification) to `path`, overwriting it.
    ///
    /// Read-only with respect to the in-memory collection.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        let entries = self.entries();
        write_export(path, &entries).map_err(|source| Error::Export {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Exported {} entries to {}", entries.len(), path.display());
        Ok(())
    }

    /// Empties the in-memory sequence; with `delete_file`, also removes the
    /// backing file. An already-absent file is tolerated.
    pub fn clear(&self, delete_file: bool) -> Result<()> {
        let mut entries = self.entries();
        entries.clear();

        if delete_file {
            match fs::remove_file(&self.file_path) {
                Ok(()) => log::info!("Deleted backing file {}", self.file_path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(Error::persistence("delete backing file", source));
                }
            }
        }
        Ok(())
    }

    /// Discards in-memory state and re-parses the backing file from scratch.
    /// Recovers from external edits to the file.
    pub fn reload(&self) -> Result<()> {
        let mut entries = self.entries();
        entries.clear();

        if self.file_path.exists() {
            *entries = parse_file(&self.file_path)
                .map_err(|source| Error::persistence("reload backing file", source))?;
        }
        log::info!("Reloaded {} entries", entries.len());
        Ok(())
    }

    fn append_line(&self, entry: &Entry) -> io::Result<()> {
        let is_new_file = !self.file_path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        let mut writer = BufWriter::new(file);

        if is_new_file {
            write_header(&mut writer, STORAGE_TITLE)?;
        }
        writeln!(writer, "{}", entry.to_line())?;
        writer.flush()
    }
}

/// Writes the header block that begins every backing and export file.
fn write_header(writer: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(writer, "{HEADER_RULE}")?;
    writeln!(writer, "{title}")?;
    writeln!(
        writer,
        "Generated on: {}",
        Local::now().format(TIMESTAMP_FORMAT)
    )?;
    writeln!(writer, "{HEADER_RULE}")?;
    writeln!(writer)
}

fn write_export(path: &Path, entries: &[Entry]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_header(&mut writer, EXPORT_TITLE)?;
    writeln!(writer, "Total Passwords: {}", entries.len())?;
    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer)?;

    for (i, entry) in entries.iter().enumerate() {
        writeln!(writer, "Entry #{}:", i + 1)?;
        writeln!(writer, "{}", entry.to_line())?;
        writeln!(
            writer,
            "Password Strength: {}",
            generator::strength_description(entry.secret())
        )?;
        writeln!(writer)?;
    }

    writer.flush()
}

/// Parses the backing file line by line. Header lines, separators, and blank
/// lines are ignored; entry lines that fail to parse are skipped with a
/// warning so one corrupt line never aborts the load.
fn parse_file(path: &Path) -> io::Result<Vec<Entry>> {
    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with('=')
            || line.starts_with("Password Manager")
            || line.starts_with("Generated on")
            || line.contains(SEPARATOR)
        {
            continue;
        }

        if !line.starts_with("Name: ") {
            continue;
        }

        match parse_line(line) {
            // The file's Created field is not reconstructed; parsed entries
            // are stamped with the parse-time clock.
            Some(entry) => entries.push(entry),
            None => log::warn!("Skipping malformed entry line in {}", path.display()),
        }
    }

    Ok(entries)
}

/// Parses one serialized entry line, or `None` if any step fails.
fn parse_line(line: &str) -> Option<Entry> {
    let parts: Vec<&str> = line.split(" | ").collect();
    if parts.len() < 4 {
        return None;
    }

    let name = parts[0].strip_prefix("Name: ")?;
    let secret = parts[1].strip_prefix("Password: ")?.trim();
    let special_chars = parts[3].contains("Yes");

    Entry::new(name, secret, special_chars).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(temp_dir: &TempDir) -> Store {
        Store::open(temp_dir.path(), DEFAULT_FILENAME).expect("open failed")
    }

    fn entry_line_count(store: &Store) -> usize {
        match fs::read_to_string(store.file_path()) {
            Ok(content) => content
                .lines()
                .filter(|l| l.trim_start().starts_with("Name: "))
                .count(),
            Err(_) => 0,
        }
    }

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("deep").join("storage");
        let store = Store::open(&nested, DEFAULT_FILENAME).unwrap();

        assert!(nested.is_dir());
        assert!(store.is_empty());
        // The backing file itself is only created on first save.
        assert!(!store.file_path().exists());
    }

    #[test]
    fn test_open_rejects_blank_filename() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            Store::open(temp_dir.path(), "   "),
            Err(Error::StoreInit { .. })
        ));
    }

    #[test]
    fn test_save_writes_header_and_line() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);

        let entry = Entry::new("Gmail", "Ab3!xQ9z", true).unwrap();
        store.save(entry).unwrap();

        let content = fs::read_to_string(store.file_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], HEADER_RULE);
        assert_eq!(lines[1], STORAGE_TITLE);
        assert!(lines[2].starts_with("Generated on: "));
        assert_eq!(lines[3], HEADER_RULE);
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("Name: Gmail | Password: Ab3!xQ9z | "));

        // The header is written once, not per entry.
        store
            .save(Entry::new("Work", "Cd4@yR0a", true).unwrap())
            .unwrap();
        let content = fs::read_to_string(store.file_path()).unwrap();
        assert_eq!(content.matches(STORAGE_TITLE).count(), 1);
        assert_eq!(entry_line_count(&store), 2);
    }

    #[test]
    fn test_save_duplicate_name_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);

        store
            .save(Entry::new("Gmail", "secret1A", true).unwrap())
            .unwrap();

        let result = store.save(Entry::new("  gMaIl ", "secret2B", false).unwrap());
        assert!(matches!(result, Err(Error::DuplicateName(_))));

        // Neither memory nor file changed.
        assert_eq!(store.len(), 1);
        assert_eq!(entry_line_count(&store), 1);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);

        store
            .save(Entry::new("GitHub", "tok3nAB!", true).unwrap())
            .unwrap();

        let found = store.find_by_name("github").unwrap();
        assert_eq!(found.name(), "GitHub");
        assert_eq!(found.secret(), "tok3nAB!");

        assert!(store.find_by_name("  GITHUB  ").is_some());
        assert!(store.find_by_name("gitlab").is_none());
        assert!(store.find_by_name("   ").is_none());
    }

    #[test]
    fn test_all_is_defensive_copy() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);

        store
            .save(Entry::new("one", "secretA1", false).unwrap())
            .unwrap();

        let mut copy = store.all();
        copy.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);

        for name in ["zeta", "alpha", "mid"] {
            store
                .save(Entry::new(name, "secretA1", false).unwrap())
                .unwrap();
        }

        let names: Vec<String> = store.all().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_round_trip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = open_store(&temp_dir);
            store
                .save(Entry::new("Gmail", "Ab3!xQ9z", true).unwrap())
                .unwrap();
            store
                .save(Entry::new("plain", "abcDEF123", false).unwrap())
                .unwrap();
        }

        let reopened = open_store(&temp_dir);
        assert_eq!(reopened.len(), 2);

        let first = reopened.find_by_name("Gmail").unwrap();
        assert_eq!(first.name(), "Gmail");
        assert_eq!(first.secret(), "Ab3!xQ9z");
        assert!(first.has_special_chars());

        let second = reopened.find_by_name("plain").unwrap();
        assert!(!second.has_special_chars());
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(DEFAULT_FILENAME);
        fs::write(
            &file_path,
            "Name: good | Password: s3cretA! | Created: 2025-06-03 10:00:00 | Special Chars: Yes\n\
             Name: broken | Password: missing-fields\n",
        )
        .unwrap();

        let store = open_store(&temp_dir);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name(), "good");
    }

    #[test]
    fn test_parse_line_exact_format() {
        let entry = parse_line(
            "Name: Gmail | Password: Ab3!xQ9z | Created: 2025-06-03 10:00:00 | Special Chars: Yes",
        )
        .unwrap();
        assert_eq!(entry.name(), "Gmail");
        assert_eq!(entry.secret(), "Ab3!xQ9z");
        assert!(entry.has_special_chars());

        let entry = parse_line(
            "Name: work | Password: abcDEF123 | Created: 2025-06-03 10:00:00 | Special Chars: No",
        )
        .unwrap();
        assert!(!entry.has_special_chars());
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(parse_line("Name: only | Password: two-parts").is_none());
        assert!(parse_line("garbage").is_none());
        assert!(
            parse_line("Name:  | Password: x | Created: t | Special Chars: No").is_none(),
            "blank name must not produce an entry"
        );
    }

    #[test]
    fn test_parse_skips_header_and_separator_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(DEFAULT_FILENAME);
        fs::write(
            &file_path,
            format!(
                "{HEADER_RULE}\n{STORAGE_TITLE}\nGenerated on: 2025-06-03 10:00:00\n{HEADER_RULE}\n\n\
                 {SEPARATOR}\n\
                 Name: keep | Password: s3cretA! | Created: 2025-06-03 10:00:00 | Special Chars: No\n"
            ),
        )
        .unwrap();

        let store = open_store(&temp_dir);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name(), "keep");
    }

    #[test]
    fn test_clear_with_and_without_file_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        store
            .save(Entry::new("Gmail", "Ab3!xQ9z", true).unwrap())
            .unwrap();

        store.clear(false).unwrap();
        assert!(store.is_empty());
        assert!(store.file_path().exists());

        store.clear(true).unwrap();
        assert!(!store.file_path().exists());

        // Deleting an already-absent file is tolerated.
        store.clear(true).unwrap();
    }

    #[test]
    fn test_reload_picks_up_external_edits() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        store
            .save(Entry::new("first", "secretA1", false).unwrap())
            .unwrap();

        let mut file = OpenOptions::new()
            .append(true)
            .open(store.file_path())
            .unwrap();
        writeln!(
            file,
            "Name: second | Password: s3cretB! | Created: 2025-06-03 10:00:00 | Special Chars: Yes"
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        store.reload().unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains_name("second"));
    }

    #[test]
    fn test_reload_with_missing_file_empties_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        store
            .save(Entry::new("gone", "secretA1", false).unwrap())
            .unwrap();

        fs::remove_file(store.file_path()).unwrap();
        store.reload().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_export_snapshot_format() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        store
            .save(Entry::new("Gmail", "Ab3!xQ9zLmNoPq", true).unwrap())
            .unwrap();
        store
            .save(Entry::new("plain", "abc", false).unwrap())
            .unwrap();

        let export_path = temp_dir.path().join("export.txt");
        store.export_to(&export_path).unwrap();

        let content = fs::read_to_string(&export_path).unwrap();
        assert!(content.contains(EXPORT_TITLE));
        assert!(content.contains("Total Passwords: 2"));
        assert!(content.contains(SEPARATOR));
        assert!(content.contains("Entry #1:"));
        assert!(content.contains("Name: Gmail | Password: Ab3!xQ9zLmNoPq | "));
        assert!(content.contains("Entry #2:"));
        assert!(content.contains("Password Strength: "));
        assert!(content.contains("(15/100)")); // "abc" scores lowercase only

        // Export leaves the collection untouched.
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_export_overwrites_target() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        store
            .save(Entry::new("one", "secretA1", false).unwrap())
            .unwrap();

        let export_path = temp_dir.path().join("export.txt");
        fs::write(&export_path, "stale contents that must disappear").unwrap();
        store.export_to(&export_path).unwrap();

        let content = fs::read_to_string(&export_path).unwrap();
        assert!(!content.contains("stale contents"));
        assert!(content.contains("Total Passwords: 1"));
    }

    #[test]
    fn test_names_with_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir);
        for name in ["github", "gitlab", "email"] {
            store
                .save(Entry::new(name, "secretA1", false).unwrap())
                .unwrap();
        }

        let mut names = store.names_with_prefix("git");
        names.sort();
        assert_eq!(names, ["github", "gitlab"]);
        assert!(store.names_with_prefix("x").is_empty());
    }
}
