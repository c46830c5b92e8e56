//! History store
//!
//! Append-only CSV log of submitted passwords. The first row of the file is
//! the `Password` header, written once when the file is created.
//!
//! Passwords are stored in plaintext. The store does no locking: only one
//! writer may use a given file at a time.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Header row written at creation time.
pub const HISTORY_HEADER: &str = "Password";

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to access history file")]
    Io(#[from] io::Error),
    #[error("Malformed history file")]
    Csv(#[from] csv::Error),
}

/// Handle to a history file.
///
/// The file itself is created lazily by the first [`append`](Self::append).
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` once the backing file has been created.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Appends a password as the last record, creating the file (with its
    /// header) if needed.
    pub fn append(&self, password: &SecretString) -> Result<(), HistoryError> {
        let created = !self.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if created {
            writer.write_record([HISTORY_HEADER])?;
            #[cfg(feature = "tracing")]
            tracing::info!("History store created at {:?}", self.path);
        }
        writer.write_record([password.expose_secret()])?;
        writer.flush()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Password appended to {:?}", self.path);

        Ok(())
    }

    /// Returns every record in insertion order.
    ///
    /// A missing file yields an empty list. The first row is always treated
    /// as the header and skipped, whatever its content.
    pub fn read_all(&self) -> Result<Vec<String>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut passwords = Vec::new();
        for record in reader.records().skip(1) {
            let record = record?;
            passwords.push(record.get(0).unwrap_or_default().to_string());
        }
        Ok(passwords)
    }

    /// Deletes the backing file. Clearing a store that does not exist is a
    /// no-op.
    pub fn clear(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::info!("History cleared: {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    pub(crate) fn temp_store() -> (TempDir, HistoryStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = HistoryStore::new(dir.path().join("password_history.csv"));
        (dir, store)
    }

    #[test]
    fn test_read_all_missing_file() {
        let (_dir, store) = temp_store();
        assert!(!store.exists());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let (_dir, store) = temp_store();
        let passwords = ["first", "Second2!", "first", "third"];
        for pwd in passwords {
            store.append(&secret(pwd)).unwrap();
        }
        assert_eq!(store.read_all().unwrap(), passwords);
    }

    #[test]
    fn test_header_written_once() {
        let (_dir, store) = temp_store();
        store.append(&secret("one")).unwrap();
        store.append(&secret("two")).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines, vec!["Password", "one", "two"]);
    }

    #[test]
    fn test_special_csv_characters_round_trip() {
        let (_dir, store) = temp_store();
        let passwords = ["a,b", "say \"hi\"", "multi\nline", "  padded  "];
        for pwd in passwords {
            store.append(&secret(pwd)).unwrap();
        }
        assert_eq!(store.read_all().unwrap(), passwords);
    }

    #[test]
    fn test_password_equal_to_header_is_kept() {
        let (_dir, store) = temp_store();
        store.append(&secret("Password")).unwrap();
        store.append(&secret("Password")).unwrap();
        assert_eq!(store.read_all().unwrap(), vec!["Password", "Password"]);
    }

    #[test]
    fn test_first_row_skipped_by_position() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "not-a-header\nreal\n").unwrap();
        assert_eq!(store.read_all().unwrap(), vec!["real"]);
    }

    #[test]
    fn test_clear_removes_history() {
        let (_dir, store) = temp_store();
        store.append(&secret("one")).unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, store) = temp_store();
        store.append(&secret("one")).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
    }

    #[test]
    fn test_append_after_clear_recreates_header() {
        let (_dir, store) = temp_store();
        store.append(&secret("old")).unwrap();
        store.clear().unwrap();
        store.append(&secret("new")).unwrap();
        assert_eq!(store.read_all().unwrap(), vec!["new"]);
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("missing").join("history.csv"));
        let err = store.append(&secret("x")).unwrap_err();
        assert!(matches!(err, HistoryError::Io(_)));
        // The io cause is reported as the source, not repeated in the message.
        assert_eq!(err.to_string(), "Failed to access history file");
        assert!(std::error::Error::source(&err).is_some());
    }
}
