//! JSON file persistence.
//!
//! The data file is the source of truth for all application data. The whole document is
//! rewritten on every change; writes go to a sibling temp file that is renamed over the
//! target, so readers never observe a half-written file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::errors::AppError;
use crate::models::Document;

/// Indentation used for the data file.
const INDENT: &[u8] = b"    ";

/// Owner of the data file and its in-memory document.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    document: Document,
}

impl Store {
    /// Open the data file at `path`, loading whatever it currently holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            document: Document::default(),
        };
        store.document = store.load();
        tracing::debug!(
            path = %store.path.display(),
            students = store.document.students.len(),
            representatives = store.document.representatives.len(),
            announcements = store.document.announcements.len(),
            "Opened data file"
        );
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Read the data file from disk. A missing or malformed file yields an empty document.
    pub fn load(&self) -> Document {
        read_document(&self.path)
    }

    /// Serialize `document` and replace the data file with it.
    pub fn save(&self, document: &Document) -> Result<(), AppError> {
        let bytes = to_pretty_json(document)?;
        write_replace(&self.path, &bytes)?;
        Ok(())
    }

    /// Overwrite the data file with an empty document and clear memory.
    pub fn reset(&mut self) -> Result<(), AppError> {
        let empty = Document::default();
        self.save(&empty)?;
        self.document = empty;
        tracing::warn!(path = %self.path.display(), "Data file reset to an empty document");
        Ok(())
    }

    /// Apply `mutate` to a copy of the document, persist it, then make it current.
    ///
    /// If the save fails, neither memory nor the file changes.
    pub fn update<T>(&mut self, mutate: impl FnOnce(&mut Document) -> T) -> Result<T, AppError> {
        let mut next = self.document.clone();
        let out = mutate(&mut next);
        self.save(&next)?;
        self.document = next;
        Ok(out)
    }
}

fn read_document(path: &Path) -> Document {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Document::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Could not read data file, using empty document");
            return Document::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Malformed data file, using empty document");
            Document::default()
        }
    }
}

/// Serialize with four-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

fn write_replace(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(bytes)?;
    file.flush()?;
    drop(file);

    fs::rename(&tmp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Announcement, Student};
    use tempfile::TempDir;

    fn sample_student() -> Student {
        Student {
            name: "Ana Cruz".into(),
            student_number: "2021-0001".into(),
            section: "BSCS-3A".into(),
            password: crate::auth::hash_password("secret"),
            email: "ana@example.com".into(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("absent.json"));
        assert!(store.document().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let store = Store::open(&path);
        assert_eq!(store.load(), Document::default());
    }

    #[test]
    fn test_partial_document_fills_missing_collections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"announcements": [{"department": "CS", "announcement": "hi"}]}"#)
            .unwrap();

        let doc = Store::open(&path).load();
        assert!(doc.students.is_empty());
        assert_eq!(doc.announcements.len(), 1);
    }

    #[test]
    fn test_save_uses_four_space_indent_and_field_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let store = Store::open(&path);

        store.save(&Document::default()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "{\n    \"students\": [],\n    \"representatives\": [],\n    \"announcements\": []\n}"
        );

        let doc = Document {
            students: vec![sample_student()],
            ..Document::default()
        };
        store.save(&doc).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let name = text.find("\"name\"").unwrap();
        let number = text.find("\"student_number\"").unwrap();
        let section = text.find("\"section\"").unwrap();
        let password = text.find("\"password\"").unwrap();
        let email = text.find("\"email\"").unwrap();
        assert!(name < number && number < section && section < password && password < email);
        assert!(text.contains("\n        {\n            \"name\": \"Ana Cruz\""));
    }

    #[test]
    fn test_save_load_round_trip_is_byte_stable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut store = Store::open(&path);
        store
            .update(|doc| {
                doc.students.push(sample_student());
                doc.announcements.push(Announcement {
                    department: "CS Dept".into(),
                    announcement: "Exam moved".into(),
                });
            })
            .unwrap();

        store.save(&store.load()).unwrap();
        let first = fs::read(&path).unwrap();
        store.save(&store.load()).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_discards_existing_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut store = Store::open(&path);
        store.update(|doc| doc.students.push(sample_student())).unwrap();
        assert_eq!(Store::open(&path).load().students.len(), 1);

        let mut reopened = Store::open(&path);
        reopened.reset().unwrap();
        assert!(reopened.document().is_empty());
        assert_eq!(reopened.load(), Document::default());
    }

    #[test]
    fn test_failed_update_leaves_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path makes the final rename fail.
        let path = dir.path().join("data.json");
        fs::create_dir(&path).unwrap();

        let mut store = Store::open(&path);
        let result = store.update(|doc| doc.students.push(sample_student()));
        assert!(matches!(result, Err(AppError::Storage(_))));
        assert!(store.document().students.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data.json");
        let store = Store::open(&path);
        store.save(&Document::default()).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("nested").join("data.json.tmp").exists());
    }
}
