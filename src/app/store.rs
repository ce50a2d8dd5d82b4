use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::error::{AppError, Result};

/// File extension recognized by the store. Anything else in the base
/// directory is ignored by `list()`.
const STORE_EXTENSION: &str = "txt";

/// Flat-file persistence for journal documents: one plain-text file per
/// document under a single base directory. No transactional guarantees —
/// this is a single-user local tool.
pub struct DocumentStore {
    base_dir: PathBuf,
}

impl DocumentStore {
    /// Open (and create if needed) the default store under the user data dir.
    pub fn open_default() -> Result<Self> {
        let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("cyberwriter");
        dir.push("writing_files");
        Self::open(dir)
    }

    /// Open a store rooted at an explicit directory.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Generate the default filename for a given local timestamp.
    pub fn default_filename_at(t: NaiveDateTime) -> String {
        format!("journal_{}.txt", t.format("%Y%m%d-%H%M%S"))
    }

    /// Generate a default filename from the current wall clock.
    pub fn default_filename() -> String {
        Self::default_filename_at(Local::now().naive_local())
    }

    /// Write `content` to `<base_dir>/<filename>`, overwriting if present.
    /// An empty filename gets a timestamp-generated one. Returns the
    /// filename actually written so the caller can adopt it.
    pub fn save(&self, filename: &str, content: &str) -> Result<String> {
        let filename = if filename.trim().is_empty() {
            Self::default_filename()
        } else {
            filename.to_string()
        };
        fs::write(self.base_dir.join(&filename), content)?;
        Ok(filename)
    }

    /// Read the full text of a stored document.
    pub fn load(&self, filename: &str) -> Result<String> {
        let path = self.base_dir.join(filename);
        if !path.exists() {
            return Err(AppError::NotFound(filename.to_string()));
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// Filenames with the store extension, most recently modified first.
    /// Recomputed from the directory on every call.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut entries: Vec<(String, SystemTime)> = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(STORE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let mtime = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            entries.push((name.to_string(), mtime));
        }
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(entries.into_iter().map(|(name, _)| name).collect())
    }

    /// Remove a stored document. Refused unless the target is the currently
    /// active document — a guard against deleting an unrelated file picked
    /// from a stale browser list.
    pub fn delete(&self, filename: &str, active_filename: &str) -> Result<()> {
        if filename != active_filename {
            return Err(AppError::Permission(
                "Selected file does not match the current file.".to_string(),
            ));
        }
        let path = self.base_dir.join(filename);
        if !path.exists() {
            return Err(AppError::NotFound(filename.to_string()));
        }
        fs::remove_file(&path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 41, 7)
            .unwrap()
    }

    fn set_mtime(path: &Path, t: SystemTime) {
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(t).unwrap();
    }

    #[test]
    fn test_default_filename_deterministic() {
        let name = DocumentStore::default_filename_at(fixed_time());
        assert_eq!(name, "journal_20240315-094107.txt");
        // Same clock value, same name
        assert_eq!(name, DocumentStore::default_filename_at(fixed_time()));
    }

    #[test]
    fn test_default_filename_pattern() {
        let name = DocumentStore::default_filename();
        assert!(name.starts_with("journal_"));
        assert!(name.ends_with(".txt"));
        // journal_ + YYYYMMDD-HHMMSS + .txt
        assert_eq!(name.len(), "journal_".len() + 15 + ".txt".len());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        let written = store.save("entry.txt", "dear diary\nit rained").unwrap();
        assert_eq!(written, "entry.txt");
        assert_eq!(store.load("entry.txt").unwrap(), "dear diary\nit rained");
    }

    #[test]
    fn test_save_empty_filename_generates_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        let written = store.save("", "hello world").unwrap();
        assert!(written.starts_with("journal_"));
        assert!(written.ends_with(".txt"));
        assert!(dir.path().join(&written).exists());
        assert_eq!(store.load(&written).unwrap(), "hello world");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        store.save("a.txt", "first").unwrap();
        store.save("a.txt", "second").unwrap();
        assert_eq!(store.load("a.txt").unwrap(), "second");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        let err = store.load("nope.txt").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_list_orders_by_mtime_descending() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        store.save("oldest.txt", "1").unwrap();
        store.save("middle.txt", "2").unwrap();
        store.save("newest.txt", "3").unwrap();

        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        set_mtime(&dir.path().join("oldest.txt"), base);
        set_mtime(&dir.path().join("middle.txt"), base + Duration::from_secs(60));
        set_mtime(&dir.path().join("newest.txt"), base + Duration::from_secs(120));

        let names = store.list().unwrap();
        assert_eq!(names, vec!["newest.txt", "middle.txt", "oldest.txt"]);
    }

    #[test]
    fn test_list_excludes_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        store.save("kept.txt", "x").unwrap();
        fs::write(dir.path().join("notes.md"), "y").unwrap();
        fs::write(dir.path().join("backup.txt.bak"), "z").unwrap();

        assert_eq!(store.list().unwrap(), vec!["kept.txt"]);
    }

    #[test]
    fn test_delete_requires_active_match() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        store.save("a.txt", "x").unwrap();
        let err = store.delete("a.txt", "b.txt").unwrap_err();
        assert!(matches!(err, AppError::Permission(_)));
        // File untouched
        assert!(dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_delete_removes_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        store.save("a.txt", "x").unwrap();
        store.delete("a.txt", "a.txt").unwrap();
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_delete_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path()).unwrap();

        let err = store.delete("gone.txt", "gone.txt").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
