// store.rs — LedgerStore: a GoalLedger persisted to one text file.
//
// The file holds exactly what GoalLedger::save writes. Saves go through a
// sibling temp file that is renamed over the target, so an interrupted
// save never leaves a half-written ledger behind.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::ledger::{GoalLedger, LoadReport};

/// A ledger file on disk.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the ledger from disk, or start an empty one if the file does
    /// not exist yet.
    pub fn open(&self) -> Result<(GoalLedger, LoadReport), LedgerError> {
        let mut ledger = GoalLedger::new();
        if !self.exists() {
            return Ok((ledger, LoadReport::default()));
        }
        let report = self.load_into(&mut ledger)?;
        Ok((ledger, report))
    }

    /// Replace `ledger` with the contents of this file.
    pub fn load_into(&self, ledger: &mut GoalLedger) -> Result<LoadReport, LedgerError> {
        let file = File::open(&self.path).map_err(|source| self.io_error(&self.path, source))?;
        ledger.load(BufReader::new(file)).map_err(|e| match e {
            LedgerError::Io(source) => self.io_error(&self.path, source),
            other => other,
        })
    }

    /// Write `ledger` to this file, creating parent directories as needed.
    pub fn save(&self, ledger: &GoalLedger) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(parent, source))?;
        }

        let mut contents = Vec::new();
        ledger.save(&mut contents)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, contents).map_err(|source| self.io_error(&tmp, source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(&self.path, source))?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> LedgerError {
        LedgerError::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::NewGoal;
    use tempfile::tempdir;

    fn ledger_with_progress() -> GoalLedger {
        let mut ledger = GoalLedger::new();
        ledger
            .create_goal(NewGoal::new("simple", "Read", "Read scripture", 100))
            .unwrap();
        ledger
            .create_goal(NewGoal::new("checklist", "Run", "Run a 5k", 10).with_checklist(3, 50))
            .unwrap();
        ledger.record_event(2).unwrap();
        ledger.record_event(2).unwrap();
        ledger
    }

    #[test]
    fn open_missing_file_gives_empty_ledger() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.txt"));

        let (ledger, report) = store.open().unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.current_score(), 0);
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn save_and_open_round_trip() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.txt"));
        let ledger = ledger_with_progress();

        store.save(&ledger).unwrap();
        let (restored, report) = store.open().unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(restored, ledger);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join(".quest").join("nested").join("ledger.txt"));

        store.save(&GoalLedger::new()).unwrap();
        assert!(store.exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "0\n");
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.txt"));
        store.save(&ledger_with_progress()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["ledger.txt".to_string()]);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.txt"));
        store.save(&ledger_with_progress()).unwrap();
        store.save(&GoalLedger::new()).unwrap();

        let (restored, _) = store.open().unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn load_into_missing_file_is_io_error_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nowhere.txt");
        let store = LedgerStore::new(&path);
        let mut ledger = ledger_with_progress();
        let before = ledger.clone();

        let result = store.load_into(&mut ledger);
        match result {
            Err(LedgerError::IoError { path: p, .. }) => assert!(p.ends_with("nowhere.txt")),
            other => panic!("expected IoError, got {other:?}"),
        }
        assert_eq!(ledger, before);
    }

    #[test]
    fn store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.txt");

        {
            let store = LedgerStore::new(&path);
            store.save(&ledger_with_progress()).unwrap();
        }

        {
            let store = LedgerStore::new(&path);
            let (ledger, _) = store.open().unwrap();
            assert_eq!(ledger.current_score(), 20);
            assert!(ledger.goal(2).unwrap().details().ends_with("Completed 2/3"));
        }
    }
}
