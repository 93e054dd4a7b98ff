//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::NoteboxCommand;
use notebox::domain::Note;
use notebox::infra::{JsonFileStore, NotesStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes file.
///
/// The temp directory is cleaned up on drop. The notes file does not
/// exist until something writes to it.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the path of the notes file.
    pub fn store_path(&self) -> PathBuf {
        self.root.join("data").join("notes.json")
    }

    /// Returns the directory used as the config home.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `notes` as the whole stored collection.
    pub fn seed(&self, notes: &[Note]) {
        let path = self.store_path();
        std::fs::create_dir_all(path.parent().expect("store has a parent"))
            .expect("Failed to create data directory");
        JsonFileStore::new(path)
            .write_all(notes)
            .expect("Failed to seed notes");
    }

    /// Reads the stored collection back.
    pub fn notes(&self) -> Vec<Note> {
        JsonFileStore::new(self.store_path())
            .read_all()
            .expect("Failed to read notes")
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> NoteboxCommand {
        NoteboxCommand::new()
            .config_home(&self.config_home())
            .store(&self.store_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a note with a parsed id.
pub fn note(id: &str, title: &str, content: &str) -> Note {
    Note::new(id.parse().expect("valid id"), title, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seed_round_trips() {
        let env = TestEnv::new();
        let notes = vec![note("a", "Alpha note", "x")];
        env.seed(&notes);
        assert_eq!(env.notes(), notes);
    }
}
