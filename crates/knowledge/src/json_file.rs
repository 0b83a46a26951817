//! JSON file store: the knowledge base as one pretty-printed document.
//!
//! Layout on disk:
//!
//! ```json
//! {
//!   "questions": ["what is 2+2"],
//!   "answers": { "what is 2+2": "4" }
//! }
//! ```
//!
//! Loading never fails: a missing file starts an empty base and a malformed
//! one is logged and replaced by an empty base. Saving rewrites the whole
//! document through a temporary sibling file and a rename, so a crash mid-write
//! leaves the previous document intact.

use std::path::{Path, PathBuf};

use cognibot_core::error::KnowledgeError;
use cognibot_core::knowledge::{KnowledgeBase, KnowledgeStore};
use tracing::{debug, warn};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "knowledge.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KnowledgeStore for JsonFileStore {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self) -> KnowledgeBase {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No knowledge file, starting empty");
                return KnowledgeBase::new();
            }
        };

        match serde_json::from_str::<KnowledgeBase>(&content) {
            Ok(knowledge) => {
                debug!(path = %self.path.display(), questions = knowledge.len(), "Knowledge base loaded");
                knowledge
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed knowledge file, starting empty");
                KnowledgeBase::new()
            }
        }
    }

    fn save(&self, knowledge: &KnowledgeBase) -> Result<(), KnowledgeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                KnowledgeError::Storage(format!("Failed to create knowledge directory: {e}"))
            })?;
        }

        let content = serde_json::to_string_pretty(knowledge)
            .map_err(|e| KnowledgeError::Encode(e.to_string()))?;

        let tmp = self.temp_path();
        std::fs::write(&tmp, content).map_err(|e| {
            KnowledgeError::Storage(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            KnowledgeError::Storage(format!("Failed to replace {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), questions = knowledge.len(), "Knowledge base saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn save_and_reload_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.json");

        let store = JsonFileStore::new(&path);
        let mut kb = KnowledgeBase::new();
        kb.learn("What is 2+2", "4");
        store.save(&kb).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"what is 2+2\""));
        assert!(content.contains("\n  \"questions\""));

        let reloaded = JsonFileStore::new(&path).load();
        assert_eq!(reloaded, kb);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{{ not json").unwrap();
        let store = JsonFileStore::new(tmp.path());
        let kb = store.load();
        assert!(kb.is_empty());
        assert!(kb.answers.is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, r#"{{"questions": "oops", "answers": []}}"#).unwrap();
        assert!(JsonFileStore::new(tmp.path()).load().is_empty());
    }

    #[test]
    fn reads_existing_document() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{"questions": ["hi", "hi"], "answers": {{"hi": "hello"}}}}"#
        )
        .unwrap();
        let kb = JsonFileStore::new(tmp.path()).load();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.answer_for("hi"), Some("hello"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("kb.json");
        JsonFileStore::new(&path).save(&KnowledgeBase::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_into_unwritable_location_fails() {
        let tmp = NamedTempFile::new().unwrap();
        // A regular file cannot be a parent directory.
        let path = tmp.path().join("kb.json");
        let err = JsonFileStore::new(path).save(&KnowledgeBase::new()).unwrap_err();
        assert!(matches!(err, KnowledgeError::Storage(_)));
    }
}
