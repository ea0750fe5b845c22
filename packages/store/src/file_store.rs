//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as a JSON file on the local filesystem. It is used by native front ends to
//! retain reports and accounts across restarts, playing the role the browser's
//! `localStorage` plays on the web.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── fixmyward_problems.json
//! ├── fixmyward_users.json
//! └── fixmyward_current_user.json   # absent while logged out
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/fixmyward/` |
//! | Linux | `~/.local/share/fixmyward/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\fixmyward\` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.item_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.item_path(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewProblem, Role};
    use crate::records::RecordStore;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "fixmyward_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = temp_dir("missing");
        let store = FileStore::new(dir.clone());

        assert_eq!(store.get_item("nothing").unwrap(), None);
        store.remove_item("nothing").unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_undecodable_file_survives_create() {
        let dir = temp_dir("undecodable");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fixmyward_problems.json");
        let bytes: &[u8] = &[0x5b, 0xff, 0xfe, 0x00, 0x80, 0x5d];
        std::fs::write(&path, bytes).unwrap();

        let records = RecordStore::new(FileStore::new(dir.clone()));
        assert!(records.list_problems().is_empty());
        records.create_problem(NewProblem {
            title: "new".into(),
            category: "Road".into(),
            ward_number: "1".into(),
            location: String::new(),
            description: "Broken".into(),
            image_url: None,
            reported_by: "anonymous@user.com".into(),
        });

        assert_eq!(std::fs::read(&path).unwrap(), bytes);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let records = RecordStore::new(FileStore::new(dir.clone()));
        let user = records.register_user("asha@example.com", "Asha", Role::Citizen, None);
        records.login("asha@example.com");

        // Re-open from same directory
        let reopened = RecordStore::new(FileStore::new(dir.clone()));
        let users = reopened.list_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users.last(), Some(&user));
        assert_eq!(reopened.current_user(), Some(user));
        assert_eq!(reopened.list_problems().len(), 5);

        reopened.logout();
        assert!(!dir.join("fixmyward_current_user.json").exists());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
