// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid storage key {key:?}")]
    InvalidKey { key: String },
    #[error("refusing to write through symlink at {}", path.display())]
    SymlinkRefused { path: PathBuf },
}

/// A string-valued key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place, without fsync.
    #[default]
    BestEffort,

    /// Also syncs the file contents and, on unix, the containing directory.
    Durable,
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    durability: WriteDurability,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_owned(),
            });
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;
        write_atomic(&self.root, &path, value.as_bytes(), self.durability)
    }
}

fn write_atomic(
    dir: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = dir.join(format!(".fqlbench.tmp.{file_name}.{nanos}"));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    let written = file.write_all(contents).and_then(|()| {
        if durability == WriteDurability::Durable {
            file.sync_all()
        } else {
            Ok(())
        }
    });
    drop(file);
    discard_temp_on_error(&tmp_path, written)?;

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let handle = fs::File::open(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            handle.sync_all().map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Removes a half-written temp file when writing it failed.
fn discard_temp_on_error(tmp_path: &Path, result: io::Result<()>) -> Result<(), StoreError> {
    result.map_err(|source| {
        let _ = fs::remove_file(tmp_path);
        StoreError::Io {
            path: tmp_path.to_path_buf(),
            source,
        }
    })
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::env;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub(crate) struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        pub(crate) fn new(prefix: &str) -> Self {
            let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = env::temp_dir();
            path.push(format!("fqlbench-{prefix}-{}-{nanos}-{counter}", std::process::id()));
            std::fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        pub(crate) fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::test_support::TempDir;
    use super::{
        discard_temp_on_error, FileStore, KeyValueStore, MemoryStore, StoreError, WriteDurability,
    };

    #[fixture]
    fn tmp() -> TempDir {
        TempDir::new("kv")
    }

    #[rstest]
    #[case::best_effort(WriteDurability::BestEffort)]
    #[case::durable(WriteDurability::Durable)]
    fn file_store_round_trips_and_overwrites(tmp: TempDir, #[case] durability: WriteDurability) {
        let store = FileStore::new(tmp.path().join("state")).with_durability(durability);
        assert_eq!(store.get("tabs").unwrap(), None);

        store.set("tabs", "one").unwrap();
        store.set("tabs", "two").unwrap();
        assert_eq!(store.get("tabs").unwrap().as_deref(), Some("two"));
        assert!(tmp.path().join("state/tabs.json").is_file());

        let leftovers = std::fs::read_dir(tmp.path().join("state"))
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".fqlbench.tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[rstest]
    fn failed_temp_writes_leave_no_file_behind(tmp: TempDir) {
        let tmp_path = tmp.path().join(".fqlbench.tmp.tabs.json.1");
        std::fs::write(&tmp_path, "partial").unwrap();

        let failed = Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err = discard_temp_on_error(&tmp_path, failed).unwrap_err();
        assert!(matches!(err, StoreError::Io { path, .. } if path == tmp_path));
        assert!(!tmp_path.exists());

        std::fs::write(&tmp_path, "complete").unwrap();
        discard_temp_on_error(&tmp_path, Ok(())).unwrap();
        assert!(tmp_path.is_file());
    }

    #[rstest]
    fn file_store_rejects_path_like_keys(tmp: TempDir) {
        let store = FileStore::new(tmp.path());
        for key in ["", "../tabs", "a/b", "tabs.json"] {
            assert!(matches!(store.set(key, "x"), Err(StoreError::InvalidKey { .. })));
        }
    }

    #[cfg(unix)]
    #[rstest]
    fn file_store_refuses_symlink_targets(tmp: TempDir) {
        let target = tmp.path().join("elsewhere.json");
        std::fs::write(&target, "keep").unwrap();
        std::os::unix::fs::symlink(&target, tmp.path().join("tabs.json")).unwrap();

        let store = FileStore::new(tmp.path());
        assert!(matches!(store.set("tabs", "x"), Err(StoreError::SymlinkRefused { .. })));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.set("tabs", "x").unwrap();
        assert_eq!(view.get("tabs").unwrap().as_deref(), Some("x"));
        assert_eq!(view.get("other").unwrap(), None);
    }
}
