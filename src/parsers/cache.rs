use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use dashmap::DashMap;

use crate::core::DependencyRecord;

#[derive(Debug, Clone)]
struct CachedRecord {
    record: DependencyRecord,
    timestamp: u64,
    file_size: u64,
}

/// In-memory memoization of per-file dependency extraction.
///
/// Entries are validated against the file's modification time and size on
/// every lookup, so within one run a file is parsed at most once, while a
/// long-lived process still picks up edits between runs. Nothing is
/// persisted to disk.
#[derive(Debug, Default)]
pub struct ParseCache {
    entries: DashMap<PathBuf, CachedRecord>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Cached record for `path`, if present and still current.
    pub fn get(&self, path: &Path) -> Option<DependencyRecord> {
        let (timestamp, file_size) = file_stamp(path)?;
        let entry = self.entries.get(path)?;
        if entry.timestamp != timestamp || entry.file_size != file_size {
            drop(entry);
            self.entries.remove(path);
            return None;
        }
        Some(entry.record.clone())
    }

    pub fn store(&self, path: &Path, record: &DependencyRecord) {
        if let Some((timestamp, file_size)) = file_stamp(path) {
            self.entries.insert(
                path.to_path_buf(),
                CachedRecord {
                    record: record.clone(),
                    timestamp,
                    file_size,
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear()
    }
}

fn file_stamp(path: &Path) -> Option<(u64, u64)> {
    let metadata = fs::metadata(path).ok()?;
    let timestamp = metadata
        .modified()
        .ok()?
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    Some((timestamp, metadata.len()))
}
