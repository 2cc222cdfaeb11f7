use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{extract_dependencies, DependencyRecord, ModuleIndex};
use crate::error::Result;
use crate::parsers::ParseCache;

/// Outcome of one reachability run: every visited module id, paired with
/// the project file it resolved to when one exists.
///
/// Ids without a path are leaves — standard-library or external-library
/// references, or qualifier strings that were never type names at all. That
/// is the expected terminal case, not an error, and the whole set is a
/// deliberate syntactic over-approximation of the true dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Class declared by the entry file itself.
    pub entry_class: String,
    pub modules: BTreeMap<String, Option<PathBuf>>,
}

impl Resolution {
    /// Visited module ids, lexicographically ordered.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn contains(&self, module_id: &str) -> bool {
        self.modules.contains_key(module_id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Worklist-driven transitive dependency resolver.
///
/// Starting from one entry file's imports and invocation qualifiers, each
/// pending identifier is resolved against the module index; identifiers
/// that resolve to a project file have that file's own dependencies merged
/// into the worklist, until no new identifiers appear. The visited set and
/// worklist are owned exclusively by one `resolve` call; the parse cache is
/// the only state shared across calls.
#[derive(Debug, Default)]
pub struct ReachabilityResolver {
    cache: ParseCache,
}

impl ReachabilityResolver {
    pub fn new() -> Self {
        Self {
            cache: ParseCache::new(),
        }
    }

    /// Number of files whose extraction is currently memoized.
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }

    /// Compute every module id reachable from `entry` under `project_root`.
    ///
    /// Terminates because the visited set only grows and the universe of
    /// distinct identifiers across reachable files is finite; each file is
    /// parsed at most once per run.
    pub fn resolve(&self, entry: &Path, project_root: &Path) -> Result<Resolution> {
        let index = ModuleIndex::build(project_root)?;
        let entry_record = self.extract(entry)?;
        log::info!(
            "resolving {} against {} indexed modules",
            entry_record.class_name,
            index.len()
        );

        let mut visited: BTreeMap<String, Option<PathBuf>> = BTreeMap::new();
        let mut worklist: Vec<String> = entry_record.dependencies().map(str::to_string).collect();

        while let Some(module_id) = worklist.pop() {
            if visited.contains_key(&module_id) {
                // Duplicate pushes are tolerated; the visited check makes
                // them no-ops.
                continue;
            }
            let resolved = index.resolve(&module_id).map(Path::to_path_buf);
            log::debug!(
                "visiting {} ({})",
                module_id,
                if resolved.is_some() { "project" } else { "leaf" }
            );

            let expand = resolved.clone();
            visited.insert(module_id, resolved);

            if let Some(path) = expand {
                let record = self.extract(&path)?;
                for dependency in record.dependencies() {
                    if !visited.contains_key(dependency) {
                        worklist.push(dependency.to_string());
                    }
                }
            }
        }

        Ok(Resolution {
            entry_class: entry_record.class_name,
            modules: visited,
        })
    }

    fn extract(&self, path: &Path) -> Result<DependencyRecord> {
        if let Some(record) = self.cache.get(path) {
            return Ok(record);
        }
        let record = extract_dependencies(path)?;
        self.cache.store(path, &record);
        Ok(record)
    }
}
