use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

const JAVA_SUFFIX: &str = ".java";

/// Read-only mapping from dotted module identifiers to source file paths,
/// built once per resolution run.
#[derive(Debug, Default)]
pub struct ModuleIndex {
    modules: HashMap<String, PathBuf>,
}

impl ModuleIndex {
    /// Walk `project_root` and index every Java file under it.
    ///
    /// When two files derive the same module id (possible with an
    /// inconsistent root choice, e.g. a directory whose name contains a
    /// dot), the later-walked file silently overwrites the earlier mapping.
    /// That is documented behavior, surfaced here only as a warning.
    pub fn build(project_root: &Path) -> Result<Self> {
        let mut modules = HashMap::new();

        for entry in WalkDir::new(project_root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(project_root).unwrap_or(path);
            if let Some(module_id) = Self::module_id(relative) {
                if let Some(previous) = modules.insert(module_id.clone(), path.to_path_buf()) {
                    log::warn!(
                        "module id {} remapped from {} to {}",
                        module_id,
                        previous.display(),
                        path.display()
                    );
                }
            }
        }

        log::debug!(
            "indexed {} modules under {}",
            modules.len(),
            project_root.display()
        );
        Ok(Self { modules })
    }

    /// Derive the dotted module id of a root-relative path: path separators
    /// become dots, and exactly the trailing `.java` suffix is stripped.
    /// Pure in the relative path, so the same layout yields the same ids
    /// under any absolute root. Non-Java paths yield `None`.
    pub fn module_id(relative: &Path) -> Option<String> {
        let dotted = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join(".");
        dotted.strip_suffix(JAVA_SUFFIX).map(str::to_string)
    }

    /// Best-effort lookup. `None` means an external or unresolvable
    /// identifier, never a failure; the ambiguity of qualifier-to-module
    /// matching stays visible in this return type.
    pub fn resolve(&self, module_id: &str) -> Option<&Path> {
        self.modules.get(module_id).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
