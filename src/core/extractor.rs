use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parsers::JavaSource;

/// Per-file dependency facts: the canonical declared class plus everything
/// the file names that might refer to another module. Computed once per
/// file, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Name of the first top-level type declared in the file.
    pub class_name: String,
    /// Dotted import paths, set semantics.
    pub imports: BTreeSet<String>,
    /// Qualifier expressions observed on method invocations. These are bare
    /// syntactic strings; a local variable name lands here just like a class
    /// reference would.
    pub qualifiers: BTreeSet<String>,
}

impl DependencyRecord {
    /// Imports and qualifiers together: the candidate identifiers this file
    /// feeds into a reachability run.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .chain(self.qualifiers.iter())
            .map(String::as_str)
    }
}

/// Extract the dependency record of a single Java source file.
///
/// Fails with [`Error::Parse`] on malformed source and with
/// [`Error::MissingTypeDeclaration`] when the file declares no top-level
/// type. Both propagate and abort the surrounding resolution run; partially
/// malformed trees are not tolerated.
pub fn extract_dependencies(path: &Path) -> Result<DependencyRecord> {
    let ast = JavaSource::parse_file(path)?;
    let class_name = ast
        .primary_type_name()
        .ok_or_else(|| Error::MissingTypeDeclaration {
            path: path.to_path_buf(),
        })?;

    Ok(DependencyRecord {
        class_name,
        imports: ast.imports(),
        qualifiers: ast.invocation_qualifiers(),
    })
}
