use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a resolution run. All of them abort the run; unresolved
/// identifiers are deliberately not represented here because they are the
/// normal terminal case for external references, not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be parsed into a usable syntax tree.
    #[error("failed to parse {path}: source contains syntax errors")]
    Parse { path: PathBuf },

    /// The file declares no top-level type, so it has no canonical class.
    #[error("no top-level type declared in {path}")]
    MissingTypeDeclaration { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("incompatible tree-sitter grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}
