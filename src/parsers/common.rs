use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use crate::error::{Error, Result};

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    /// Parse source text into a tree. tree-sitter never refuses input
    /// outright, so a tree containing error nodes counts as unparseable.
    pub fn parse_source(&mut self, source: &str, path: &Path) -> Result<Tree> {
        let tree = self.parser.parse(source, None).ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
        })?;
        if tree.root_node().has_error() {
            return Err(Error::Parse {
                path: path.to_path_buf(),
            });
        }
        Ok(tree)
    }
}

/// Buffered file reading sized to the file for better I/O performance.
pub fn read_source(path: &Path) -> Result<String> {
    let read = || -> std::io::Result<String> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len() as usize;
        let mut reader =
            BufReader::with_capacity(if file_size < 8192 { file_size.max(1) } else { 8192 }, file);
        let mut content = String::with_capacity(file_size);
        reader.read_to_string(&mut content)?;
        Ok(content)
    };
    read().map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}
