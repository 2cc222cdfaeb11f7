use std::collections::BTreeSet;
use std::path::Path;

use tree_sitter::{Node as TSNode, Tree};

use super::common::{extract_text, read_source, TreeSitterParser};
use crate::error::Result;

/// Node kinds that introduce a top-level type declaration.
const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// One parsed Java compilation unit.
///
/// This is the narrow surface the rest of the crate consumes from
/// tree-sitter: declared imports, the canonical top-level type, and the
/// qualifier expressions of method invocations. Nothing else of the grammar
/// leaks out.
pub struct JavaSource {
    tree: Tree,
    source: String,
}

impl JavaSource {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let source = read_source(path)?;
        Self::parse(source, path)
    }

    pub fn parse(source: String, path: &Path) -> Result<Self> {
        let mut parser = TreeSitterParser::new(tree_sitter_java::language())?;
        let tree = parser.parse_source(&source, path)?;
        Ok(Self { tree, source })
    }

    /// Dotted import paths declared at the top of the file, duplicates
    /// collapsed. Wildcard imports contribute their base path, static
    /// imports the full member path.
    pub fn imports(&self) -> BTreeSet<String> {
        let root = self.tree.root_node();
        let bytes = self.source.as_bytes();
        let mut imports = BTreeSet::new();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() != "import_declaration" {
                continue;
            }
            let mut inner = child.walk();
            for part in child.children(&mut inner) {
                if matches!(part.kind(), "scoped_identifier" | "identifier") {
                    imports.insert(extract_text(&part, bytes).to_string());
                    break;
                }
            }
        }

        imports
    }

    /// Name of the first top-level type declaration; one public class per
    /// file is assumed, so the first declaration is canonical.
    pub fn primary_type_name(&self) -> Option<String> {
        let root = self.tree.root_node();
        let bytes = self.source.as_bytes();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if TYPE_DECLARATION_KINDS.contains(&child.kind()) {
                if let Some(name) = child.child_by_field_name("name") {
                    return Some(extract_text(&name, bytes).to_string());
                }
            }
        }

        None
    }

    /// Qualifier text of every method invocation anywhere in the tree, e.g.
    /// the `helper` of `helper.doWork()` or the `System.out` of
    /// `System.out.println(..)`.
    ///
    /// Walks an explicit stack instead of recursing so deeply nested blocks,
    /// lambdas and anonymous bodies cannot overflow the call stack. Every
    /// child of every node is pushed, so each node is visited exactly once.
    pub fn invocation_qualifiers(&self) -> BTreeSet<String> {
        let bytes = self.source.as_bytes();
        let mut qualifiers = BTreeSet::new();

        let mut stack: Vec<TSNode> = vec![self.tree.root_node()];
        while let Some(node) = stack.pop() {
            if node.kind() == "method_invocation" {
                if let Some(object) = node.child_by_field_name("object") {
                    let text = extract_text(&object, bytes);
                    if !text.is_empty() {
                        qualifiers.insert(text.to_string());
                    }
                }
            }
            for i in 0..node.child_count() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }

        qualifiers
    }
}
