use std::fs;
use std::path::{Path, PathBuf};

use classreach::{extract_dependencies, Error};

fn write_java(dir: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn set(items: &[&str]) -> std::collections::BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn extractor_collects_imports_and_qualifiers() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_java(
        dir.path(),
        "A.java",
        r#"
import pkg.B;
import pkg.C;
import pkg.B;

public class A {
    void run() {
        helper.doWork();
        B.create();
    }
}
"#,
    );

    let record = extract_dependencies(&path).unwrap();
    assert_eq!(record.class_name, "A");
    assert_eq!(record.imports, set(&["pkg.B", "pkg.C"]));
    assert_eq!(record.qualifiers, set(&["helper", "B"]));
}

#[test]
fn extractor_handles_wildcard_and_static_imports() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_java(
        dir.path(),
        "Imports.java",
        r#"
import java.util.*;
import static util.Asserts.check;

public class Imports {
}
"#,
    );

    let record = extract_dependencies(&path).unwrap();
    assert_eq!(record.imports, set(&["java.util", "util.Asserts.check"]));
    assert!(record.qualifiers.is_empty());
}

#[test]
fn extractor_reaches_deeply_nested_invocations() {
    let dir = tempfile::TempDir::new().unwrap();
    // Qualifier sits three levels down: method body, if block, lambda body.
    let path = write_java(
        dir.path(),
        "Nested.java",
        r#"
public class Nested {
    boolean ready;

    void run() {
        if (ready) {
            Runnable task = () -> {
                helper.doWork();
            };
            task.run();
        }
    }
}
"#,
    );

    let record = extract_dependencies(&path).unwrap();
    assert!(record.qualifiers.contains("helper"));
    assert!(record.qualifiers.contains("task"));
}

#[test]
fn extractor_keeps_chained_qualifier_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_java(
        dir.path(),
        "Chained.java",
        r#"
public class Chained {
    void log() {
        System.out.println("hello");
    }
}
"#,
    );

    let record = extract_dependencies(&path).unwrap();
    assert!(record.qualifiers.contains("System.out"));
}

#[test]
fn extractor_rejects_missing_type_declaration() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_java(
        dir.path(),
        "Empty.java",
        r#"
package pkg;

import pkg.B;
"#,
    );

    let err = extract_dependencies(&path).unwrap_err();
    assert!(matches!(err, Error::MissingTypeDeclaration { .. }));
}

#[test]
fn extractor_rejects_malformed_source() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_java(dir.path(), "Broken.java", "public class {{{");

    let err = extract_dependencies(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn extractor_yields_empty_record_for_plain_class() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_java(
        dir.path(),
        "Quiet.java",
        r#"
public class Quiet {
    int value = 1;
}
"#,
    );

    let record = extract_dependencies(&path).unwrap();
    assert_eq!(record.class_name, "Quiet");
    assert!(record.imports.is_empty());
    assert!(record.qualifiers.is_empty());
    assert_eq!(record.dependencies().count(), 0);
}
