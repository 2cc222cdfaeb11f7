use std::fs;
use std::path::Path;

use classreach::ModuleIndex;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "public class X {}\n").unwrap();
}

#[test]
fn module_id_derivation_is_pure_and_root_independent() {
    assert_eq!(
        ModuleIndex::module_id(Path::new("pkg/util/Helper.java")).as_deref(),
        Some("pkg.util.Helper")
    );
    assert_eq!(
        ModuleIndex::module_id(Path::new("Main.java")).as_deref(),
        Some("Main")
    );
    // Non-Java files derive no module id.
    assert_eq!(ModuleIndex::module_id(Path::new("notes/readme.txt")), None);
}

#[test]
fn index_maps_every_java_file_under_the_root() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(&root.join("Main.java"));
    touch(&root.join("pkg/B.java"));
    fs::write(root.join("pkg/data.txt"), "not code").unwrap();

    let index = ModuleIndex::build(root).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.resolve("Main"), Some(root.join("Main.java").as_path()));
    assert_eq!(
        index.resolve("pkg.B"),
        Some(root.join("pkg/B.java").as_path())
    );
    assert_eq!(index.resolve("pkg.data"), None);
    assert_eq!(index.resolve("missing.Class"), None);
}

#[test]
fn index_collision_keeps_exactly_one_mapping() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    // A directory literally named "a.b" collides with the a/b/ package
    // layout: both derive the module id "a.b.C". The index keeps whichever
    // file the walk encountered last; only one mapping survives.
    let flat = root.join("a.b/C.java");
    let nested = root.join("a/b/C.java");
    touch(&flat);
    touch(&nested);

    let index = ModuleIndex::build(root).unwrap();

    assert_eq!(index.len(), 1);
    let survivor = index.resolve("a.b.C").expect("collision id still resolves");
    assert!(survivor == flat.as_path() || survivor == nested.as_path());
}
