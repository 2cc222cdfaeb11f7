use std::fs;
use std::path::Path;

use classreach::assets;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"binary").unwrap();
}

#[test]
fn asset_scanner_reports_only_unreferenced_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let assets_dir = dir.path().join("assets");
    let src_dir = dir.path().join("core");

    touch(&assets_dir.join("sprites/ash.png"));
    touch(&assets_dir.join("sounds/click.ogg"));
    touch(&assets_dir.join("ui/logo.png"));

    fs::create_dir_all(&src_dir).unwrap();
    fs::write(
        src_dir.join("Renderer.java"),
        r#"
public class Renderer {
    String sprite = "sprites/ash.png";
}
"#,
    )
    .unwrap();
    fs::write(
        src_dir.join("Audio.java"),
        r#"
public class Audio {
    void click() {
        player.play("sounds/click.ogg");
    }
}
"#,
    )
    .unwrap();

    let unused = assets::find_unused_assets(&assets_dir, &src_dir).unwrap();
    let unused: Vec<&str> = unused.iter().map(String::as_str).collect();
    assert_eq!(unused, vec!["ui/logo.png"]);
}

#[test]
fn asset_scanner_ignores_non_java_sources() {
    let dir = tempfile::TempDir::new().unwrap();
    let assets_dir = dir.path().join("assets");
    let src_dir = dir.path().join("core");

    touch(&assets_dir.join("maps/town.json"));

    fs::create_dir_all(&src_dir).unwrap();
    // A reference inside a non-Java file does not count.
    fs::write(src_dir.join("notes.md"), "see \"maps/town.json\"").unwrap();

    let unused = assets::find_unused_assets(&assets_dir, &src_dir).unwrap();
    assert!(unused.contains("maps/town.json"));
}

#[test]
fn asset_report_is_written_sorted_one_per_line() {
    let dir = tempfile::TempDir::new().unwrap();
    let unused: std::collections::BTreeSet<String> = ["b.png", "a.png"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let output = dir.path().join("unused_assets.txt");
    assets::write_report(&unused, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "a.png\nb.png\n");
}
