use std::fs;

use journal_engine::{ensure_output_dir, prepare_output_layout, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn layout_creates_resources_unless_text_only() {
    let temp = TempDir::new().unwrap();

    let folder = temp.path().join("Diario");
    let layout = prepare_output_layout(&folder, false).unwrap();
    assert!(layout.created);
    assert!(layout.resources.is_dir());
    assert_eq!(layout.resources, folder.join("resources"));

    let layout = prepare_output_layout(&folder, false).unwrap();
    assert!(!layout.created);

    let text = temp.path().join("SoloTexto");
    let layout = prepare_output_layout(&text, true).unwrap();
    assert!(layout.created);
    assert!(text.is_dir());
    assert!(!layout.resources.exists());
}

#[test]
fn output_path_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    assert!(ensure_output_dir(&file_path).is_err());
    assert!(prepare_output_layout(&file_path, true).is_err());
}

#[test]
fn atomic_write_replaces_previous_document() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().join("Diario"));

    let first = writer.write("Diario.md", "### 1 de enero\n\n").unwrap();
    assert_eq!(first.file_name().unwrap(), "Diario.md");
    assert_eq!(fs::read_to_string(&first).unwrap(), "### 1 de enero\n\n");

    let second = writer.write("Diario.md", "### 2 de enero\n\n").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "### 2 de enero\n\n");

    let leftovers: Vec<_> = fs::read_dir(temp.path().join("Diario"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("Diario.md", "data").is_err());
    assert!(!file_path.with_file_name("Diario.md").exists());
}
