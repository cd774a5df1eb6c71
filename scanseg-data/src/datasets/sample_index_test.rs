// scanseg-data/src/datasets/sample_index_test.rs

use super::*;
use std::fs;
use tempfile::TempDir;

fn dataset_root(names: &[&str]) -> TempDir {
    let root = tempfile::tempdir().expect("temp dir");
    fs::create_dir(root.path().join(SCANS_DIR)).unwrap();
    fs::create_dir(root.path().join(LABELS_DIR)).unwrap();
    for name in names {
        fs::write(root.path().join(SCANS_DIR).join(name), b"scan").unwrap();
        fs::write(root.path().join(LABELS_DIR).join(name), b"label").unwrap();
    }
    root
}

fn index_of_len(n: usize, split_fraction: f64) -> SampleIndex {
    let images = (0..n).map(|i| PathBuf::from(format!("scans/{i}.png"))).collect();
    let labels = (0..n).map(|i| PathBuf::from(format!("labels/{i}.png"))).collect();
    SampleIndex::from_pairs(images, labels, split_fraction).unwrap()
}

#[test]
fn test_build_pairs_by_filename() {
    let root = dataset_root(&["b.png", "a.png", "c.png"]);
    let index = SampleIndex::build(root.path(), 0.1).unwrap();
    assert_eq!(index.len(), 3);
    for (image, label) in index.images().iter().zip(index.labels()) {
        assert_eq!(image.file_name(), label.file_name());
        assert!(image.starts_with(root.path().join(SCANS_DIR)));
        assert!(label.starts_with(root.path().join(LABELS_DIR)));
    }
    let names: Vec<_> = index
        .images()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
}

#[test]
fn test_build_does_not_require_label_files() {
    let root = dataset_root(&["a.png"]);
    fs::write(root.path().join(SCANS_DIR).join("orphan.png"), b"scan").unwrap();
    let index = SampleIndex::build(root.path(), 0.5).unwrap();
    assert_eq!(index.len(), 2);
    let paths = index.get(1).unwrap();
    assert!(!paths.label.exists());
}

#[test]
fn test_build_skips_subdirectories() {
    let root = dataset_root(&["a.png", "b.png"]);
    fs::create_dir(root.path().join(SCANS_DIR).join("nested")).unwrap();
    let index = SampleIndex::build(root.path(), 0.1).unwrap();
    assert_eq!(index.len(), 2);
}

#[test]
fn test_build_missing_scans_dir() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join(LABELS_DIR)).unwrap();
    match SampleIndex::build(root.path(), 0.1) {
        Err(ScanSegError::DatasetNotFound { path, .. }) => {
            assert_eq!(path, root.path().join(SCANS_DIR))
        }
        other => panic!("Expected DatasetNotFound, got {:?}", other),
    }
}

#[test]
fn test_build_missing_labels_dir() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join(SCANS_DIR)).unwrap();
    match SampleIndex::build(root.path(), 0.1) {
        Err(ScanSegError::DatasetNotFound { path, .. }) => {
            assert_eq!(path, root.path().join(LABELS_DIR))
        }
        other => panic!("Expected DatasetNotFound, got {:?}", other),
    }
}

#[test]
fn test_build_rejects_split_fraction_outside_open_interval() {
    let root = dataset_root(&["a.png"]);
    for bad in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
        match SampleIndex::build(root.path(), bad) {
            Err(ScanSegError::Configuration(_)) => {}
            other => panic!("Expected Configuration error for {}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_train_boundary_uses_floor() {
    // (len, fraction, expected boundary)
    let cases = [
        (0, 0.1, 0),
        (1, 0.1, 1),
        (9, 0.1, 9),
        (10, 0.1, 9),
        (19, 0.1, 18),
        (20, 0.1, 18),
        (10, 0.25, 8),
        (7, 0.5, 4),
        (3, 0.9, 1),
    ];
    for (n, f, expected) in cases {
        let index = index_of_len(n, f);
        assert_eq!(index.train_boundary(), expected, "n={} f={}", n, f);
        assert_eq!(
            index.train_boundary(),
            n - (n as f64 * f).floor() as usize
        );
    }
}

#[test]
fn test_views_partition_dataset() {
    for n in 0..40 {
        for f in [0.05, 0.1, 0.3, 0.5, 0.75, 0.99] {
            let index = index_of_len(n, f);
            let train = index.view_for(Mode::Train);
            let test = index.view_for(Mode::Test);
            assert_eq!(train.start(), 0);
            assert_eq!(train.end(), test.start());
            assert_eq!(test.end(), n);
            assert!(train.start() <= train.end() && train.end() <= n);
            assert_eq!(train.size() + test.size(), n);
        }
    }
}

#[test]
fn test_from_pairs_length_mismatch() {
    let result = SampleIndex::from_pairs(
        vec![PathBuf::from("a"), PathBuf::from("b")],
        vec![PathBuf::from("a")],
        0.1,
    );
    assert!(matches!(result, Err(ScanSegError::Configuration(_))));
}

#[test]
fn test_get_out_of_bounds() {
    let index = index_of_len(3, 0.1);
    assert!(index.get(2).is_ok());
    match index.get(3) {
        Err(ScanSegError::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("Expected IndexOutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_empty_scans_dir() {
    let root = dataset_root(&[]);
    let index = SampleIndex::build(root.path(), 0.1).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.train_boundary(), 0);
    assert_eq!(index.view_for(Mode::Test).size(), 0);
}
