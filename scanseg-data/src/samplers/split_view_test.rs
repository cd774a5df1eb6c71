// scanseg-data/src/samplers/split_view_test.rs

use super::*;

#[test]
fn test_split_view_iter_ascending() {
    let view = SplitView::new(2, 5).unwrap();
    let indices: Vec<usize> = view.indices(10).collect();
    assert_eq!(indices, vec![2, 3, 4]);
    assert_eq!(view.indices(10).len(), 3);
    assert_eq!(view.size(), 3);
}

#[test]
fn test_split_view_empty() {
    let view = SplitView::new(4, 4).unwrap();
    let mut iter = view.indices(10);
    assert_eq!(iter.next(), None);
    assert_eq!(view.indices(10).len(), 0);
}

#[test]
fn test_split_view_rejects_inverted_range() {
    match SplitView::new(5, 2) {
        Err(ScanSegError::Configuration(_)) => {}
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_split_view_never_exceeds_dataset_len() {
    // A view built against a larger dataset must not hand out stale indices.
    let view = SplitView::new(3, 12).unwrap();
    let indices: Vec<usize> = view.indices(6).collect();
    assert_eq!(indices, vec![3, 4, 5]);

    let past_end = SplitView::new(8, 12).unwrap();
    assert_eq!(past_end.indices(6).count(), 0);
    let clamped = past_end.clamped(6);
    assert!(clamped.start() <= clamped.end());
    assert!(clamped.end() <= 6);
}

#[test]
fn test_split_view_contains() {
    let view = SplitView::new(1, 3).unwrap();
    assert!(!view.contains(0));
    assert!(view.contains(1));
    assert!(view.contains(2));
    assert!(!view.contains(3));
}
