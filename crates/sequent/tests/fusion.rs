//! Fusion is value-preserving: every append-time merge must be
//! observationally indistinguishable from the unfused two-stage pipeline.
//!
//! The unfused baselines are built through explicit `Pipeline::` calls,
//! which bypass the fused inherent methods and stack plain composed stages.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sequent::{from_source, from_vec, Pipeline};
use sequent_test::OpaqueSource;

#[test]
fn test_map_map_equals_two_stages() {
    let data = vec![1, 2, 3, 4, 5];

    let fused = from_vec(data.clone()).map(|x| x + 1).map(|x| x * 2);
    let staged = Pipeline::map(Pipeline::map(from_vec(data), |x| x + 1), |x| x * 2);

    assert_eq!(fused.to_vec(), vec![4, 6, 8, 10, 12]);
    assert_eq!(fused.to_vec(), staged.to_vec());
}

#[test]
fn test_map_filter_tests_projected_value() {
    let data = vec![1, 2, 3, 4];

    let fused = from_vec(data.clone()).map(|x| x * 3).filter(|x| x % 2 == 0);
    let staged = Pipeline::filter(Pipeline::map(from_vec(data), |x| x * 3), |x| x % 2 == 0);

    // The predicate sees 3, 6, 9, 12 - not the raw inputs.
    assert_eq!(fused.to_vec(), vec![6, 12]);
    assert_eq!(fused.to_vec(), staged.to_vec());
}

#[test]
fn test_filter_map_projects_only_survivors() {
    let data = vec![1, 2, 3, 4, 5];
    let calls = Arc::new(AtomicUsize::new(0));

    let counting = {
        let calls = Arc::clone(&calls);
        move |x: i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            x * 10
        }
    };
    let fused = from_vec(data.clone()).filter(|x| x % 2 == 1).map(counting);

    assert_eq!(fused.to_vec(), vec![10, 30, 50]);
    // The projection ran once per surviving element, exactly like the
    // two-stage pipeline.
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    let staged = Pipeline::map(
        Pipeline::filter(from_vec(data), |x| x % 2 == 1),
        |x: i32| x * 10,
    );
    assert_eq!(staged.to_vec(), vec![10, 30, 50]);
}

#[test]
fn test_filter_filter_is_conjunction() {
    let data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

    let fused = from_vec(data.clone())
        .filter(|x| x % 2 == 0)
        .filter(|x| x % 3 == 0);
    let staged = Pipeline::filter(
        Pipeline::filter(from_vec(data), |x| x % 2 == 0),
        |x| x % 3 == 0,
    );

    assert_eq!(fused.to_vec(), vec![6, 12]);
    assert_eq!(fused.to_vec(), staged.to_vec());
}

#[test]
fn test_fusion_on_composed_tail() {
    // A generic-path source keeps the identity head, so the merges go
    // through tail replacement rather than the bare-tail shapes.
    let data = vec![1, 2, 3, 4];
    let seq = from_source(OpaqueSource::new(data.clone()));

    // Start from an explicitly stacked stage so the later merges replace the
    // tail of a composition.
    let fused = Pipeline::map(seq, |x: i32| x + 1)
        .map(|x| x * 2)
        .filter(|x| *x > 5);
    let expected: Vec<i32> = data.iter().map(|x| (x + 1) * 2).filter(|x| *x > 5).collect();
    assert_eq!(fused.to_vec(), expected);
}

#[test]
fn test_skip_skip_merges_arithmetically() {
    let data: Vec<i32> = (0..10).collect();

    // A filter ahead keeps the skips as chain stages rather than window
    // arithmetic on the source.
    let merged = from_vec(data.clone()).filter(|_| true).skip(2).skip(3);
    let expected: Vec<i32> = data.iter().copied().skip(5).collect();
    assert_eq!(merged.to_vec(), expected);
}

#[test]
fn test_take_take_keeps_the_smaller_bound() {
    let data: Vec<i32> = (0..10).collect();

    let merged = from_vec(data.clone()).filter(|_| true).take(7).take(3);
    assert_eq!(merged.to_vec(), vec![0, 1, 2]);

    let widened = from_vec(data).filter(|_| true).take(3).take(7);
    assert_eq!(widened.to_vec(), vec![0, 1, 2]);
}
