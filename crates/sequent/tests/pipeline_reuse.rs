//! Pipelines are immutable values: deriving never mutates, and every
//! pipeline evaluates identically any number of times. Also covers the
//! element-edit (append/prepend) and set-difference operators.

use sequent::{from_vec, range, Pipeline};

#[test]
fn test_deriving_never_mutates_the_original() {
    let base = from_vec(vec![1, 2, 3]);
    let before = base.to_vec();

    let derived = base.clone().map(|x| x * 10);

    assert_eq!(base.to_vec(), before);
    assert_eq!(derived.to_vec(), vec![10, 20, 30]);
    // And the original still evaluates identically afterwards.
    assert_eq!(base.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let seq = range(0, 5).unwrap().map(|x| x * x).filter(|x| *x > 0);
    let first = seq.to_vec();
    let second = seq.to_vec();
    let pulled: Vec<i64> = seq.iter().collect();

    assert_eq!(first, vec![1, 4, 9, 16]);
    assert_eq!(first, second);
    assert_eq!(first, pulled);
}

#[test]
fn test_append_and_prepend_positions() {
    let seq = from_vec(vec![2, 3]).prepend(1).append(4).append(5);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);

    // Later prepends land closer to the front.
    let fronted = from_vec(vec![9]).prepend(2).prepend(1);
    assert_eq!(fronted.to_vec(), vec![1, 2, 9]);
}

#[test]
fn test_edits_apply_after_transforms() {
    let seq = from_vec(vec![1, 2, 3]).map(|x| x * 10).append(7);
    assert_eq!(seq.to_vec(), vec![10, 20, 30, 7]);
}

#[test]
fn test_edits_keep_the_count_cheap() {
    let seq = from_vec(vec![1, 2, 3]).prepend(0).append(4);
    assert_eq!(seq.cheap_count(), Some(5));
    assert_eq!(seq.count(), 5);

    // A filtered inner pipeline declines, so the edited one declines too.
    let filtered = from_vec(vec![1, 2, 3]).filter(|_| true).append(4);
    assert_eq!(filtered.cheap_count(), None);
    assert_eq!(filtered.count(), 4);
}

#[test]
fn test_edited_pipelines_compose_further() {
    let seq = from_vec(vec![1, 2, 3]).append(4).map(|x| x * 2).take(3);
    assert_eq!(seq.to_vec(), vec![2, 4, 6]);
}

#[test]
fn test_except_is_set_difference() {
    let seq = from_vec(vec![1, 2, 2, 3, 4, 1]).except(vec![2, 4]);
    assert_eq!(seq.to_vec(), vec![1, 3]);

    // Distinctness applies even with an empty reject set.
    let deduped = from_vec(vec![1, 1, 3, 3]).except(Vec::new());
    assert_eq!(deduped.to_vec(), vec![1, 3]);

    // Each evaluation rebuilds the reject state.
    assert_eq!(seq.to_vec(), vec![1, 3]);
}

#[test]
fn test_flat_map_through_pull_and_push() {
    let seq = from_vec(vec![1, 2, 3]).flat_map(|x| vec![x; 2]);
    assert_eq!(seq.to_vec(), vec![1, 1, 2, 2, 3, 3]);

    // A take bounded mid-burst drains the buffered tail correctly.
    let bounded = from_vec(vec![1, 2, 3]).flat_map(|x| vec![x; 2]).take(3);
    assert_eq!(bounded.to_vec(), vec![1, 1, 2]);
    assert_eq!(bounded.iter().collect::<Vec<_>>(), vec![1, 1, 2]);
}

#[test]
fn test_flat_map_with_combines_input_and_nested() {
    let seq = from_vec(vec![10, 20]).flat_map_with(|x| 0..*x / 10, |x, i| x + i);
    assert_eq!(seq.to_vec(), vec![10, 20, 21]);
}
