//! Terminal reduction semantics across the numeric instances, including the
//! floating-point NaN rules and the Option-element variants.

use rust_decimal::Decimal;

use sequent::{empty, from_source, from_vec, repeat_forever, SequentError};
use sequent_test::OpaqueSource;

// ============================================================================
// Sum
// ============================================================================

#[test]
fn test_sum_empty_is_zero() {
    assert_eq!(empty::<i32>().sum(), Ok(0));
    assert_eq!(empty::<f64>().sum(), Ok(0.0));
}

#[test]
fn test_sum_ints() {
    assert_eq!(from_vec(vec![1, 2, 3]).sum(), Ok(6));
}

#[test]
fn test_sum_nan_propagates() {
    let result = from_vec(vec![1.0, f64::NAN, 2.0]).sum().unwrap();
    assert!(result.is_nan());
}

#[test]
fn test_sum_widens_then_narrows() {
    // The i32 accumulator is an i64, so intermediate overflow is fine as
    // long as the final value fits.
    let data = vec![i32::MAX, 1, -2, -i32::MAX];
    assert_eq!(from_vec(data).sum(), Ok(-1));

    // A final value out of range is an Overflow error, not a wrap.
    let overflowing = from_vec(vec![i32::MAX, i32::MAX]);
    assert_eq!(overflowing.sum(), Err(SequentError::Overflow("sum")));
}

#[test]
fn test_sum_decimal() {
    let data = vec![Decimal::new(125, 2), Decimal::new(875, 2)];
    assert_eq!(from_vec(data).sum(), Ok(Decimal::new(1000, 2)));
}

#[test]
fn test_sum_opt_skips_absent_values() {
    let data = vec![Some(1), None, Some(2), None];
    assert_eq!(from_vec(data).sum_opt(), Ok(3));
    assert_eq!(empty::<Option<i32>>().sum_opt(), Ok(0));
}

// ============================================================================
// Max / Min
// ============================================================================

#[test]
fn test_max_requires_elements() {
    assert_eq!(empty::<i32>().max(), Err(SequentError::NoElements));
    assert_eq!(from_vec(vec![3, 1, 2]).max(), Ok(3));
    assert_eq!(from_vec(vec![3, 1, 2]).min(), Ok(1));
}

#[test]
fn test_max_nan_running_value_is_superseded() {
    // A NaN only stays the max when nothing follows it.
    assert!(from_vec(vec![f64::NAN]).max().unwrap().is_nan());
    assert_eq!(from_vec(vec![f64::NAN, 1.0]).max(), Ok(1.0));
    assert_eq!(from_vec(vec![1.0, f64::NAN]).max(), Ok(1.0));
    assert_eq!(from_vec(vec![f64::NAN, 1.0, f64::NAN, 3.0]).max(), Ok(3.0));
}

#[test]
fn test_min_nan_candidate_wins_and_sticks() {
    assert!(from_vec(vec![1.0, f64::NAN]).min().unwrap().is_nan());
    assert!(from_vec(vec![f64::NAN, 1.0]).min().unwrap().is_nan());
    assert_eq!(from_vec(vec![2.0, 1.0, 3.0]).min(), Ok(1.0));
}

#[test]
fn test_max_opt_prefers_present_values() {
    assert_eq!(from_vec(vec![None, Some(5), None]).max_opt(), Some(5));
    assert_eq!(empty::<Option<i32>>().max_opt(), None);
    assert_eq!(from_vec(vec![None, None]).max_opt::<i32>(), None);
    assert_eq!(from_vec(vec![Some(2), Some(7), Some(3)]).min_opt(), Some(2));
}

#[test]
fn test_extrema_agree_across_paths() {
    let data = vec![4, -2, 9, 9, 0];
    assert_eq!(
        from_vec(data.clone()).max(),
        from_source(OpaqueSource::new(data.clone())).max()
    );
    assert_eq!(
        from_vec(data.clone()).min(),
        from_source(OpaqueSource::new(data)).min()
    );
}

// ============================================================================
// Fold / Reduce
// ============================================================================

#[test]
fn test_fold_empty_yields_seed() {
    assert_eq!(empty::<i32>().fold(41, |acc, x| acc + x), 41);
    assert_eq!(from_vec(vec![1, 2, 3]).fold(0, |acc, x| acc * 10 + x), 123);
}

#[test]
fn test_fold_with_projects_the_accumulator() {
    let joined = from_vec(vec![1, 2, 3]).fold_with(
        String::new(),
        |mut acc, x| {
            acc.push_str(&x.to_string());
            acc
        },
        |acc| acc.len(),
    );
    assert_eq!(joined, 3);
}

#[test]
fn test_reduce_seeds_from_first_element() {
    assert_eq!(from_vec(vec![5, 1, 2]).reduce(|a, b| a - b), Ok(2));
    assert_eq!(
        empty::<i32>().reduce(|a, b| a + b),
        Err(SequentError::NoElements)
    );
}

// ============================================================================
// All / Any / Count
// ============================================================================

#[test]
fn test_all_and_any_identities() {
    assert!(empty::<i32>().all(|_| false));
    assert!(!empty::<i32>().any(|_| true));
    assert!(from_vec(vec![2, 4, 6]).all(|x| x % 2 == 0));
    assert!(!from_vec(vec![2, 3, 6]).all(|x| x % 2 == 0));
    assert!(from_vec(vec![1, 2, 3]).any(|x| *x == 2));
}

#[test]
fn test_short_circuit_terminates_infinite_pipelines() {
    // Stop propagation is the only way these finish.
    assert!(repeat_forever(1).any(|x| *x == 1));
    assert!(!repeat_forever(1).all(|x| *x == 0));
}

#[test]
fn test_count_and_cheap_count() {
    let mapped = from_vec(vec![1, 2, 3]).map(|x| x * 2);
    assert_eq!(mapped.cheap_count(), Some(3));
    assert_eq!(mapped.count(), 3);

    let filtered = from_vec(vec![1, 2, 3]).filter(|x| *x > 1);
    assert_eq!(filtered.cheap_count(), None);
    assert_eq!(filtered.count(), 2);

    let unknown = from_source(OpaqueSource::new(vec![1, 2, 3]));
    assert_eq!(unknown.cheap_count(), None);
    assert_eq!(unknown.count(), 3);
}

#[test]
fn test_to_vec_matches_iteration() {
    let seq = from_vec(vec![1, 2, 3, 4]).map(|x| x * x).filter(|x| *x > 2);
    assert_eq!(seq.to_vec(), seq.iter().collect::<Vec<_>>());
    assert_eq!(seq.to_vec(), vec![4, 9, 16]);
}
