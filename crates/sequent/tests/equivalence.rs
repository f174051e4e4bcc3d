//! Fast-path transparency: the optimized evaluation paths must produce the
//! same ordered output as the fully generic element path.
//!
//! `from_vec` pipelines run the contiguous bulk path; the same data behind
//! an `OpaqueSource` declines every capability and runs the generic path;
//! `iter()` pulls through the same link chain. All three must agree.

use proptest::prelude::*;

use sequent::{from_source, from_vec, Pipeline};
use sequent_test::OpaqueSource;

#[test]
fn test_map_filter_same_on_all_paths() {
    let data = vec![5, -3, 12, 0, 7, -1];

    let fast = from_vec(data.clone()).map(|x| x * 2).filter(|x| *x > 0);
    let generic = from_source(OpaqueSource::new(data.clone()))
        .map(|x| x * 2)
        .filter(|x| *x > 0);

    let expected: Vec<i32> = data.iter().map(|x| x * 2).filter(|x| *x > 0).collect();
    assert_eq!(fast.to_vec(), expected);
    assert_eq!(generic.to_vec(), expected);
    assert_eq!(fast.iter().collect::<Vec<_>>(), expected);
    assert_eq!(generic.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_flat_map_same_on_all_paths() {
    let data = vec![1, 2, 3];

    let fast = from_vec(data.clone()).flat_map(|x| vec![x; x as usize]);
    let generic = from_source(OpaqueSource::new(data.clone())).flat_map(|x| vec![x; x as usize]);

    let expected = vec![1, 2, 2, 3, 3, 3];
    assert_eq!(fast.to_vec(), expected);
    assert_eq!(generic.to_vec(), expected);
    assert_eq!(fast.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_bulk_consumers_match_generic_results() {
    let data = vec![4, 1, 9, 2, 2];

    assert_eq!(
        from_vec(data.clone()).sum().ok(),
        from_source(OpaqueSource::new(data.clone())).sum().ok()
    );
    assert_eq!(
        from_vec(data.clone()).max().ok(),
        from_source(OpaqueSource::new(data.clone())).max().ok()
    );
    assert_eq!(
        from_vec(data.clone()).count(),
        from_source(OpaqueSource::new(data)).count()
    );
}

proptest! {
    #[test]
    fn prop_map_filter_transparent(data in proptest::collection::vec(-1000i64..1000, 0..64)) {
        let fast = from_vec(data.clone()).map(|x| x * 3 - 1).filter(|x| x % 2 != 0);
        let generic = from_source(OpaqueSource::new(data.clone()))
            .map(|x| x * 3 - 1)
            .filter(|x| x % 2 != 0);

        let expected: Vec<i64> = data.iter().map(|x| x * 3 - 1).filter(|x| x % 2 != 0).collect();
        prop_assert_eq!(fast.to_vec(), expected.clone());
        prop_assert_eq!(generic.to_vec(), expected.clone());
        prop_assert_eq!(fast.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_sum_transparent(data in proptest::collection::vec(-1000i64..1000, 0..64)) {
        let via_bulk = from_vec(data.clone()).sum().unwrap();
        let via_generic = from_source(OpaqueSource::new(data.clone())).sum().unwrap();
        let expected: i64 = data.iter().sum();
        prop_assert_eq!(via_bulk, expected);
        prop_assert_eq!(via_generic, expected);
    }
}
