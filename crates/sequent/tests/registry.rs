//! External finder registry: provider-backed pipelines, lookup order, and
//! registration idempotence.

use sequent::{from_provider, register_source_finder, registered_finders};
use sequent_test::{chunked_finder, Chunked};

#[test]
fn test_provider_pipeline_roundtrip() {
    register_source_finder("sequent-test/chunked", chunked_finder::<i32>);

    let container = Chunked::new(vec![vec![1, 2], vec![], vec![3, 4]]);
    let seq = from_provider::<_, i32>(&container).expect("finder is registered");

    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
    // The adapter's cheap length flows through the capability surface.
    assert_eq!(seq.cheap_count(), Some(4));
    assert_eq!(seq.map(|x| x * 10).to_vec(), vec![10, 20, 30, 40]);
}

#[test]
fn test_registration_is_idempotent() {
    register_source_finder("sequent-test/chunked", chunked_finder::<i32>);
    register_source_finder("sequent-test/chunked", chunked_finder::<i32>);
    register_source_finder("sequent-test/chunked", chunked_finder::<i32>);

    let occurrences = registered_finders()
        .iter()
        .filter(|id| **id == "sequent-test/chunked")
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn test_first_registration_wins() {
    // A second finder under the same id for the same container type must
    // have no observable effect.
    register_source_finder("sequent-test/chunked", chunked_finder::<i32>);
    register_source_finder(
        "sequent-test/chunked",
        |_: &Chunked<i32>| -> Option<std::sync::Arc<dyn sequent::ProviderSource<i32>>> {
            panic!("shadowing registration must never be consulted")
        },
    );

    let container = Chunked::new(vec![vec![7]]);
    let seq = from_provider::<_, i32>(&container).expect("finder is registered");
    assert_eq!(seq.to_vec(), vec![7]);
}

#[test]
fn test_unknown_containers_are_declined() {
    let unknown = String::from("not a registered container");
    assert!(from_provider::<_, i32>(&unknown).is_none());
}
