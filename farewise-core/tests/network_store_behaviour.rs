//! Behavioural tests for loading and validating network snapshots.

use farewise_core::test_support::{MemoryNetworkStore, five_location_network, location_id};
use farewise_core::{Location, NetworkSnapshot, NetworkStore, NetworkValidationError, Relation};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

type Loaded = Result<NetworkSnapshot, NetworkValidationError>;

#[fixture]
fn store() -> RefCell<MemoryNetworkStore> {
    RefCell::new(MemoryNetworkStore::default())
}

#[fixture]
fn loaded() -> RefCell<Option<Loaded>> {
    RefCell::new(None)
}

#[given("a store holding the five-location network")]
fn given_network(#[from(store)] store: &RefCell<MemoryNetworkStore>) {
    *store.borrow_mut() = MemoryNetworkStore::new(five_location_network());
}

#[given("a store holding a network with a duplicated location")]
fn given_duplicate(#[from(store)] store: &RefCell<MemoryNetworkStore>) {
    let mut network = five_location_network();
    network
        .locations
        .push(Location::new(location_id('C'), "C again"));
    *store.borrow_mut() = MemoryNetworkStore::new(network);
}

#[given("a store holding a network with an over-long relation")]
fn given_long_relation(#[from(store)] store: &RefCell<MemoryNetworkStore>) {
    let mut network = five_location_network();
    network.relations.push(Relation::new(
        2001,
        location_id('A'),
        location_id('E'),
        201,
        40_076,
        10.0,
    ));
    *store.borrow_mut() = MemoryNetworkStore::new(network);
}

#[when("I load and validate the network")]
fn load_and_validate(
    #[from(store)] store: &RefCell<MemoryNetworkStore>,
    #[from(loaded)] loaded: &RefCell<Option<Loaded>>,
) {
    let Ok(snapshot) = store.borrow().load_network();
    let outcome = snapshot.validate().map(|()| snapshot);
    *loaded.borrow_mut() = Some(outcome);
}

#[then("validation succeeds with 5 locations and 11 relations")]
fn then_valid(#[from(loaded)] loaded: &RefCell<Option<Loaded>>) {
    let borrow = loaded.borrow();
    let snapshot = borrow
        .as_ref()
        .expect("network should have been loaded")
        .as_ref()
        .expect("network should be valid");
    assert_eq!(snapshot.locations.len(), 5);
    assert_eq!(snapshot.relations.len(), 11);
}

#[then("validation fails with a duplicate location error")]
fn then_duplicate(#[from(loaded)] loaded: &RefCell<Option<Loaded>>) {
    let borrow = loaded.borrow();
    let error = borrow
        .as_ref()
        .and_then(|outcome| outcome.as_ref().err())
        .expect("expected a validation error");
    assert_eq!(
        error,
        &NetworkValidationError::DuplicateLocation {
            id: location_id('C')
        }
    );
}

#[then("validation fails with a distance error")]
fn then_distance(#[from(loaded)] loaded: &RefCell<Option<Loaded>>) {
    let borrow = loaded.borrow();
    let error = borrow
        .as_ref()
        .and_then(|outcome| outcome.as_ref().err())
        .expect("expected a validation error");
    assert_eq!(
        error,
        &NetworkValidationError::DistanceOutOfRange {
            id: 2001,
            distance_km: 40_076
        }
    );
}

#[scenario(path = "tests/features/network_store.feature", index = 0)]
fn valid_network_loads(store: RefCell<MemoryNetworkStore>, loaded: RefCell<Option<Loaded>>) {
    let _ = (store, loaded);
}

#[scenario(path = "tests/features/network_store.feature", index = 1)]
fn duplicate_location_rejected(
    store: RefCell<MemoryNetworkStore>,
    loaded: RefCell<Option<Loaded>>,
) {
    let _ = (store, loaded);
}

#[scenario(path = "tests/features/network_store.feature", index = 2)]
fn long_relation_rejected(store: RefCell<MemoryNetworkStore>, loaded: RefCell<Option<Loaded>>) {
    let _ = (store, loaded);
}
