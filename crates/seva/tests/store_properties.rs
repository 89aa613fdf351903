//! Behavior of the donation store across operations and restarts.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use seva::{
    sample_donations, Category, DonationDraft, DonationQuery, DonationRecord, DonationStore, Error,
    InitOutcome, MemoryBlobStore, NgoIdentity, SqliteBlobStore, Status, Urgency,
};

fn health_first() -> NgoIdentity {
    NgoIdentity {
        id: 3,
        name: "Health First Organization".to_string(),
        phone: "+91 9876543212".to_string(),
        email: Some("contact@healthfirst.org".to_string()),
    }
}

fn blankets(id: i64) -> DonationRecord {
    let draft = DonationDraft {
        title: "Blankets".to_string(),
        description: "Wool blankets for the night shelter".to_string(),
        category: Category::ClothingAndTextiles,
        quantity: "40 blankets".to_string(),
        urgency: Urgency::High,
        location: "Chennai, Tamil Nadu".to_string(),
        contact_info: "+91 9876543212".to_string(),
    };
    let posted_at = Utc.with_ymd_and_hms(2025, 1, 20, 9, 30, 0).unwrap();
    DonationRecord::from_draft(draft, &health_first(), id, posted_at)
}

fn ids(records: &[DonationRecord]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}

/// One store mutation, with ids drawn from a range that overlaps the samples.
#[derive(Debug, Clone)]
enum Op {
    Add(i64),
    Update(i64, String),
    Remove(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1i64..12).prop_map(Op::Add),
        (1i64..12, "[a-z0-9 ]{1,12}").prop_map(|(id, quantity)| Op::Update(id, quantity)),
        (1i64..12).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn mutations_match_a_plain_vector(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = DonationStore::open(MemoryBlobStore::new()).unwrap();
        let mut model = sample_donations();

        for op in ops {
            match op {
                Op::Add(id) => {
                    let result = store.add(blankets(id));
                    if model.iter().any(|record| record.id == id) {
                        prop_assert!(result.unwrap_err().is_duplicate_id());
                    } else {
                        prop_assert!(result.is_ok());
                        model.push(blankets(id));
                    }
                }
                Op::Update(id, quantity) => {
                    let mut replacement = blankets(id);
                    replacement.quantity = quantity;
                    let result = store.update(replacement.clone());
                    match model.iter_mut().find(|record| record.id == id) {
                        Some(slot) => {
                            prop_assert!(result.is_ok());
                            *slot = replacement;
                        }
                        None => prop_assert!(result.unwrap_err().is_not_found()),
                    }
                }
                Op::Remove(id) => {
                    let result = store.remove(id);
                    match model.iter().position(|record| record.id == id) {
                        Some(index) => {
                            let expected = model.remove(index);
                            prop_assert_eq!(result.unwrap(), expected);
                        }
                        None => prop_assert!(result.unwrap_err().is_not_found()),
                    }
                }
            }
            prop_assert_eq!(store.list(), model.as_slice());
        }

        let saved: Vec<DonationRecord> =
            serde_json::from_str(store.backend().raw("sevaDonations").unwrap()).unwrap();
        prop_assert_eq!(saved, model);
    }
}

#[test]
fn removing_twice_matches_removing_once() {
    let mut once = DonationStore::open(MemoryBlobStore::new()).unwrap();
    let mut twice = DonationStore::open(MemoryBlobStore::new()).unwrap();

    once.remove(2).unwrap();
    twice.remove(2).unwrap();
    let second = twice.remove(2);

    assert!(matches!(second, Err(Error::NotFound { id: 2 })));
    assert_eq!(once.list(), twice.list());
    assert!(!twice.is_dirty());
}

#[test]
fn collection_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("donations.db");

    let expected = {
        let backend = SqliteBlobStore::open(&db_path).unwrap();
        let mut store = DonationStore::open(backend).unwrap();
        store.add(blankets(10)).unwrap();
        store.set_status(1, Status::Completed).unwrap();
        store.remove(4).unwrap();
        store.list().to_vec()
    };

    let backend = SqliteBlobStore::open(&db_path).unwrap();
    let mut reloaded = DonationStore::new(backend);
    assert_eq!(reloaded.initialize().unwrap(), InitOutcome::Loaded(5));
    assert_eq!(reloaded.list(), expected.as_slice());
}

#[test]
fn ids_stay_unique() {
    let mut store = DonationStore::open(MemoryBlobStore::new()).unwrap();

    store.add(blankets(10)).unwrap();
    let err = store.add(blankets(10)).unwrap_err();
    assert!(err.is_duplicate_id());
    let err = store.add(blankets(1)).unwrap_err();
    assert!(err.is_duplicate_id());

    store.remove(10).unwrap();
    store.add(blankets(10)).unwrap();

    let unique: HashSet<i64> = ids(store.list()).into_iter().collect();
    assert_eq!(unique.len(), store.len());
    assert_eq!(store.len(), 6);
}

#[test]
fn search_for_books_finds_one_request() {
    let store = DonationStore::open(MemoryBlobStore::new()).unwrap();
    let found = store.query(&DonationQuery::donor_view("books"));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Educational Books and Supplies");
}

#[test]
fn seeding_twice_gives_the_same_samples() {
    let mut backend = MemoryBlobStore::new();

    let first = {
        let mut store = DonationStore::new(&mut backend);
        assert_eq!(store.initialize().unwrap(), InitOutcome::Seeded);
        assert_eq!(store.initialize().unwrap(), InitOutcome::AlreadyInitialized);
        store.list().to_vec()
    };

    let mut store = DonationStore::new(&mut backend);
    assert_eq!(store.initialize().unwrap(), InitOutcome::Loaded(5));

    assert_eq!(store.list(), first.as_slice());
    assert_eq!(first, sample_donations());
}

#[test]
fn completed_request_leaves_donor_listing() {
    let mut store = DonationStore::open(MemoryBlobStore::new()).unwrap();
    store.add(blankets(10)).unwrap();
    assert!(ids(&store.query(&DonationQuery::donor_view(""))).contains(&10));

    let mut completed = blankets(10);
    completed.status = Status::Completed;
    store.update(completed).unwrap();

    let visible = ids(&store.query(&DonationQuery::donor_view("")));
    assert!(!visible.contains(&10));
    assert_eq!(visible, vec![1, 2, 3, 4, 5]);

    let dashboard = ids(&store.query(&DonationQuery::ngo_view(3)));
    assert_eq!(dashboard, vec![3, 10]);
}

#[test]
fn failed_write_is_retried_by_flush() {
    let mut store = DonationStore::open(MemoryBlobStore::new()).unwrap();

    store.backend_mut().set_fail_writes(true);
    let err = store.add(blankets(10)).unwrap_err();
    assert!(err.is_persistence());
    assert!(store.get(10).is_some());
    assert!(store.is_dirty());

    store.backend_mut().set_fail_writes(false);
    store.flush().unwrap();
    assert!(!store.is_dirty());

    let saved: Vec<DonationRecord> =
        serde_json::from_str(store.backend().raw("sevaDonations").unwrap()).unwrap();
    assert_eq!(saved, store.list());
}
