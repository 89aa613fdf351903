//! The donation record store.
//!
//! [`DonationStore`] owns the canonical ordered list of [`DonationRecord`]s and
//! mirrors it to a [`BlobStore`] after every mutation. The whole list is
//! serialized as one JSON array under a single key.
//!
//! The in-memory list is the source of truth. If a durable write fails, the
//! mutation still stands, the caller gets [`Error::Persistence`], and the store
//! stays dirty until a later write (or [`DonationStore::flush`]) succeeds.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::donation::{DonationRecord, Status};
use crate::error::{Error, Result};
use crate::query::DonationQuery;
use crate::seed::sample_donations;
use crate::storage::BlobStore;

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "sevaDonations";

/// Suffix of the keys a malformed blob is copied to before it is replaced.
const CORRUPT_SUFFIX: &str = ".corrupt";

type Listener = Box<dyn FnMut(&[DonationRecord])>;

/// What [`DonationStore::initialize`] found in durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A saved collection with this many records was loaded.
    Loaded(usize),
    /// Nothing was saved; the sample collection was written.
    Seeded,
    /// Nothing was saved and seeding is off; an empty collection was written.
    Empty,
    /// The saved blob could not be decoded. It was copied aside and the
    /// sample collection was written in its place.
    Recovered,
    /// `initialize` had already run for this store.
    AlreadyInitialized,
}

/// Ordered collection of donation records with a durable mirror.
pub struct DonationStore<B> {
    backend: B,
    key: String,
    seed_on_empty: bool,
    records: Vec<DonationRecord>,
    initialized: bool,
    dirty: bool,
    listeners: Vec<Listener>,
}

impl<B: fmt::Debug> fmt::Debug for DonationStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DonationStore")
            .field("backend", &self.backend)
            .field("key", &self.key)
            .field("seed_on_empty", &self.seed_on_empty)
            .field("records", &self.records.len())
            .field("initialized", &self.initialized)
            .field("dirty", &self.dirty)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<B: BlobStore> DonationStore<B> {
    /// Create an uninitialized store over `backend` using [`DEFAULT_KEY`].
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_KEY.to_string(),
            seed_on_empty: true,
            records: Vec::new(),
            initialized: false,
            dirty: false,
            listeners: Vec::new(),
        }
    }

    /// Create an uninitialized store configured from `[storage]` settings.
    #[must_use]
    pub fn from_config(backend: B, config: &StorageConfig) -> Self {
        Self::new(backend)
            .with_key(config.key.clone())
            .with_seed_on_empty(config.seed_on_empty)
    }

    /// Create a store and run [`initialize`](Self::initialize) on it.
    ///
    /// # Errors
    ///
    /// Returns an error if durable storage cannot be read or the initial
    /// write fails.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::new(backend);
        store.initialize()?;
        Ok(store)
    }

    /// Use a different storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Whether an empty backend gets the sample collection (default `true`).
    #[must_use]
    pub fn with_seed_on_empty(mut self, seed: bool) -> Self {
        self.seed_on_empty = seed;
        self
    }

    /// Load the saved collection, or seed one if nothing is saved.
    ///
    /// Runs once per store; later calls return
    /// [`InitOutcome::AlreadyInitialized`] and change nothing. Listeners are
    /// told about the resulting collection whichever way it was obtained.
    ///
    /// A saved collection is never replaced unless it fails to decode, in
    /// which case the raw blob is first copied to `<key>.corrupt` (or
    /// `<key>.corrupt.<n>` when earlier backups exist). A saved collection
    /// with repeated ids keeps the first record for each id and is written
    /// back without the rest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the backend cannot be read, if the
    /// malformed blob cannot be copied aside, or if the initial write fails.
    /// In the last case the store is initialized but dirty.
    pub fn initialize(&mut self) -> Result<InitOutcome> {
        if self.initialized {
            debug!(key = %self.key, "Donation store already initialized");
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let stored = self
            .backend
            .get(&self.key)
            .map_err(|err| Error::persistence_read(&self.key, err))?;

        let outcome = match stored {
            Some(blob) => match serde_json::from_str::<Vec<DonationRecord>>(&blob) {
                Ok(records) => {
                    let (records, dropped) = drop_repeated_ids(records);
                    let count = records.len();
                    self.records = records;
                    self.initialized = true;
                    info!(key = %self.key, count, "Loaded saved donations");
                    if dropped == 0 {
                        self.notify();
                        return Ok(InitOutcome::Loaded(count));
                    }
                    warn!(key = %self.key, dropped, "Dropped saved donations with repeated ids");
                    InitOutcome::Loaded(count)
                }
                Err(err) => {
                    warn!(key = %self.key, error = %err, "Saved donations are unreadable, reseeding");
                    let backup_key = self.free_backup_key()?;
                    self.backend
                        .put(&backup_key, &blob)
                        .map_err(|err| Error::persistence_write(&backup_key, err))?;
                    info!(key = %self.key, backup = %backup_key, "Kept unreadable donations");
                    self.records = sample_donations();
                    InitOutcome::Recovered
                }
            },
            None if self.seed_on_empty => {
                self.records = sample_donations();
                info!(key = %self.key, count = self.records.len(), "Seeded sample donations");
                InitOutcome::Seeded
            }
            None => {
                info!(key = %self.key, "Starting with an empty donation list");
                InitOutcome::Empty
            }
        };

        self.initialized = true;
        self.commit()?;
        Ok(outcome)
    }

    /// The full collection in insertion order.
    #[must_use]
    pub fn list(&self) -> &[DonationRecord] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&DonationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `query`, in collection order.
    #[must_use]
    pub fn query(&self, query: &DonationQuery) -> Vec<DonationRecord> {
        query.apply(&self.records)
    }

    /// Append a new record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] (collection unchanged) if the id is
    /// taken, or [`Error::Persistence`] (record kept) if the write fails.
    pub fn add(&mut self, record: DonationRecord) -> Result<()> {
        self.ensure_initialized()?;
        if self.position(record.id).is_some() {
            return Err(Error::DuplicateId { id: record.id });
        }

        debug!(id = record.id, ngo_id = record.ngo_id, "Adding donation");
        self.records.push(record);
        self.commit()
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// This is a whole-record replace; no fields are merged and the status
    /// transition rules are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] (collection unchanged) if no record has this
    /// id, or [`Error::Persistence`] (replacement kept) if the write fails.
    pub fn update(&mut self, record: DonationRecord) -> Result<()> {
        self.ensure_initialized()?;
        let index = self
            .position(record.id)
            .ok_or(Error::NotFound { id: record.id })?;

        debug!(id = record.id, "Updating donation");
        self.records[index] = record;
        self.commit()
    }

    /// Remove the record with this id and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] (collection unchanged) if no record has this
    /// id, or [`Error::Persistence`] (removal kept) if the write fails.
    pub fn remove(&mut self, id: i64) -> Result<DonationRecord> {
        self.ensure_initialized()?;
        let index = self.position(id).ok_or(Error::NotFound { id })?;

        debug!(id, "Removing donation");
        let removed = self.records.remove(index);
        self.commit()?;
        Ok(removed)
    }

    /// Move a record to a new status.
    ///
    /// Active records may become completed or cancelled. Completed and
    /// cancelled are final. Setting the current status again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`], [`Error::InvalidTransition`], or
    /// [`Error::Persistence`] (change kept) if the write fails.
    pub fn set_status(&mut self, id: i64, status: Status) -> Result<()> {
        self.ensure_initialized()?;
        let index = self.position(id).ok_or(Error::NotFound { id })?;
        let current = self.records[index].status;

        if current == status {
            return Ok(());
        }
        if !current.can_transition_to(status) {
            return Err(Error::InvalidTransition {
                id,
                from: current,
                to: status,
            });
        }

        debug!(id, from = %current, to = %status, "Changing donation status");
        self.records[index].status = status;
        self.commit()
    }

    /// Retry the durable write if an earlier one failed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the write fails again.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.persist()
    }

    /// Whether the durable mirror is behind the in-memory collection.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The storage key of the durable mirror.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register a callback run with the new collection after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[DonationRecord]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Borrow the durable backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the durable backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the store and hand back its backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Notify listeners of the new state, then write it out.
    fn commit(&mut self) -> Result<()> {
        self.notify();
        self.persist()
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.records);
        }
    }

    /// First of `<key>.corrupt`, `<key>.corrupt.1`, ... with nothing stored.
    fn free_backup_key(&self) -> Result<String> {
        let base = format!("{}{CORRUPT_SUFFIX}", self.key);
        let mut candidate = base.clone();
        let mut n = 1;
        while self
            .backend
            .get(&candidate)
            .map_err(|err| Error::persistence_read(&candidate, err))?
            .is_some()
        {
            candidate = format!("{base}.{n}");
            n += 1;
        }
        Ok(candidate)
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.records)?;
        match self.backend.put(&self.key, &blob) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                warn!(key = %self.key, error = %err, "Failed to persist donations");
                Err(Error::persistence_write(&self.key, err))
            }
        }
    }
}

/// Keep the first record for each id. Returns the kept records and how many
/// were dropped.
fn drop_repeated_ids(records: Vec<DonationRecord>) -> (Vec<DonationRecord>, usize) {
    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let kept: Vec<DonationRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.id))
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::donation::{Category, Urgency};
    use crate::storage::MemoryBlobStore;

    fn record(id: i64, title: &str, ngo_id: i64) -> DonationRecord {
        DonationRecord {
            id,
            title: title.to_string(),
            description: "Needed for winter".to_string(),
            category: Category::ClothingAndTextiles,
            quantity: "20".to_string(),
            urgency: Urgency::Medium,
            location: "Delhi, India".to_string(),
            contact_info: "ngo@example.org".to_string(),
            ngo_id,
            ngo_name: "Example NGO".to_string(),
            ngo_contact: "+91 9000000000".to_string(),
            posted_at: "2025-02-01T08:00:00Z".to_string(),
            status: Status::Active,
        }
    }

    fn seeded_store() -> DonationStore<MemoryBlobStore> {
        crate::logging::init_test_logging();
        DonationStore::open(MemoryBlobStore::new()).expect("failed to open store")
    }

    fn saved(store: &DonationStore<MemoryBlobStore>) -> Vec<DonationRecord> {
        let raw = store.backend().raw(store.key()).expect("nothing saved");
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_initialize_seeds_empty_backend() {
        let mut store = DonationStore::new(MemoryBlobStore::new());
        assert_eq!(store.initialize().unwrap(), InitOutcome::Seeded);

        assert_eq!(store.list(), sample_donations().as_slice());
        assert_eq!(saved(&store), sample_donations());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut store = seeded_store();
        let writes = store.backend().write_count();

        assert_eq!(store.initialize().unwrap(), InitOutcome::AlreadyInitialized);
        assert_eq!(store.len(), 5);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn test_initialize_loads_existing_without_writing() {
        let blob = serde_json::to_string(&vec![record(7, "Rice", 2)]).unwrap();
        let mut store = DonationStore::new(MemoryBlobStore::with_blob(DEFAULT_KEY, blob));

        assert_eq!(store.initialize().unwrap(), InitOutcome::Loaded(1));
        assert_eq!(store.list()[0].title, "Rice");
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_initialize_loads_empty_saved_list() {
        let mut store = DonationStore::new(MemoryBlobStore::with_blob(DEFAULT_KEY, "[]"));
        assert_eq!(store.initialize().unwrap(), InitOutcome::Loaded(0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_initialize_without_seeding() {
        let mut store = DonationStore::new(MemoryBlobStore::new()).with_seed_on_empty(false);
        assert_eq!(store.initialize().unwrap(), InitOutcome::Empty);
        assert!(store.is_empty());
        assert_eq!(store.backend().raw(DEFAULT_KEY), Some("[]"));
    }

    #[test]
    fn test_initialize_recovers_from_malformed_blob() {
        let mut store =
            DonationStore::new(MemoryBlobStore::with_blob(DEFAULT_KEY, "{not json"));

        assert_eq!(store.initialize().unwrap(), InitOutcome::Recovered);
        assert_eq!(store.list(), sample_donations().as_slice());
        assert_eq!(
            store.backend().raw("sevaDonations.corrupt"),
            Some("{not json")
        );
        assert_eq!(saved(&store), sample_donations());
    }

    #[test]
    fn test_initialize_keeps_first_of_repeated_ids() {
        let blob = serde_json::to_string(&vec![record(1, "A", 1), record(1, "B", 1)]).unwrap();
        let mut store = DonationStore::new(MemoryBlobStore::with_blob(DEFAULT_KEY, blob));

        assert_eq!(store.initialize().unwrap(), InitOutcome::Loaded(1));
        assert_eq!(store.get(1).unwrap().title, "A");
        assert_eq!(saved(&store).len(), 1);
        assert!(store.backend().raw("sevaDonations.corrupt").is_none());
    }

    #[test]
    fn test_initialize_repeated_id_keeps_user_records() {
        let mut records = sample_donations();
        records.push(record(77, "My real request", 7));
        let mut repeat = records[1].clone();
        repeat.title = "Second copy".to_string();
        records.push(repeat);
        let blob = serde_json::to_string(&records).unwrap();
        let mut store = DonationStore::new(MemoryBlobStore::with_blob(DEFAULT_KEY, blob));

        assert_eq!(store.initialize().unwrap(), InitOutcome::Loaded(6));
        assert_eq!(store.get(77).unwrap().title, "My real request");
        assert_eq!(store.get(2).unwrap().title, "Educational Books and Supplies");

        let persisted = saved(&store);
        assert_eq!(persisted.len(), 6);
        assert!(persisted.iter().any(|d| d.id == 77));
    }

    #[test]
    fn test_initialize_keeps_earlier_backups() {
        let mut backend = MemoryBlobStore::with_blob(DEFAULT_KEY, "{second");
        backend.put("sevaDonations.corrupt", "{first").unwrap();
        let mut store = DonationStore::new(backend);

        assert_eq!(store.initialize().unwrap(), InitOutcome::Recovered);
        assert_eq!(store.backend().raw("sevaDonations.corrupt"), Some("{first"));
        assert_eq!(store.backend().raw("sevaDonations.corrupt.1"), Some("{second"));
    }

    #[test]
    fn test_initialize_read_failure() {
        let mut backend = MemoryBlobStore::new();
        backend.set_fail_reads(true);
        let mut store = DonationStore::new(backend);

        let err = store.initialize().unwrap_err();
        assert!(err.is_persistence());
        assert!(!store.is_initialized());
    }

    #[test]
    fn test_initialize_seed_write_failure_keeps_memory() {
        let mut backend = MemoryBlobStore::new();
        backend.set_fail_writes(true);
        let mut store = DonationStore::new(backend);

        let err = store.initialize().unwrap_err();
        assert!(err.is_persistence());
        assert!(store.is_initialized());
        assert!(store.is_dirty());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_custom_key() {
        let mut store = DonationStore::new(MemoryBlobStore::new()).with_key("other");
        store.initialize().unwrap();
        assert!(store.backend().raw("other").is_some());
        assert!(store.backend().raw(DEFAULT_KEY).is_none());
    }

    #[test]
    fn test_from_config() {
        let config = StorageConfig {
            key: "configured".to_string(),
            seed_on_empty: false,
            ..StorageConfig::default()
        };
        let mut store = DonationStore::from_config(MemoryBlobStore::new(), &config);
        assert_eq!(store.initialize().unwrap(), InitOutcome::Empty);
        assert_eq!(store.key(), "configured");
    }

    #[test]
    fn test_mutations_require_initialize() {
        let mut store = DonationStore::new(MemoryBlobStore::new());
        assert!(matches!(
            store.add(record(1, "A", 1)),
            Err(Error::NotInitialized)
        ));
        assert!(matches!(store.remove(1), Err(Error::NotInitialized)));
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut store = seeded_store();
        store.add(record(10, "Blankets", 3)).unwrap();

        assert_eq!(store.len(), 6);
        assert_eq!(store.list().last().unwrap().id, 10);
        assert_eq!(saved(&store).last().unwrap().title, "Blankets");
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = seeded_store();
        let err = store.add(record(1, "Duplicate", 9)).unwrap_err();

        assert!(err.is_duplicate_id());
        assert_eq!(store.len(), 5);
        assert_eq!(store.get(1).unwrap().title, "Winter Clothing for Children");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = seeded_store();
        let mut changed = store.get(3).unwrap().clone();
        changed.title = "Medical Kits".to_string();
        changed.status = Status::Completed;

        store.update(changed).unwrap();

        let ids: Vec<i64> = store.list().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.get(3).unwrap().title, "Medical Kits");
        assert_eq!(saved(&store)[2].status, Status::Completed);
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = seeded_store();
        let writes = store.backend().write_count();

        let err = store.update(record(99, "Ghost", 1)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.list(), sample_donations().as_slice());
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = seeded_store();
        let removed = store.remove(2).unwrap();

        assert_eq!(removed.id, 2);
        let ids: Vec<i64> = store.list().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
        assert_eq!(saved(&store).len(), 4);
    }

    #[test]
    fn test_remove_twice() {
        let mut store = seeded_store();
        store.remove(4).unwrap();
        let after_first = store.list().to_vec();

        assert!(store.remove(4).unwrap_err().is_not_found());
        assert_eq!(store.list(), after_first.as_slice());
    }

    #[test]
    fn test_set_status_transitions() {
        let mut store = seeded_store();

        store.set_status(1, Status::Completed).unwrap();
        assert_eq!(store.get(1).unwrap().status, Status::Completed);

        // no-op on same status
        store.set_status(1, Status::Completed).unwrap();

        let err = store.set_status(1, Status::Active).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition {
                id: 1,
                from: Status::Completed,
                to: Status::Active,
            }
        ));
        assert_eq!(store.get(1).unwrap().status, Status::Completed);

        store.set_status(2, Status::Cancelled).unwrap();
        assert!(store.set_status(2, Status::Completed).is_err());
        assert!(store.set_status(42, Status::Cancelled).unwrap_err().is_not_found());
    }

    #[test]
    fn test_write_failure_keeps_memory() {
        let seeded = seeded_store();
        let mut backend = seeded.backend().clone();
        backend.set_fail_writes(true);
        let mut store = DonationStore::new(backend);
        store.initialize().unwrap();

        let err = store.add(record(10, "Blankets", 3)).unwrap_err();
        assert!(err.is_persistence());
        assert!(store.is_dirty());
        assert!(store.get(10).is_some());
        assert_eq!(saved(&store).len(), 5);

        let mut backend = store.into_backend();
        backend.set_fail_writes(false);
        // reopen over the same data; the failed add never reached the backend
        let reopened = DonationStore::open(backend).unwrap();
        assert!(reopened.get(10).is_none());
    }

    #[test]
    fn test_flush_after_failure() {
        let mut store = seeded_store();
        store.flush().unwrap();

        let mut backend = store.into_backend();
        backend.set_fail_writes(true);
        let mut store = DonationStore::open(backend).unwrap();

        assert!(store.remove(1).is_err());
        assert!(store.is_dirty());
        assert!(store.flush().is_err());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_next_successful_write_clears_dirty() {
        let mut store = seeded_store();

        store.backend_mut().set_fail_writes(true);
        assert!(store.remove(1).is_err());
        assert!(store.is_dirty());

        store.backend_mut().set_fail_writes(false);
        store.add(record(10, "Blankets", 3)).unwrap();
        assert!(!store.is_dirty());

        let ids: Vec<i64> = saved(&store).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 10]);
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = DonationStore::new(MemoryBlobStore::new());
        let sink = Rc::clone(&seen);
        store.subscribe(move |records| sink.borrow_mut().push(records.len()));

        store.initialize().unwrap();
        store.add(record(10, "Blankets", 3)).unwrap();
        store.remove(1).unwrap();
        let _ = store.remove(1);

        assert_eq!(*seen.borrow(), vec![5, 6, 5]);
    }

    #[test]
    fn test_subscribers_see_loaded_collection() {
        let blob = serde_json::to_string(&sample_donations()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = DonationStore::new(MemoryBlobStore::with_blob(DEFAULT_KEY, blob));
        let sink = Rc::clone(&seen);
        store.subscribe(move |records| sink.borrow_mut().push(records.len()));

        assert_eq!(store.initialize().unwrap(), InitOutcome::Loaded(5));
        assert_eq!(store.initialize().unwrap(), InitOutcome::AlreadyInitialized);

        assert_eq!(*seen.borrow(), vec![5]);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_query_through_store() {
        let mut store = seeded_store();
        store.set_status(2, Status::Completed).unwrap();

        assert!(store.query(&DonationQuery::donor_view("books")).is_empty());
        assert_eq!(store.query(&DonationQuery::ngo_view(2)).len(), 1);
    }

    #[test]
    fn test_debug_output() {
        let store = seeded_store();
        let debug_str = format!("{store:?}");
        assert!(debug_str.contains("DonationStore"));
        assert!(debug_str.contains("sevaDonations"));
    }
}
