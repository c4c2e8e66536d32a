use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::sequence::MappedSequence;
use crate::core::types::FileId;
use crate::parsing::ReadError;

/// Default number of file dictionaries kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

pub type SharedSequences = Arc<Vec<MappedSequence>>;

type Slot = Arc<Mutex<Option<SharedSequences>>>;

#[derive(Debug, Default)]
struct Slots {
    by_file: HashMap<FileId, Slot>,
    /// Insertion order, oldest first
    order: VecDeque<FileId>,
}

impl Slots {
    fn remove(&mut self, file_id: FileId) {
        self.by_file.remove(&file_id);
        self.order.retain(|id| *id != file_id);
    }
}

/// Bounded per-file cache of sequence dictionaries.
///
/// Each file id owns a slot guarded by its own mutex, so concurrent callers
/// for the same file wait on a single read instead of issuing their own.
/// A failed read drops its slot. After a successful read, the oldest idle
/// slots are dropped until at most `capacity` remain; slots that a caller
/// still holds are never dropped, so the count may briefly run over.
/// A capacity of 0 disables caching.
#[derive(Debug)]
pub struct SequenceCache {
    capacity: usize,
    slots: RwLock<Slots>,
}

impl SequenceCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: RwLock::new(Slots::default()),
        }
    }

    /// Cached dictionary for `file_id`, running `load` on a miss.
    ///
    /// # Errors
    ///
    /// Returns the error from `load`; nothing is cached in that case.
    pub fn get_or_load<F>(&self, file_id: FileId, load: F) -> Result<SharedSequences, ReadError>
    where
        F: FnOnce() -> Result<Vec<MappedSequence>, ReadError>,
    {
        if self.capacity == 0 {
            return load().map(Arc::new);
        }

        let slot = self.slot(file_id);
        let mut entry = slot.lock();
        if let Some(sequences) = entry.as_ref() {
            debug!(file_id, "Sequence cache hit");
            return Ok(Arc::clone(sequences));
        }

        debug!(file_id, "Sequence cache miss");
        match load() {
            Ok(sequences) => {
                let sequences = Arc::new(sequences);
                *entry = Some(Arc::clone(&sequences));
                drop(entry);
                self.evict_idle();
                Ok(sequences)
            }
            Err(e) => {
                drop(entry);
                self.discard(file_id, &slot);
                Err(e)
            }
        }
    }

    /// Number of files currently holding a slot
    pub fn len(&self) -> usize {
        self.slots.read().by_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, file_id: FileId) -> Slot {
        let existing = self.slots.read().by_file.get(&file_id).cloned();
        if let Some(slot) = existing {
            return slot;
        }

        let mut slots = self.slots.write();
        // Another caller may have inserted it between the two locks
        if let Some(slot) = slots.by_file.get(&file_id) {
            return Arc::clone(slot);
        }

        let slot: Slot = Arc::new(Mutex::new(None));
        slots.by_file.insert(file_id, Arc::clone(&slot));
        slots.order.push_back(file_id);
        slot
    }

    /// Drop a slot whose read failed, unless other callers are waiting on it.
    ///
    /// Slots are only cloned under the map lock, so the strong count cannot
    /// grow while the write lock is held.
    fn discard(&self, file_id: FileId, slot: &Slot) {
        let mut slots = self.slots.write();
        let unshared = slots
            .by_file
            .get(&file_id)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && Arc::strong_count(slot) == 2);
        if unshared {
            slots.remove(file_id);
        }
    }

    /// Drop the oldest slots no caller holds until the cache fits its capacity
    fn evict_idle(&self) {
        let mut slots = self.slots.write();
        while slots.by_file.len() > self.capacity {
            let idle = slots.order.iter().copied().find(|id| {
                slots
                    .by_file
                    .get(id)
                    .map_or(true, |slot| Arc::strong_count(slot) == 1)
            });
            let Some(oldest) = idle else {
                break;
            };
            slots.remove(oldest);
            warn!(file_id = oldest, capacity = self.capacity, "Evicted sequence cache entry");
        }
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
