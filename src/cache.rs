//! Evaluation cache keyed by position identity.
//!
//! Uses lockless hashing for thread-safe access from parallel search
//! workers. Entries are stored as atomic u64 pairs using XOR verification
//! to detect torn reads; torn or mismatched entries read as a clean miss.
//!
//! The cache is an optimization, never a correctness-bearing store: entries
//! may be silently dropped or overwritten at any time, and every consumer
//! must tolerate a miss.

use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

/// Probe/store capability for an evaluation cache.
///
/// Implementations are free to drop or overwrite entries; a probe after a
/// store is allowed to miss. [`NoCache`] satisfies the contract by always
/// missing.
pub trait EvalCache {
    /// Look up the score stored for a position key, if still present.
    fn probe(&self, key: u64) -> Option<i32>;

    /// Record the score for a position key, possibly evicting another entry.
    fn store(&self, key: u64, score: i32);
}

/// A cache that never hits. Useful for fresh, inspectable evaluation and
/// as the baseline in tests.
pub struct NoCache;

impl EvalCache for NoCache {
    fn probe(&self, _key: u64) -> Option<i32> {
        None
    }

    fn store(&self, _key: u64, _score: i32) {}
}

impl<C: EvalCache> EvalCache for std::sync::Arc<C> {
    fn probe(&self, key: u64) -> Option<i32> {
        (**self).probe(key)
    }

    fn store(&self, key: u64, score: i32) {
        (**self).store(key, score)
    }
}

// Packed entry: score (i16) in the low 16 bits plus an occupancy marker,
// so an all-zero slot is never a valid entry.
const OCCUPIED: u64 = 1 << 16;

fn pack_entry(score: i32) -> u64 {
    let clamped = score.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
    (clamped as u16 as u64) | OCCUPIED
}

fn unpack_entry(data: u64) -> i32 {
    (data & 0xFFFF) as u16 as i16 as i32
}

/// A single cache slot using lockless hashing.
///
/// Stores (key ^ data) and data separately. On read, the slot is valid only
/// if (stored_key_xor ^ data) equals the probe key; a torn read from a
/// concurrent write fails the check and reads as a miss.
struct Slot {
    key_xor: AtomicU64,
    data: AtomicU64,
}

impl Slot {
    fn new() -> Self {
        Slot {
            key_xor: AtomicU64::new(0),
            data: AtomicU64::new(0),
        }
    }

    fn store(&self, key: u64, packed: u64) {
        self.data.store(packed, Ordering::Relaxed);
        self.key_xor.store(key ^ packed, Ordering::Relaxed);
    }

    fn probe(&self, key: u64) -> Option<i32> {
        let key_xor = self.key_xor.load(Ordering::Relaxed);
        let data = self.data.load(Ordering::Relaxed);

        if data != 0 && key_xor ^ data == key {
            Some(unpack_entry(data))
        } else {
            None
        }
    }
}

/// Shared, fixed-size evaluation cache with always-replace slots.
///
/// Multiple threads can probe and store concurrently without locks; a
/// colliding store silently overwrites the previous occupant.
pub struct EvalTable {
    slots: Vec<Slot>,
    mask: usize,
}

impl EvalTable {
    /// Create a cache with the given size in megabytes (rounded down to a
    /// power-of-two slot count).
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Slot>();
        let mut num_slots = (size_mb * 1024 * 1024) / slot_size;

        num_slots = num_slots.next_power_of_two() / 2;
        if num_slots == 0 {
            num_slots = 1024;
        }

        let mut slots = Vec::with_capacity(num_slots);
        for _ in 0..num_slots {
            slots.push(Slot::new());
        }

        EvalTable {
            slots,
            mask: num_slots - 1,
        }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Clear all entries.
    pub fn clear(&self) {
        for slot in &self.slots {
            slot.key_xor.store(0, Ordering::Relaxed);
            slot.data.store(0, Ordering::Relaxed);
        }
    }
}

impl EvalCache for EvalTable {
    fn probe(&self, key: u64) -> Option<i32> {
        self.slots[self.index(key)].probe(key)
    }

    fn store(&self, key: u64, score: i32) {
        self.slots[self.index(key)].store(key, pack_entry(score));
    }
}
