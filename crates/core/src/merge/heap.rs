use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Min-heap over the currently revealed head record of each source.
///
/// Holds at most one entry per source at a time; a second push for the same
/// source is a programming error and panics. Equal keys are broken by
/// insertion order, so the merge output is deterministic across runs.
pub struct MergeHeap<K: Ord, T> {
    entries: BinaryHeap<Reverse<Entry<K, T>>>,
    occupied: Vec<bool>,
    next_seq: u64,
}

struct Entry<K, T> {
    key: K,
    seq: u64,
    source_id: usize,
    record: T,
}

impl<K: Ord, T> PartialEq for Entry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<K: Ord, T> Eq for Entry<K, T> {}

impl<K: Ord, T> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<K: Ord, T> MergeHeap<K, T> {
    pub fn new(num_sources: usize) -> Self {
        MergeHeap {
            entries: BinaryHeap::with_capacity(num_sources),
            occupied: vec![false; num_sources],
            next_seq: 0,
        }
    }

    /// Reveals `record` as the pending head of `source_id`.
    ///
    /// Panics if that source already has a pending entry.
    pub fn push(&mut self, source_id: usize, key: K, record: T) {
        assert!(
            !self.occupied[source_id],
            "source {} already has a pending record in the heap",
            source_id
        );
        self.occupied[source_id] = true;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Reverse(Entry {
            key,
            seq,
            source_id,
            record,
        }));
    }

    /// Removes the globally smallest revealed record, vacating its source's
    /// slot so that source may be refilled.
    pub fn pop_min(&mut self) -> Option<(usize, T)> {
        let Reverse(entry) = self.entries.pop()?;
        self.occupied[entry.source_id] = false;
        Some((entry.source_id, entry.record))
    }

    pub fn has_entry(&self, source_id: usize) -> bool {
        self.occupied[source_id]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
