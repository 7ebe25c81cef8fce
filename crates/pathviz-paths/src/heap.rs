//! Binary min-heap with O(1) membership checks, used as the A* open set.
//!
//! Positions are 1-based: the root is position 1 and the children of
//! position `i` are `2i` and `2i + 1`. Positions are mapped onto a plain
//! `Vec` so no sentinel slot is stored.
//!
//! A key change on an existing member is applied by rebuilding the whole
//! heap ([`reheapify`](PriorityQueue::reheapify)) rather than sifting the
//! single entry. That costs O(n log n) per change instead of O(log n);
//! the visible search behaviour is the same either way.

use std::collections::HashSet;
use std::hash::Hash;

use pathviz_core::Cost;

/// An entry that can live in a [`PriorityQueue`].
pub trait Keyed {
    type Id: Copy + Eq + Hash;

    /// Identity used for membership checks.
    fn id(&self) -> Self::Id;

    /// Ordering key; smaller comes out first.
    fn key(&self) -> Cost;

    fn set_key(&mut self, key: Cost);
}

/// Array-backed binary min-heap ordered by [`Keyed::key`].
///
/// Entries with equal keys keep their relative physical order through
/// [`reheapify`](Self::reheapify), so replays are deterministic.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Keyed> {
    heap: Vec<T>,
    members: HashSet<T::Id>,
}

impl<T: Keyed> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether an entry with `id` is queued.
    #[inline]
    pub fn contains(&self, id: T::Id) -> bool {
        self.members.contains(&id)
    }

    /// The entry with the smallest key.
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Entries in physical heap order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Add `entry` and sift it up past every parent with a strictly larger
    /// key.
    ///
    /// The caller must not insert an id that is already queued; use
    /// [`update`](Self::update) instead.
    pub fn insert(&mut self, entry: T) {
        debug_assert!(!self.contains(entry.id()), "duplicate heap entry");
        self.members.insert(entry.id());
        self.heap.push(entry);
        self.sift_up(self.heap.len());
    }

    /// Remove and return the entry with the smallest key.
    pub fn extract_min(&mut self) -> Option<T> {
        let min = match self.heap.len() {
            0 => return None,
            1 => self.heap.pop()?,
            _ => {
                // The last entry takes the root's place.
                let min = self.heap.swap_remove(0);
                self.sift_down(1);
                min
            }
        };
        self.members.remove(&min.id());
        Some(min)
    }

    /// Set the key of the entry with `id` and restore heap order.
    /// Returns `false` if `id` is not queued.
    pub fn update(&mut self, id: T::Id, key: Cost) -> bool {
        let Some(entry) = self.heap.iter_mut().find(|e| e.id() == id) else {
            return false;
        };
        entry.set_key(key);
        self.reheapify();
        true
    }

    /// Remove the entry with `id`, filling its slot with the last entry.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        let i = self.heap.iter().position(|e| e.id() == id)?;
        let last = self.heap.len() - 1;
        let entry = self.heap.swap_remove(i);
        if i != last {
            self.reheapify();
        }
        self.members.remove(&id);
        Some(entry)
    }

    /// Rebuild the heap by re-inserting every entry in its current physical
    /// order. A heap that is already ordered comes out unchanged.
    pub fn reheapify(&mut self) {
        let entries = std::mem::take(&mut self.heap);
        self.heap.reserve(entries.len());
        for entry in entries {
            self.heap.push(entry);
            self.sift_up(self.heap.len());
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.members.clear();
    }

    /// Whether every parent key is ≤ the keys of its children.
    pub fn is_heap_ordered(&self) -> bool {
        (2..=self.heap.len()).all(|pos| self.key_at(pos / 2) <= self.key_at(pos))
    }

    // -----------------------------------------------------------------------
    // 1-based position helpers
    // -----------------------------------------------------------------------

    #[inline]
    fn key_at(&self, pos: usize) -> Cost {
        self.heap[pos - 1].key()
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a - 1, b - 1);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.key_at(parent) <= self.key_at(pos) {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = pos * 2;
            if left > len {
                break;
            }
            let right = left + 1;
            // A missing right child counts as larger; the left child wins ties.
            let child = if right <= len && self.key_at(right) < self.key_at(left) {
                right
            } else {
                left
            };
            if self.key_at(pos) <= self.key_at(child) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}
