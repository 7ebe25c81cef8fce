//! FIFO frontier for breadth-first search.

/// Dead slots at the front are dropped once there are at least this many
/// and they make up half of the buffer.
const COMPACT_AT: usize = 64;

/// A first-in first-out queue addressed by a pair of ever-increasing
/// logical indices.
///
/// `front` is the logical index of the next element to dequeue and
/// `back` (= `offset + slots.len()`) the index the next enqueue will get.
/// Dequeuing only advances `front`; consumed slots are compacted away in
/// bulk so neither operation shifts elements one at a time.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    slots: Vec<Option<T>>,
    offset: usize,
    front: usize,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            offset: 0,
            front: 0,
        }
    }

    /// Logical index of the next element to dequeue.
    #[inline]
    pub fn front(&self) -> usize {
        self.front
    }

    /// Logical index the next enqueued element will get.
    #[inline]
    pub fn back(&self) -> usize {
        self.offset + self.slots.len()
    }

    /// Append `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    /// Remove and return the earliest enqueued element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front - self.offset].take();
        self.front += 1;

        let dead = self.front - self.offset;
        if dead >= COMPACT_AT && dead * 2 >= self.slots.len() {
            self.slots.drain(..dead);
            self.offset = self.front;
        }
        value
    }

    /// The element [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.slots.get(self.front - self.offset)?.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.back() - self.front
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.back()
    }

    /// Pending elements, earliest first, without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[self.front - self.offset..].iter().flatten()
    }

    /// Drop every pending element. Indices keep increasing afterwards.
    pub fn clear(&mut self) {
        self.front = self.back();
        self.offset = self.front;
        self.slots.clear();
    }
}
