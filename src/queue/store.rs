//! Internal item store
//!
//! Ordered, mutable sequence of opaque payloads backing a queue: push to
//! tail, peek at head, remove head, full clear. Pure data structure; all
//! synchronisation lives in the owning queue.

use std::collections::VecDeque;

/// FIFO buffer of opaque payloads
#[derive(Debug)]
pub(crate) struct ItemStore<T> {
    items: VecDeque<T>,
}

impl<T> ItemStore<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the tail
    pub(crate) fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head item, if any
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the head item without removing it
    pub(crate) fn head(&self) -> Option<&T> {
        self.items.front()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop every item and release the backing allocation
    ///
    /// Used both for `clear()` and to make the store physically
    /// unavailable on close.
    pub(crate) fn release(&mut self) {
        self.items.clear();
        self.items.shrink_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_preserves_fifo_order() {
        let mut store = ItemStore::new();
        store.push("a");
        store.push("b");
        store.push("c");

        assert_eq!(store.pop(), Some("a"));
        assert_eq!(store.pop(), Some("b"));
        assert_eq!(store.pop(), Some("c"));
        assert_eq!(store.pop(), None);
    }

    #[test]
    fn test_head_does_not_remove() {
        let mut store = ItemStore::new();
        store.push(1);
        store.push(2);

        assert_eq!(store.head(), Some(&1));
        assert_eq!(store.head(), Some(&1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_release_empties_store() {
        let mut store = ItemStore::new();
        store.push("x");
        store.push("y");
        store.release();

        assert_eq!(store.len(), 0);
        assert_eq!(store.pop(), None);

        // Release on an already-empty store is a no-op
        store.release();
        assert_eq!(store.len(), 0);
    }
}
