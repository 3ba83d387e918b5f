use std::{fmt, hash::Hash};

use rustc_hash::FxHashMap;

use super::HeapOrder;

/// Min-priority queue holding every item at most once, with support for
/// lowering the priority of a queued item.
///
/// Besides the heap itself, the queue maintains a table from items to their
/// current heap slots. The table is kept in sync on every swap, so an item can
/// be found in _O(1)_ and its priority decreased in _O(log n)_.
#[derive(Clone)]
pub struct IndexedPriorityQueue<T, P> {
    heap: Vec<(T, P)>,
    slots: FxHashMap<T, usize>,
}

impl<T, P> IndexedPriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|(item, priority)| (item, priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }
}

impl<T, P> IndexedPriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
{
    /// Inserts the item if it is not queued yet and returns `true`.
    ///
    /// If the item is already queued, its priority is lowered to `priority`
    /// when that is strictly less than the current one (see
    /// [`decrease`](IndexedPriorityQueue::decrease)) and `false` is returned.
    pub fn push(&mut self, item: T, priority: P) -> bool {
        if let Some(&slot) = self.slots.get(&item) {
            self.decrease_slot(slot, priority);
            return false;
        }

        let slot = self.heap.len();
        self.slots.insert(item.clone(), slot);
        self.heap.push((item, priority));
        self.bubble_up(slot);

        true
    }

    /// Lowers the priority of a queued item.
    ///
    /// Returns `true` if the item is queued and `priority` is strictly less
    /// than its current priority. Otherwise the queue is left untouched.
    pub fn decrease(&mut self, item: &T, priority: P) -> bool {
        match self.slots.get(item) {
            Some(&slot) => self.decrease_slot(slot, priority),
            None => false,
        }
    }

    /// Removes the item with the minimum priority, or returns `None` if the
    /// queue is empty.
    pub fn pop(&mut self) -> Option<(T, P)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap_slots(0, last);

        let (item, priority) = self.heap.pop()?;
        self.slots.remove(&item);
        self.bubble_down(0);

        Some((item, priority))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Returns the current priority of a queued item.
    pub fn priority(&self, item: &T) -> Option<&P> {
        self.slots.get(item).map(|&slot| &self.heap[slot].1)
    }

    fn decrease_slot(&mut self, slot: usize, priority: P) -> bool {
        if priority < self.heap[slot].1 {
            self.heap[slot].1 = priority;
            self.bubble_up(slot);
            true
        } else {
            false
        }
    }
}

impl<T, P> HeapOrder for IndexedPriorityQueue<T, P>
where
    T: Eq + Hash,
    P: PartialOrd,
{
    fn slot_count(&self) -> usize {
        self.heap.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.heap[i].1 < self.heap[j].1
    }

    fn swap_slots(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);

        for slot in [i, j] {
            if let Some(entry) = self.slots.get_mut(&self.heap[slot].0) {
                *entry = slot;
            }
        }
    }
}

impl<T, P> Default for IndexedPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for IndexedPriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap.iter()).finish()
    }
}
