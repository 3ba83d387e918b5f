use std::fmt;

use super::HeapOrder;

#[derive(Clone)]
struct Entry<T, P> {
    item: T,
    priority: P,
}

/// Min-priority queue backed by a binary heap in a vector.
///
/// The queue does not deduplicate items. Enqueuing an item that is already
/// present adds a second entry for it; both are eventually dequeued. This is
/// how the shortest paths solver simulates the decrease-key operation: it
/// enqueues the improved entry and skips the outdated one when it comes out.
///
/// Enqueue and dequeue take _O(log n)_ time, [`size`](PriorityQueue::size)
/// is _O(1)_.
#[derive(Clone)]
pub struct PriorityQueue<T, P> {
    heap: Vec<Entry<T, P>>,
}

impl<T, P> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries, counting duplicates of the same item.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the entry with the minimum priority without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|entry| (&entry.item, &entry.priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Inserts a new entry. Always succeeds.
    pub fn enqueue(&mut self, item: T, priority: P) {
        self.heap.push(Entry { item, priority });
        self.bubble_up(self.heap.len() - 1);
    }

    /// Removes the item with the minimum priority, or returns `None` if the
    /// queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_entry().map(|(item, _)| item)
    }

    /// Removes the item with the minimum priority together with the priority,
    /// or returns `None` if the queue is empty.
    pub fn dequeue_entry(&mut self) -> Option<(T, P)> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);

        let Entry { item, priority } = self.heap.pop()?;
        self.bubble_down(0);

        Some((item, priority))
    }
}

impl<T, P: PartialOrd> HeapOrder for PriorityQueue<T, P> {
    fn slot_count(&self) -> usize {
        self.heap.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.heap[i].priority < self.heap[j].priority
    }

    fn swap_slots(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
    }
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.heap.iter().map(|entry| (&entry.item, &entry.priority)))
            .finish()
    }
}

impl<T, P: PartialOrd> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue(item, priority);
        }
    }
}

impl<T, P: PartialOrd> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
