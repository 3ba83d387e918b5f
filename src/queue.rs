//! Binary min-heap [priority queues] used by the shortest paths solver.
//!
//! Two flavors are available:
//!
//! * [`PriorityQueue`] accepts any number of entries for the same item. An
//!   update of an item's priority is done by enqueuing a fresh entry; the
//!   consumer is responsible for ignoring the stale ones.
//! * [`IndexedPriorityQueue`] keeps every item at most once together with a
//!   lookup table from items to heap slots, which allows lowering the priority
//!   of a queued item in place.
//!
//! Both are min-queues: the entry with the lowest priority is removed first.
//! Priorities only need to be [`PartialOrd`], so floating point numbers can be
//! used directly. Ties are broken by the structure of the heap, not by
//! insertion order.
//!
//! [priority queues]: https://en.wikipedia.org/wiki/Priority_queue
//!
//! # Examples
//!
//! ```
//! use minpath::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//!
//! queue.enqueue("X", 5);
//! queue.enqueue("Y", 1);
//! queue.enqueue("Z", 3);
//!
//! assert_eq!(queue.dequeue(), Some("Y"));
//! assert_eq!(queue.dequeue(), Some("Z"));
//! assert_eq!(queue.dequeue(), Some("X"));
//! assert_eq!(queue.dequeue(), None);
//! ```

mod binary_heap;
mod indexed;

pub use binary_heap::PriorityQueue;
pub use indexed::IndexedPriorityQueue;

/// Array-backed binary heap ordering shared by the queues.
///
/// Implementors provide the comparison and the swap of two slots, the sifting
/// procedures are the same for both queues. Slot `i` has its parent at
/// `(i - 1) / 2` and children at `2i + 1` and `2i + 2`.
trait HeapOrder {
    fn slot_count(&self) -> usize;

    /// Returns `true` if the priority in slot `i` is strictly less than the
    /// priority in slot `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap_slots(&mut self, i: usize, j: usize);

    /// Moves the element in `index` towards the root while it is strictly
    /// less than its parent. Returns the final slot.
    fn bubble_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;

            if self.less(index, parent) {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }

        index
    }

    /// Moves the element in `index` towards the leaves while one of its
    /// children is strictly less. Returns the final slot.
    fn bubble_down(&mut self, mut index: usize) -> usize {
        let len = self.slot_count();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut swap = index;

            if left < len && self.less(left, swap) {
                swap = left;
            }

            // Compared against the left child if that one was selected,
            // otherwise against the current element.
            if right < len && self.less(right, swap) {
                swap = right;
            }

            if swap == index {
                break;
            }

            self.swap_slots(index, swap);
            index = swap;
        }

        index
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dequeue_non_decreasing(priorities in proptest::collection::vec(any::<i32>(), 0..256)) {
            let mut queue = PriorityQueue::new();

            for (item, priority) in priorities.iter().enumerate() {
                queue.enqueue(item, *priority);
            }

            let mut prev = None;
            while let Some((_, priority)) = queue.dequeue_entry() {
                if let Some(prev) = prev {
                    prop_assert!(prev <= priority);
                }
                prev = Some(priority);
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_size_after_enqueue_dequeue(priorities in proptest::collection::vec(any::<u16>(), 0..256), dequeues: usize) {
            let mut queue = PriorityQueue::new();

            for (item, priority) in priorities.iter().enumerate() {
                queue.enqueue(item, *priority);
            }

            let k = priorities.len();
            let j = if k == 0 { 0 } else { dequeues % (k + 1) };

            for _ in 0..j {
                prop_assert!(queue.dequeue().is_some());
            }

            prop_assert_eq!(queue.size(), k - j);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_indexed_matches_lazy(ops in proptest::collection::vec((0u8..32, any::<u16>()), 0..256)) {
            let mut lazy = PriorityQueue::new();
            let mut indexed = IndexedPriorityQueue::new();
            let mut best = std::collections::HashMap::new();

            for (item, priority) in ops {
                lazy.enqueue(item, priority);
                indexed.push(item, priority);
                best.entry(item)
                    .and_modify(|p: &mut u16| *p = (*p).min(priority))
                    .or_insert(priority);
            }

            prop_assert_eq!(indexed.len(), best.len());

            // The first time an item leaves the lazy queue, it carries its
            // lowest priority, the same one the indexed queue holds.
            let mut seen = std::collections::HashSet::new();
            let mut lazy_order = Vec::new();
            while let Some((item, priority)) = lazy.dequeue_entry() {
                if seen.insert(item) {
                    lazy_order.push(priority);
                }
            }

            let mut indexed_order = Vec::new();
            while let Some((item, priority)) = indexed.pop() {
                prop_assert_eq!(Some(&priority), best.get(&item));
                indexed_order.push(priority);
            }

            prop_assert_eq!(lazy_order, indexed_order);
        }
    }
}
