mod common;

use std::{cmp::Reverse, collections::BinaryHeap};

use common::RANDOM_SEED;
use fastrand::Rng;
use minpath::{IndexedPriorityQueue, PriorityQueue};

fn main() {
    divan::main();
}

fn random_priorities(n: usize) -> Vec<u32> {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    (0..n).map(|_| rng.u32(..)).collect()
}

#[divan::bench(consts = [100, 1000, 10000])]
fn minpath_enqueue_dequeue<const N: usize>(bencher: divan::Bencher) {
    let priorities = random_priorities(N);

    bencher.bench(|| {
        let mut queue = PriorityQueue::with_capacity(N);

        for (item, priority) in priorities.iter().enumerate() {
            queue.enqueue(item, *priority);
        }

        while queue.dequeue().is_some() {}
    });
}

#[divan::bench(consts = [100, 1000, 10000])]
fn minpath_indexed_push_pop<const N: usize>(bencher: divan::Bencher) {
    let priorities = random_priorities(N);

    bencher.bench(|| {
        let mut queue = IndexedPriorityQueue::with_capacity(N);

        for (item, priority) in priorities.iter().enumerate() {
            queue.push(item, *priority);
        }

        while queue.pop().is_some() {}
    });
}

#[divan::bench(consts = [100, 1000, 10000])]
fn std_binary_heap<const N: usize>(bencher: divan::Bencher) {
    let priorities = random_priorities(N);

    bencher.bench(|| {
        let mut heap = BinaryHeap::with_capacity(N);

        for (item, priority) in priorities.iter().enumerate() {
            heap.push(Reverse((*priority, item)));
        }

        while heap.pop().is_some() {}
    });
}
