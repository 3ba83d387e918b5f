use minpath::{IndexedPriorityQueue, PriorityQueue};

fn main() {
    let mut queue = PriorityQueue::new();

    queue.enqueue("X", 5);
    queue.enqueue("Y", 1);
    queue.enqueue("Z", 3);

    let order = std::iter::from_fn(|| queue.dequeue()).collect::<Vec<_>>();
    println!("{}", order.join(" "));
    // Y Z X

    let mut indexed = IndexedPriorityQueue::new();

    indexed.push("X", 5);
    indexed.push("Y", 1);
    indexed.push("Z", 3);

    // Lowering the priority moves the item ahead without a duplicate entry.
    indexed.decrease(&"X", 0);
    println!("{} items", indexed.len());
    // 3 items

    while let Some((item, priority)) = indexed.pop() {
        println!("{item} {priority}");
    }
    // X 0
    // Y 1
    // Z 3
}
