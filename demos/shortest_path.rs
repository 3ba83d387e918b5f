use minpath::{shortest_paths::ShortestPaths, Graph};

fn main() {
    let mut graph = Graph::new();

    for v in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(v);
    }

    graph
        .extend_with_edges([
            ("A", "B", 4u32),
            ("A", "C", 2),
            ("C", "D", 2),
            ("C", "E", 3),
            ("D", "B", 1),
            ("B", "E", 3),
        ])
        .unwrap();

    // Both queue strategies give the same answer, decrease-key keeps the queue
    // no larger than the vertex count.
    let shortest_paths = ShortestPaths::on(&graph)
        .decrease_key()
        .run(&"A")
        .unwrap();

    for v in graph.vertices() {
        match shortest_paths.path_to(v) {
            Some(path) => println!("{v}: {} via {}", shortest_paths[v], path.join(" - ")),
            None => println!("{v}: {} (unreachable)", shortest_paths[v]),
        }
    }
    // A: 0 via A
    // B: 4 via A - B
    // C: 2 via A - C
    // D: 4 via A - C - D
    // E: 5 via A - C - E
    // F: Infinity (unreachable)
}
