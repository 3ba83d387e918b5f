#![no_main]

use libfuzzer_sys::fuzz_target;

use minpath::{
    infra::{arbitrary::MutOpsSeq, testing::check_shortest_paths},
    shortest_paths::{QueueKind, ShortestPaths},
    Graph,
};

fuzz_target!(|input: (MutOpsSeq<u16>, u8)| {
    let (ops, source) = input;
    let mut graph = Graph::new();

    // Widened so that no path sum overflows.
    for op in ops {
        op.map_weight(u32::from).apply(&mut graph);
    }

    let lazy = ShortestPaths::on(&graph).using(QueueKind::Lazy).run(&source);
    let decrease_key = ShortestPaths::on(&graph)
        .using(QueueKind::DecreaseKey)
        .run(&source);

    match (lazy, decrease_key) {
        (Ok(lazy), Ok(decrease_key)) => {
            check_shortest_paths(&graph, &lazy)
                .as_ref()
                .map_err(ToString::to_string)
                .unwrap();

            for v in graph.vertices() {
                assert_eq!(lazy.dist(v), decrease_key.dist(v));
            }
        }
        (Err(lazy), Err(decrease_key)) => {
            assert!(!graph.contains_vertex(&source));
            assert_eq!(lazy, decrease_key);
        }
        (lazy, decrease_key) => panic!("strategies disagree: {lazy:?} vs {decrease_key:?}"),
    }
});
