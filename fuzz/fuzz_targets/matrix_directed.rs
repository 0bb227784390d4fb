#![no_main]

use libfuzzer_sys::fuzz_target;

use sgl::{
    core::Config,
    graph::MatrixGraph,
    infra::{arbitrary::MutOpsSeq, testing::check_matrix_consistency},
};

fuzz_target!(|ops: MutOpsSeq<i8>| {
    let mut graph = MatrixGraph::new(Config::DIRECTED);

    for op in ops {
        let _ = op.apply(&mut graph);
        check_matrix_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
