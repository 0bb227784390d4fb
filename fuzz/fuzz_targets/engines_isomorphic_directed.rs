#![no_main]

use libfuzzer_sys::fuzz_target;

use sgl::{
    core::{Config, LabelGraph},
    graph::{ListGraph, MatrixGraph},
    infra::arbitrary::MutOpsSeq,
};

fuzz_target!(|ops: MutOpsSeq<i8>| {
    let mut matrix = MatrixGraph::new(Config::DIRECTED);
    let mut list = ListGraph::new(Config::DIRECTED | Config::ADJACENCY_LIST);

    for op in ops {
        let matrix_result = op.clone().apply(&mut matrix);
        let list_result = op.apply(&mut list);

        if matrix_result != list_result {
            panic!("engines disagree on operation result: {matrix_result:?} vs {list_result:?}");
        }

        if matrix != list {
            panic!(
                "engines are not equal:\n  MatrixGraph: {:?}\n  ListGraph: {:?}",
                matrix.edges(),
                list.edges()
            );
        }
    }
});
