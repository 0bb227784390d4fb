use thiserror::Error;

use crate::{
    common::matrix::implied_vertex_count,
    core::{marker::Direction, LabelGraph},
    graph::MatrixGraph,
    storage::MatrixStore,
};

/// Creates a complete graph on vertices `0..vertex_count` without self-loops.
pub fn create_complete<G: LabelGraph<usize>>(mut graph: G, vertex_count: usize) -> G {
    for v in 0..vertex_count {
        let _ = graph.add_vertex(v);
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v || (!graph.is_directed() && v > u) {
                continue;
            }

            let _ = graph.add_edge(&u, &v);
        }
    }

    graph
}

/// Creates a path `0 -> 1 -> ... -> vertex_count - 1`.
pub fn create_path<G: LabelGraph<usize>>(mut graph: G, vertex_count: usize) -> G {
    for v in 0..vertex_count {
        let _ = graph.add_vertex(v);
    }

    for v in 1..vertex_count {
        let _ = graph.add_edge(&(v - 1), &v);
    }

    graph
}

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertex at position {0} is listed more than once")]
    DuplicateVertexLabel(usize),
    #[error("edges count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("edge at position {0} is listed but not found by lookup")]
    EdgeLookupMismatch(usize),
    #[error("sum of directed degrees ({0}) is not equal to sum of degrees ({1})")]
    DirectedUndirectedDegreeMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
    #[error("store vertex count ({0}) is not equal to vertex count ({1})")]
    StoreVertexCountMismatch(usize, usize),
    #[error("packed buffer length ({0}) does not correspond to vertex count ({1})")]
    PackedLengthInvalid(usize, usize),
}

fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
where
    F: FnOnce(usize, usize) -> ConsistencyCheckError,
{
    if actual == expected {
        Ok(())
    } else {
        Err(error(actual, expected))
    }
}

/// Checks that the observable state of a graph is self-consistent.
pub fn check_consistency<T, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    T: PartialEq + Clone,
    G: LabelGraph<T> + ?Sized,
{
    let vertex_count = graph.vertex_count();
    let vertices = graph.vertices();

    cmp(
        vertices.len(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;

    let duplicate = (0..vertices.len()).find(|&i| vertices[..i].contains(&vertices[i]));
    if let Some(i) = duplicate {
        return Err(ConsistencyCheckError::DuplicateVertexLabel(i));
    }

    let edge_count = graph.edge_count();
    let edges = graph.edges();

    cmp(
        edges.len(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let invalid_edge = edges
        .iter()
        .position(|(src, dst)| graph.has_edge(src, dst) != Ok(true));

    if let Some(i) = invalid_edge {
        return Err(ConsistencyCheckError::EdgeLookupMismatch(i));
    }

    let deg_sum = vertices
        .iter()
        .map(|v| graph.degree(v).unwrap_or_default())
        .sum::<usize>();

    let out_deg_sum = vertices
        .iter()
        .map(|v| graph.degree_directed(v, Direction::Outgoing).unwrap_or_default())
        .sum::<usize>();

    let in_deg_sum = vertices
        .iter()
        .map(|v| graph.degree_directed(v, Direction::Incoming).unwrap_or_default())
        .sum::<usize>();

    if graph.is_directed() {
        cmp(
            out_deg_sum + in_deg_sum,
            deg_sum,
            ConsistencyCheckError::DirectedUndirectedDegreeMismatch,
        )?;

        fn handshaking_lemma_directed(
            dir: Direction,
        ) -> impl FnOnce(usize, usize) -> ConsistencyCheckError {
            move |actual, expected| {
                ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, dir)
            }
        }

        // https://en.wikipedia.org/wiki/Handshaking_lemma
        cmp(
            in_deg_sum,
            edge_count,
            handshaking_lemma_directed(Direction::Incoming),
        )?;

        cmp(
            out_deg_sum,
            edge_count,
            handshaking_lemma_directed(Direction::Outgoing),
        )?;
    } else {
        cmp(
            out_deg_sum + in_deg_sum,
            2 * deg_sum,
            ConsistencyCheckError::DirectedUndirectedDegreeMismatch,
        )?;

        // Holds for self-loops too, as they count twice.
        cmp(
            deg_sum,
            2 * edge_count,
            ConsistencyCheckError::HandshakingLemma,
        )?;
    }

    Ok(())
}

/// Checks the layout of the backing store of a matrix graph in addition to
/// [`check_consistency`].
pub fn check_matrix_consistency<T>(graph: &MatrixGraph<T>) -> Result<(), ConsistencyCheckError>
where
    T: PartialEq + Clone,
{
    check_consistency(graph)?;

    let store = graph.store();
    cmp(
        store.vertex_count(),
        graph.vertex_count(),
        ConsistencyCheckError::StoreVertexCountMismatch,
    )?;

    if let MatrixStore::Undirected(matrix) = store {
        if implied_vertex_count(matrix.packed_len()) != Some(graph.vertex_count()) {
            return Err(ConsistencyCheckError::PackedLengthInvalid(
                matrix.packed_len(),
                graph.vertex_count(),
            ));
        }
    }

    Ok(())
}
