//! Graph engines.
//!
//! Both engines implement [`LabelGraph`] and behave identically. They differ
//! only in the representation of edges and thus in the cost of operations.

pub mod list;
pub mod matrix;

use std::fmt;

#[doc(inline)]
pub use self::{list::ListGraph, matrix::MatrixGraph};

use crate::core::LabelGraph;

/// Writes the human-readable dump of a graph used by its `Display`
/// implementation.
pub(crate) fn write_dump<T, G>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: PartialEq + Clone + fmt::Display,
    G: LabelGraph<T>,
{
    writeln!(f, "Number of vertices: {}", graph.vertex_count())?;
    writeln!(f, "Number of edges: {}", graph.edge_count())?;

    let vertices = graph.vertices();
    if vertices.is_empty() {
        return writeln!(f, "Empty graph");
    }

    let arrow = if graph.is_directed() { "->" } else { "--" };
    let edges = graph.edges();

    for vertex in vertices.iter() {
        writeln!(f)?;
        writeln!(f, "Vertex: {vertex}")?;

        let mut any = false;
        for (src, dst) in edges.iter().filter(|(src, _)| src == vertex) {
            writeln!(f, "{src} {arrow} {dst}")?;
            any = true;
        }

        if !any {
            writeln!(f, "No edges")?;
        }
    }

    Ok(())
}

#[cfg(test)]
pub mod tests {
    use assert_matches::assert_matches;

    use crate::{
        core::{Error, LabelGraph},
        infra::testing::check_consistency,
    };

    pub fn init_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    fn with_vertices<G: LabelGraph<i32>>(create: fn() -> G, vertices: &[i32]) -> G {
        let mut graph = create();
        for &v in vertices {
            graph.add_vertex(v).unwrap();
        }
        graph
    }

    pub fn test_contract<G: LabelGraph<i32>>(create: fn() -> G) {
        init_logger();
        let mut graph = create();

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_matches!(graph.has_edge(&1, &2), Err(Error::VertexNotFound));
        assert_matches!(graph.delete_vertex(&1), Err(Error::VertexNotFound));
        assert_matches!(graph.vertex_in_degree(&1), Err(Error::VertexNotFound));
        assert_matches!(graph.vertex_neighborhood(&1, false), Err(Error::VertexNotFound));

        for v in [42, 21, 84] {
            graph.add_vertex(v).unwrap();
        }
        assert_matches!(graph.add_vertex(42), Err(Error::DuplicateVertex));
        assert_eq!(graph.vertices(), vec![42, 21, 84]);
        assert_eq!(graph.order(), 3);

        graph.add_edge(&21, &42).unwrap();
        assert_matches!(graph.add_edge(&21, &42), Err(Error::DuplicateEdge));
        if graph.is_directed() {
            assert_eq!(graph.has_edge(&42, &21), Ok(false));
            graph.add_edge(&42, &21).unwrap();
        } else {
            assert_eq!(graph.has_edge(&42, &21), Ok(true));
            assert_matches!(graph.add_edge(&42, &21), Err(Error::DuplicateEdge));
        }
        graph.add_edge(&84, &84).unwrap();

        assert_matches!(graph.add_edge(&21, &7), Err(Error::VertexNotFound));
        assert_matches!(graph.add_edge(&7, &21), Err(Error::VertexNotFound));
        assert_matches!(graph.delete_edge(&21, &84), Err(Error::EdgeNotFound));
        assert_eq!(graph.contains_edge_any(&84, &84), Ok(true));
        assert_eq!(graph.contains_edge_any(&84, &21), Ok(false));

        assert_eq!(graph.edges().len(), graph.edge_count());
        assert_eq!(graph.size(), graph.edge_count());
        check_consistency(&graph).unwrap();

        graph.delete_vertex(&21).unwrap();
        assert_eq!(graph.vertices(), vec![42, 84]);
        assert_eq!(graph.edges(), vec![(84, 84)]);
        assert_matches!(graph.has_edge(&21, &42), Err(Error::VertexNotFound));
        assert_matches!(graph.delete_vertex(&21), Err(Error::VertexNotFound));
        check_consistency(&graph).unwrap();

        graph.delete_edge(&84, &84).unwrap();
        assert_matches!(graph.delete_edge(&84, &84), Err(Error::EdgeNotFound));

        graph.add_edge(&42, &84).unwrap();
        graph.clear_edges();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.has_edge(&42, &84), Ok(false));

        graph.clear();
        assert_eq!(graph.vertex_count(), 0);
        assert!(!graph.has_vertex(&42));

        // Reusable after clearing.
        graph.add_vertex(1).unwrap();
        graph.add_edge(&1, &1).unwrap();
        check_consistency(&graph).unwrap();
    }

    pub fn test_degrees_directed<G: LabelGraph<i32>>(create: fn() -> G) {
        let mut graph = with_vertices(create, &[42, 21, 84]);
        assert!(graph.is_directed());

        graph.add_edge(&21, &42).unwrap();
        graph.add_edge(&84, &42).unwrap();

        assert_eq!(graph.vertex_in_degree(&42), Ok(2));
        assert_eq!(graph.vertex_out_degree(&42), Ok(0));
        assert_eq!(graph.vertex_out_degree(&21), Ok(1));
        assert_eq!(graph.degree(&42), Ok(2));

        graph.add_edge(&42, &42).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(3));
        assert_eq!(graph.vertex_out_degree(&42), Ok(1));
        assert_eq!(graph.degree(&42), Ok(4));

        graph.delete_vertex(&84).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(2));

        graph.delete_edge(&42, &42).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(1));
        check_consistency(&graph).unwrap();
    }

    pub fn test_degrees_undirected<G: LabelGraph<i32>>(create: fn() -> G) {
        let mut graph = with_vertices(create, &[42, 21, 84]);
        assert!(!graph.is_directed());

        graph.add_edge(&21, &42).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(1));

        graph.add_edge(&42, &84).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(2));
        assert_eq!(graph.vertex_out_degree(&42), Ok(2));

        graph.add_edge(&42, &42).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(4));
        assert_eq!(graph.vertex_out_degree(&42), Ok(4));
        assert_eq!(graph.degree(&42), Ok(4));
        check_consistency(&graph).unwrap();

        graph.delete_vertex(&84).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(3));

        graph.delete_vertex(&21).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(2));
        check_consistency(&graph).unwrap();

        let mut graph = with_vertices(create, &[42]);
        graph.add_edge(&42, &42).unwrap();
        assert_eq!(graph.vertex_in_degree(&42), Ok(2));
        assert_eq!(graph.vertex_out_degree(&42), Ok(2));
        assert_eq!(graph.edge_count(), 1);
    }

    pub fn test_neighborhood_directed<G: LabelGraph<i32>>(create: fn() -> G) {
        let mut graph = with_vertices(create, &[42, 43, 44, 45, 46]);

        graph.add_edge(&43, &42).unwrap();
        graph.add_edge(&44, &42).unwrap();
        graph.add_edge(&42, &43).unwrap();
        graph.add_edge(&42, &44).unwrap();

        assert_eq!(graph.vertex_neighborhood(&42, false), Ok(vec![43, 44]));
        assert_eq!(graph.vertex_neighborhood(&42, true), Ok(vec![42, 43, 44]));
        assert_eq!(graph.vertex_neighborhood(&45, false), Ok(vec![]));
        assert_eq!(graph.vertex_neighborhood(&45, true), Ok(vec![45]));

        // Predecessors count as neighbors too.
        graph.add_edge(&46, &45).unwrap();
        assert_eq!(graph.vertex_neighborhood(&45, false), Ok(vec![46]));

        graph.add_edge(&46, &46).unwrap();
        assert_eq!(graph.vertex_neighborhood(&46, false), Ok(vec![45, 46]));
        assert_eq!(graph.vertex_neighborhood(&46, true), Ok(vec![45, 46]));
    }

    pub fn test_neighborhood_undirected<G: LabelGraph<i32>>(create: fn() -> G) {
        let mut graph = with_vertices(create, &[1, 2, 3, 4]);

        graph.add_edge(&3, &1).unwrap();
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&4, &4).unwrap();

        assert_eq!(graph.vertex_neighborhood(&1, false), Ok(vec![2, 3]));
        assert_eq!(graph.vertex_neighborhood(&1, true), Ok(vec![1, 2, 3]));
        assert_eq!(graph.vertex_neighborhood(&3, false), Ok(vec![1]));
        assert_eq!(graph.vertex_neighborhood(&4, false), Ok(vec![4]));

        graph.delete_vertex(&2).unwrap();
        assert_eq!(graph.vertex_neighborhood(&1, false), Ok(vec![3]));
    }

    pub fn test_source_sink<G: LabelGraph<i32>>(directed: fn() -> G, undirected: fn() -> G) {
        let mut graph = with_vertices(directed, &[1, 2, 3]);
        graph.add_edge(&1, &2).unwrap();

        assert_eq!(graph.vertex_is_source(&1), Ok(true));
        assert_eq!(graph.vertex_is_sink(&1), Ok(false));
        assert_eq!(graph.vertex_is_source(&2), Ok(false));
        assert_eq!(graph.vertex_is_sink(&2), Ok(true));
        assert_eq!(graph.vertex_is_source(&3), Ok(true));
        assert_eq!(graph.vertex_is_sink(&3), Ok(true));
        assert_matches!(graph.vertex_is_source(&4), Err(Error::VertexNotFound));

        graph.add_edge(&2, &2).unwrap();
        assert_eq!(graph.vertex_is_sink(&2), Ok(false));

        let graph = with_vertices(undirected, &[1]);
        assert_matches!(graph.vertex_is_source(&1), Err(Error::UndirectedGraph));
        assert_matches!(graph.vertex_is_sink(&1), Err(Error::UndirectedGraph));
        assert_matches!(graph.vertex_is_sink(&9), Err(Error::UndirectedGraph));
    }

    pub fn test_structural_equality<G: LabelGraph<i32>>(create: fn() -> G) {
        let mut lhs = with_vertices(create, &[1, 2, 3]);
        let mut rhs = with_vertices(create, &[3, 2, 1]);
        assert!(lhs.structural_eq(&rhs));

        lhs.add_edge(&1, &2).unwrap();
        lhs.add_edge(&3, &3).unwrap();
        assert!(!lhs.structural_eq(&rhs));

        rhs.add_edge(&3, &3).unwrap();
        rhs.add_edge(&1, &2).unwrap();
        assert!(lhs.structural_eq(&rhs));
        assert!(rhs.structural_eq(&lhs));

        rhs.delete_edge(&1, &2).unwrap();
        rhs.add_edge(&2, &3).unwrap();
        assert!(!lhs.structural_eq(&rhs));

        let other = with_vertices(create, &[1, 2, 4]);
        let base = with_vertices(create, &[1, 2, 3]);
        assert!(!base.structural_eq(&other));
    }
}
