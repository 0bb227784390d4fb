use std::fmt;

use fixedbitset::FixedBitSet;
use log::trace;

use crate::core::{marker::Direction, vertices::VertexSet, Config, Error, LabelGraph, Result};

/// Graph over an adjacency list.
///
/// Each vertex keeps the indices of its successors. An undirected edge is
/// stored in the lists of both endpoints, a self-loop only once. The
/// behavior is the same as of [`MatrixGraph`](super::MatrixGraph), including
/// the errors and degree conventions.
#[derive(Debug, Clone)]
pub struct ListGraph<T> {
    vertices: VertexSet<T>,
    adjacency: Vec<Vec<usize>>,
    n_edges: usize,
    config: Config,
}

impl<T> ListGraph<T> {
    pub fn new(config: Config) -> Self {
        Self::with_capacity(config, 0)
    }

    pub fn with_capacity(config: Config, vertex_count: usize) -> Self {
        Self {
            vertices: VertexSet::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            n_edges: 0,
            config,
        }
    }

    pub fn new_directed() -> Self {
        Self::new(Config::DIRECTED)
    }

    pub fn new_undirected() -> Self {
        Self::new(Config::UNDIRECTED)
    }

    fn contains(&self, src: usize, dst: usize) -> bool {
        self.adjacency[src].contains(&dst)
    }

    fn in_degree(&self, v: usize) -> usize {
        self.adjacency
            .iter()
            .filter(|neighbors| neighbors.contains(&v))
            .count()
    }
}

impl<T: PartialEq + Clone> ListGraph<T> {
    fn endpoints(&self, src: &T, dst: &T) -> Result<(usize, usize)> {
        Ok((self.vertices.index_of(src)?, self.vertices.index_of(dst)?))
    }

    /// Creates a graph with the same configuration containing only the given
    /// vertices and the edges between them. Vertices appear in the order of
    /// the filter.
    pub fn induced_subgraph(&self, filter: &[T]) -> Result<Self> {
        if !filter.iter().all(|label| self.vertices.exists(label)) {
            return Err(Error::SubgraphVertexAbsent);
        }

        let mut subgraph = Self::with_capacity(self.config, filter.len());
        for label in filter {
            subgraph.add_vertex(label.clone())?;
        }

        for (src, dst) in self.edges() {
            if subgraph.has_vertex(&src) && subgraph.has_vertex(&dst) {
                subgraph.add_edge(&src, &dst)?;
            }
        }

        Ok(subgraph)
    }
}

impl<T: PartialEq + Clone> LabelGraph<T> for ListGraph<T> {
    fn config(&self) -> Config {
        self.config
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn has_vertex(&self, label: &T) -> bool {
        self.vertices.exists(label)
    }

    fn has_edge(&self, src: &T, dst: &T) -> Result<bool> {
        let (src, dst) = self.endpoints(src, dst)?;
        Ok(self.contains(src, dst))
    }

    fn degree_directed(&self, label: &T, dir: Direction) -> Result<usize> {
        let v = self.vertices.index_of(label)?;

        let degree = if self.is_directed() {
            match dir {
                Direction::Outgoing => self.adjacency[v].len(),
                Direction::Incoming => self.in_degree(v),
            }
        } else {
            // Self-loop is stored once but counts twice.
            self.adjacency[v].len() + self.contains(v, v) as usize
        };

        Ok(degree)
    }

    fn vertex_neighborhood(&self, label: &T, closed: bool) -> Result<Vec<T>> {
        let v = self.vertices.index_of(label)?;

        let mut neighbors = FixedBitSet::with_capacity(self.vertices.len());
        neighbors.extend(self.adjacency[v].iter().copied());

        if self.is_directed() {
            for (other, successors) in self.adjacency.iter().enumerate() {
                if successors.contains(&v) {
                    neighbors.insert(other);
                }
            }
        }

        if closed {
            neighbors.insert(v);
        }

        Ok(neighbors
            .ones()
            .filter_map(|index| self.vertices.get(index).cloned())
            .collect())
    }

    fn vertices(&self) -> Vec<T> {
        self.vertices.as_slice().to_vec()
    }

    fn edges(&self) -> Vec<(T, T)> {
        let labels = self.vertices.as_slice();
        let directed = self.is_directed();

        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(src, successors)| {
                successors
                    .iter()
                    // Undirected edges are in both lists, take them from the
                    // endpoint with the greater index only.
                    .filter(move |&&dst| directed || dst <= src)
                    .map(move |&dst| (labels[src].clone(), labels[dst].clone()))
            })
            .collect()
    }

    fn add_vertex(&mut self, label: T) -> Result<()> {
        let index = self.vertices.insert(label)?;
        self.adjacency.push(Vec::new());

        trace!("added vertex at index {index}");
        Ok(())
    }

    fn delete_vertex(&mut self, label: &T) -> Result<()> {
        let index = self.vertices.index_of(label)?;

        let removed = if self.is_directed() {
            self.adjacency[index].len() + self.in_degree(index) - self.contains(index, index) as usize
        } else {
            self.adjacency[index].len()
        };

        self.adjacency.remove(index);
        self.vertices.remove_at(index);

        for successors in self.adjacency.iter_mut() {
            successors.retain(|&dst| dst != index);
            for dst in successors.iter_mut() {
                if *dst > index {
                    *dst -= 1;
                }
            }
        }

        self.n_edges -= removed;

        trace!(
            "deleted vertex at index {index} with {removed} incident edges, {} vertices left",
            self.vertices.len()
        );
        Ok(())
    }

    fn add_edge(&mut self, src: &T, dst: &T) -> Result<()> {
        let (src, dst) = self.endpoints(src, dst)?;

        if self.contains(src, dst) {
            return Err(Error::DuplicateEdge);
        }

        self.adjacency[src].push(dst);
        if !self.is_directed() && src != dst {
            self.adjacency[dst].push(src);
        }
        self.n_edges += 1;

        trace!("added edge {src} -> {dst}");
        Ok(())
    }

    fn delete_edge(&mut self, src: &T, dst: &T) -> Result<()> {
        let (src, dst) = self.endpoints(src, dst)?;

        if !self.contains(src, dst) {
            return Err(Error::EdgeNotFound);
        }

        self.adjacency[src].retain(|&other| other != dst);
        if !self.is_directed() {
            self.adjacency[dst].retain(|&other| other != src);
        }
        self.n_edges -= 1;

        trace!("deleted edge {src} -> {dst}");
        Ok(())
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
        self.n_edges = 0;
    }

    fn clear_edges(&mut self) {
        self.adjacency.iter_mut().for_each(Vec::clear);
        self.n_edges = 0;
    }
}

impl<T> Default for ListGraph<T> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<T, G> PartialEq<G> for ListGraph<T>
where
    T: PartialEq + Clone,
    G: LabelGraph<T>,
{
    fn eq(&self, other: &G) -> bool {
        self.structural_eq(other)
    }
}

impl<T: PartialEq + Clone + fmt::Display> fmt::Display for ListGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_dump(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::tests::*, graph::MatrixGraph, infra::testing::check_consistency};
    use assert_matches::assert_matches;

    fn directed() -> ListGraph<i32> {
        ListGraph::new(Config::DIRECTED | Config::ADJACENCY_LIST)
    }

    fn undirected() -> ListGraph<i32> {
        ListGraph::new(Config::UNDIRECTED | Config::ADJACENCY_LIST)
    }

    #[test]
    fn contract_directed() {
        test_contract(directed);
    }

    #[test]
    fn contract_undirected() {
        test_contract(undirected);
    }

    #[test]
    fn degrees_directed() {
        test_degrees_directed(directed);
    }

    #[test]
    fn degrees_undirected() {
        test_degrees_undirected(undirected);
    }

    #[test]
    fn neighborhood_directed() {
        test_neighborhood_directed(directed);
    }

    #[test]
    fn neighborhood_undirected() {
        test_neighborhood_undirected(undirected);
    }

    #[test]
    fn source_sink() {
        test_source_sink(directed, undirected);
    }

    #[test]
    fn structural_equality() {
        test_structural_equality(directed);
        test_structural_equality(undirected);
    }

    #[test]
    fn equal_to_matrix_graph() {
        let mut list = undirected();
        let mut matrix = MatrixGraph::new(Config::UNDIRECTED);

        for v in [1, 2, 3] {
            list.add_vertex(v).unwrap();
        }
        for v in [3, 1, 2] {
            matrix.add_vertex(v).unwrap();
        }

        list.add_edge(&1, &2).unwrap();
        list.add_edge(&3, &3).unwrap();
        matrix.add_edge(&3, &3).unwrap();
        matrix.add_edge(&2, &1).unwrap();

        assert_eq!(list, matrix);
        assert_eq!(matrix, list);

        matrix.delete_edge(&1, &2).unwrap();
        assert_ne!(list, matrix);
    }

    #[test]
    fn delete_vertex_counts_edges_once() {
        let mut graph = directed();
        for v in [1, 2, 3] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&1, &1).unwrap();
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&3, &1).unwrap();
        graph.add_edge(&2, &3).unwrap();

        graph.delete_vertex(&1).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), vec![(2, 3)]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn induced_subgraph() {
        let mut graph = undirected();
        for v in 1..=4 {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&2, &3).unwrap();
        graph.add_edge(&4, &4).unwrap();

        let subgraph = graph.induced_subgraph(&[2, 3, 4]).unwrap();

        assert_eq!(subgraph.vertices(), vec![2, 3, 4]);
        assert_eq!(subgraph.edge_count(), 2);
        assert_eq!(subgraph.has_edge(&3, &2), Ok(true));
        assert_matches!(graph.induced_subgraph(&[5]), Err(Error::SubgraphVertexAbsent));
    }

    #[test]
    fn display_undirected() {
        let mut graph = undirected();
        graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_edge(&1, &2).unwrap();

        let dump = graph.to_string();
        assert!(dump.contains("Number of edges: 1"));
        assert!(dump.contains("2 -- 1"));
    }
}
