use std::fmt;

use log::trace;

use crate::{
    core::{
        marker::Direction,
        vertices::VertexSet,
        Config, Error, LabelGraph, Result,
    },
    storage::MatrixStore,
};

/// Graph over an adjacency matrix.
///
/// Directed graphs are backed by a dense square matrix, undirected graphs by
/// a packed lower triangle with a single cell per unordered pair of
/// vertices. The backing store is selected from the configuration at
/// construction.
///
/// ```
/// use sgl::{core::{Config, Error, LabelGraph}, graph::MatrixGraph};
///
/// let mut graph = MatrixGraph::new(Config::UNDIRECTED);
/// graph.add_vertex(42)?;
/// graph.add_vertex(21)?;
/// graph.add_edge(&21, &42)?;
///
/// assert_eq!(graph.has_edge(&42, &21), Ok(true));
/// assert_eq!(graph.add_edge(&42, &21), Err(Error::DuplicateEdge));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatrixGraph<T> {
    vertices: VertexSet<T>,
    store: MatrixStore,
    config: Config,
}

impl<T> MatrixGraph<T> {
    pub fn new(config: Config) -> Self {
        Self::with_capacity(config, 0)
    }

    /// Creates a graph with space preallocated for `vertex_count` vertices.
    pub fn with_capacity(config: Config, vertex_count: usize) -> Self {
        Self {
            vertices: VertexSet::with_capacity(vertex_count),
            store: MatrixStore::new(config.is_directed(), vertex_count),
            config,
        }
    }

    pub fn new_directed() -> Self {
        Self::new(Config::DIRECTED)
    }

    pub fn new_undirected() -> Self {
        Self::new(Config::UNDIRECTED)
    }

    pub fn store(&self) -> &MatrixStore {
        &self.store
    }
}

impl<T: PartialEq + Clone> MatrixGraph<T> {
    fn endpoints(&self, src: &T, dst: &T) -> Result<(usize, usize)> {
        Ok((self.vertices.index_of(src)?, self.vertices.index_of(dst)?))
    }

    /// Creates a graph with the same configuration containing only the given
    /// vertices and the edges between them. Vertices appear in the order of
    /// the filter.
    pub fn induced_subgraph(&self, filter: &[T]) -> Result<Self> {
        let indices = filter
            .iter()
            .map(|label| {
                self.vertices
                    .index_of(label)
                    .map_err(|_| Error::SubgraphVertexAbsent)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut subgraph = Self::with_capacity(self.config, filter.len());
        for label in filter {
            subgraph.add_vertex(label.clone())?;
        }

        for (i, &src) in indices.iter().enumerate() {
            for (j, &dst) in indices.iter().enumerate() {
                if self.store.has_edge(src, dst) && !subgraph.store.has_edge(i, j) {
                    subgraph.store.add_edge(i, j);
                }
            }
        }

        Ok(subgraph)
    }
}

impl<T: PartialEq + Clone> LabelGraph<T> for MatrixGraph<T> {
    fn config(&self) -> Config {
        self.config
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    fn has_vertex(&self, label: &T) -> bool {
        self.vertices.exists(label)
    }

    fn has_edge(&self, src: &T, dst: &T) -> Result<bool> {
        let (src, dst) = self.endpoints(src, dst)?;
        Ok(self.store.has_edge(src, dst))
    }

    fn degree_directed(&self, label: &T, dir: Direction) -> Result<usize> {
        let index = self.vertices.index_of(label)?;
        Ok(self.store.degree_directed(index, dir))
    }

    fn vertex_neighborhood(&self, label: &T, closed: bool) -> Result<Vec<T>> {
        let index = self.vertices.index_of(label)?;

        let neighborhood = self
            .vertices
            .iter()
            .enumerate()
            .filter(|&(other, _)| (closed && other == index) || self.store.adjacent(index, other))
            .map(|(_, label)| label.clone())
            .collect();

        Ok(neighborhood)
    }

    fn vertices(&self) -> Vec<T> {
        self.vertices.as_slice().to_vec()
    }

    fn edges(&self) -> Vec<(T, T)> {
        let labels = self.vertices.as_slice();

        self.store
            .edges()
            .into_iter()
            .enumerate()
            .flat_map(|(row, cols)| {
                cols.into_iter()
                    .map(move |col| (labels[row].clone(), labels[col].clone()))
            })
            .collect()
    }

    fn add_vertex(&mut self, label: T) -> Result<()> {
        let index = self.vertices.insert(label)?;
        let store_index = self.store.add_vertex();
        debug_assert_eq!(index, store_index);

        trace!("added vertex at index {index}");
        Ok(())
    }

    fn delete_vertex(&mut self, label: &T) -> Result<()> {
        let index = self.vertices.index_of(label)?;

        self.store.delete_vertex(index);
        self.vertices.remove_at(index);

        trace!(
            "deleted vertex at index {index}, {} vertices and {} edges left",
            self.vertices.len(),
            self.store.edge_count()
        );
        Ok(())
    }

    fn add_edge(&mut self, src: &T, dst: &T) -> Result<()> {
        let (src, dst) = self.endpoints(src, dst)?;

        // In undirected stores (src, dst) and (dst, src) share the cell, so
        // this rejects the reversed duplicate too.
        if self.store.has_edge(src, dst) {
            return Err(Error::DuplicateEdge);
        }

        self.store.add_edge(src, dst);

        trace!("added edge {src} -> {dst}");
        Ok(())
    }

    fn delete_edge(&mut self, src: &T, dst: &T) -> Result<()> {
        let (src, dst) = self.endpoints(src, dst)?;

        if !self.store.has_edge(src, dst) {
            return Err(Error::EdgeNotFound);
        }

        self.store.delete_edge(src, dst);

        trace!("deleted edge {src} -> {dst}");
        Ok(())
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.store.clear();
    }

    fn clear_edges(&mut self) {
        self.store.clear_edges();
    }
}

impl<T> Default for MatrixGraph<T> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<T, G> PartialEq<G> for MatrixGraph<T>
where
    T: PartialEq + Clone,
    G: LabelGraph<T>,
{
    fn eq(&self, other: &G) -> bool {
        self.structural_eq(other)
    }
}

impl<T: PartialEq + Clone + fmt::Display> fmt::Display for MatrixGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_dump(self, f)
    }
}
