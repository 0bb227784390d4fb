use super::{
    config::Config,
    error::{Error, Result},
    marker::Direction,
};

/// Label-level graph interface shared by all engines.
///
/// Vertices are addressed by their labels only. Internal indices never leak
/// out, because they are renumbered whenever a vertex is removed. All returned
/// collections are snapshots.
///
/// Any two implementations are interchangeable: the provided methods are
/// defined purely in terms of the required ones, and [`structural_eq`]
/// compares graphs regardless of the engine behind them.
///
/// [`structural_eq`]: LabelGraph::structural_eq
pub trait LabelGraph<T: PartialEq + Clone> {
    fn config(&self) -> Config;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn has_vertex(&self, label: &T) -> bool;

    /// Returns whether there is an edge from `src` to `dst`. In undirected
    /// graphs the order of the endpoints does not matter.
    fn has_edge(&self, src: &T, dst: &T) -> Result<bool>;

    /// Number of edges incident to the vertex in given direction.
    ///
    /// In undirected graphs the direction is irrelevant and a self-loop is
    /// counted twice.
    fn degree_directed(&self, label: &T, dir: Direction) -> Result<usize>;

    /// Vertices adjacent to `label` in any direction, each listed once. The
    /// vertex itself is included if it has a self-loop or if `closed` is set.
    fn vertex_neighborhood(&self, label: &T, closed: bool) -> Result<Vec<T>>;

    fn vertices(&self) -> Vec<T>;

    /// All edges as `(src, dst)` pairs. Undirected edges are listed once.
    fn edges(&self) -> Vec<(T, T)>;

    fn add_vertex(&mut self, label: T) -> Result<()>;

    fn delete_vertex(&mut self, label: &T) -> Result<()>;

    fn add_edge(&mut self, src: &T, dst: &T) -> Result<()>;

    fn delete_edge(&mut self, src: &T, dst: &T) -> Result<()>;

    fn clear(&mut self);

    fn clear_edges(&mut self);

    fn is_directed(&self) -> bool {
        self.config().is_directed()
    }

    /// Alias for [`vertex_count`](LabelGraph::vertex_count).
    fn order(&self) -> usize {
        self.vertex_count()
    }

    /// Alias for [`edge_count`](LabelGraph::edge_count).
    fn size(&self) -> usize {
        self.edge_count()
    }

    fn vertex_in_degree(&self, label: &T) -> Result<usize> {
        self.degree_directed(label, Direction::Incoming)
    }

    fn vertex_out_degree(&self, label: &T) -> Result<usize> {
        self.degree_directed(label, Direction::Outgoing)
    }

    /// Total degree. For directed graphs it is the sum of in- and out-degree,
    /// for undirected graphs the number of incident edges with self-loops
    /// counted twice.
    fn degree(&self, label: &T) -> Result<usize> {
        if self.is_directed() {
            Ok(self.vertex_in_degree(label)? + self.vertex_out_degree(label)?)
        } else {
            self.vertex_out_degree(label)
        }
    }

    fn vertex_is_source(&self, label: &T) -> Result<bool> {
        if !self.is_directed() {
            return Err(Error::UndirectedGraph);
        }

        Ok(self.vertex_in_degree(label)? == 0)
    }

    fn vertex_is_sink(&self, label: &T) -> Result<bool> {
        if !self.is_directed() {
            return Err(Error::UndirectedGraph);
        }

        Ok(self.vertex_out_degree(label)? == 0)
    }

    fn contains_edge_any(&self, a: &T, b: &T) -> Result<bool> {
        Ok(self.has_edge(a, b)? || self.has_edge(b, a)?)
    }

    /// Two graphs are structurally equal if they have the same vertices and
    /// the same edges, regardless of insertion order or representation.
    fn structural_eq<G>(&self, other: &G) -> bool
    where
        G: LabelGraph<T> + ?Sized,
    {
        if self.vertex_count() != other.vertex_count() || self.edge_count() != other.edge_count()
        {
            return false;
        }

        if !self.vertices().iter().all(|v| other.has_vertex(v)) {
            return false;
        }

        // Vertex sets are equal at this point, so has_edge cannot fail.
        self.edges()
            .iter()
            .all(|(src, dst)| other.has_edge(src, dst).unwrap_or(false))
    }
}
