//! Backing stores of the matrix engine.
//!
//! A store keeps only the presence of edges between vertex indices. Label
//! translation and all precondition checks are done by the engine on top of
//! it.
//!
//! |               | **[DirectedMatrix]** | **[UndirectedMatrix]** |
//! |---------------|----------------------|------------------------|
//! | add vertex    | _O*(V)_              | _O*(V)_                |
//! | add edge      | _O(1)_               | _O(1)_                 |
//! | lookup edge   | _O(1)_               | _O(1)_                 |
//! | remove vertex | _O(V²)_              | _O(V²)_                |
//! | remove edge   | _O(1)_               | _O(1)_                 |
//! | space         | _O(V²)_ bits         | _O(V²/2)_ bits         |
//!
//! * _V_ – vertex count
//! * _O*(..)_ – amortized complexity

pub mod directed;
pub mod undirected;

#[doc(inline)]
pub use self::{directed::DirectedMatrix, undirected::UndirectedMatrix};

use crate::core::marker::Direction;

/// The store backing a matrix graph. Chosen once at construction from the
/// graph configuration and never swapped.
#[derive(Debug, Clone)]
pub enum MatrixStore {
    Directed(DirectedMatrix),
    Undirected(UndirectedMatrix),
}

macro_rules! delegate {
    ($(#[$attr:meta])* fn $name:ident(&self $(, $param:ident: $param_type:ty)*) $(-> $ret:ty)?) => {
        $(#[$attr])*
        pub fn $name(&self $(, $param: $param_type)*) $(-> $ret)? {
            match self {
                MatrixStore::Directed(matrix) => matrix.$name($($param),*),
                MatrixStore::Undirected(matrix) => matrix.$name($($param),*),
            }
        }
    };
    ($(#[$attr:meta])* fn $name:ident(&mut self $(, $param:ident: $param_type:ty)*) $(-> $ret:ty)?) => {
        $(#[$attr])*
        pub fn $name(&mut self $(, $param: $param_type)*) $(-> $ret)? {
            match self {
                MatrixStore::Directed(matrix) => matrix.$name($($param),*),
                MatrixStore::Undirected(matrix) => matrix.$name($($param),*),
            }
        }
    };
}

impl MatrixStore {
    pub fn new(directed: bool, vertex_capacity: usize) -> Self {
        if directed {
            MatrixStore::Directed(DirectedMatrix::with_capacity(vertex_capacity))
        } else {
            MatrixStore::Undirected(UndirectedMatrix::with_capacity(vertex_capacity))
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, MatrixStore::Directed(_))
    }

    delegate!(fn vertex_count(&self) -> usize);
    delegate!(fn has_edge(&self, src: usize, dst: usize) -> bool);
    delegate!(fn add_edge(&mut self, src: usize, dst: usize));
    delegate!(fn delete_edge(&mut self, src: usize, dst: usize));
    delegate!(fn add_vertex(&mut self) -> usize);
    delegate!(fn delete_vertex(&mut self, index: usize));
    delegate!(fn edge_count(&self) -> usize);
    delegate!(
        /// For each row, the ordered list of column indices with an edge.
        /// Undirected stores list only the lower triangle.
        fn edges(&self) -> Vec<Vec<usize>>
    );
    delegate!(fn clear_edges(&mut self));
    delegate!(fn clear(&mut self));

    /// In undirected stores the direction is irrelevant and a self-loop counts
    /// twice.
    pub fn degree_directed(&self, v: usize, dir: Direction) -> usize {
        match self {
            MatrixStore::Directed(matrix) => matrix.degree_directed(v, dir),
            MatrixStore::Undirected(matrix) => matrix.degree(v),
        }
    }

    /// Whether `a` and `b` are connected by an edge in any direction.
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        match self {
            MatrixStore::Directed(matrix) => matrix.has_edge(a, b) || matrix.has_edge(b, a),
            MatrixStore::Undirected(matrix) => matrix.has_edge(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch() {
        for directed in [true, false] {
            let mut store = MatrixStore::new(directed, 0);
            assert_eq!(store.is_directed(), directed);

            let a = store.add_vertex();
            let b = store.add_vertex();
            store.add_edge(a, b);

            assert!(store.has_edge(a, b));
            assert_eq!(store.has_edge(b, a), !directed);
            assert!(store.adjacent(b, a));
            assert_eq!(store.edge_count(), 1);
            assert_eq!(store.degree_directed(b, Direction::Incoming), 1);
            assert_eq!(
                store.degree_directed(b, Direction::Outgoing),
                if directed { 0 } else { 1 }
            );

            store.delete_vertex(a);
            assert_eq!(store.vertex_count(), 1);
            assert_eq!(store.edge_count(), 0);
        }
    }
}
