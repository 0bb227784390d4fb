//! Packed lower-triangular adjacency matrix for undirected graphs.

use bitvec::vec::BitVec;

use crate::common::matrix::{packed_coords, packed_index, packed_len, packed_row_start};

/// Lower triangle (including the diagonal) of a symmetric bit matrix, stored
/// row by row in a single buffer.
///
/// Every unordered pair of vertices has exactly one cell, so `(i, j)` and
/// `(j, i)` can never disagree. A self-loop occupies a diagonal cell.
///
/// The store works with indices only and does not validate them; the caller
/// is responsible for passing indices less than the vertex count.
#[derive(Debug, Clone, Default)]
pub struct UndirectedMatrix {
    data: BitVec,
    vertex_count: usize,
}

impl UndirectedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            data: BitVec::with_capacity(packed_len(vertex_capacity)),
            vertex_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Length of the packed buffer.
    pub fn packed_len(&self) -> usize {
        self.data.len()
    }

    fn index(&self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.vertex_count && b < self.vertex_count);
        packed_index(a, b)
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.data[self.index(a, b)]
    }

    pub fn add_edge(&mut self, a: usize, b: usize) {
        let index = self.index(a, b);
        self.data.set(index, true);
    }

    pub fn delete_edge(&mut self, a: usize, b: usize) {
        let index = self.index(a, b);
        self.data.set(index, false);
    }

    /// Appends the row of a new vertex (its cells against all existing
    /// vertices plus the diagonal) and returns the index of the vertex.
    pub fn add_vertex(&mut self) -> usize {
        let index = self.vertex_count;
        self.data.resize(self.data.len() + index + 1, false);
        self.vertex_count += 1;
        index
    }

    /// Removes all cells of given vertex. Vertices after it move one position
    /// down.
    pub fn delete_vertex(&mut self, index: usize) {
        debug_assert!(index < self.vertex_count);

        // Cells in later rows referencing the vertex, from the end so that
        // the offsets computed before each removal stay valid.
        for row in (index + 1..self.vertex_count).rev() {
            self.data.remove(packed_index(row, index));
        }

        // The row of the vertex itself precedes all of the removed cells.
        let start = packed_row_start(index);
        self.data.drain(start..start + index + 1);

        self.vertex_count -= 1;
        debug_assert_eq!(self.data.len(), packed_len(self.vertex_count));
    }

    /// Each unordered pair (and each self-loop) is counted once.
    pub fn edge_count(&self) -> usize {
        self.data.count_ones()
    }

    /// For each row, the ordered list of columns not greater than the row
    /// with an edge.
    pub fn edges(&self) -> Vec<Vec<usize>> {
        let mut rows = vec![Vec::new(); self.vertex_count];

        for index in self.data.iter_ones() {
            let (row, col) = packed_coords(index);
            rows[row].push(col);
        }

        rows
    }

    /// Number of incident edges. A self-loop counts twice.
    pub fn degree(&self, v: usize) -> usize {
        (0..self.vertex_count)
            .filter(|&other| self.has_edge(v, other))
            .map(|other| if other == v { 2 } else { 1 })
            .sum()
    }

    pub fn clear_edges(&mut self) {
        self.data.fill(false);
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.vertex_count = 0;
    }
}
