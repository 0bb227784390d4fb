//! Dense square adjacency matrix for directed graphs.

use bitvec::vec::BitVec;

use crate::{
    common::matrix::{dense_coords, dense_grow, dense_index, dense_len},
    core::marker::Direction,
};

/// Square bit matrix where cell `(i, j)` is set iff there is an edge from
/// vertex `i` to vertex `j`.
///
/// Rows are stored with a stride that is a power of two not less than the
/// vertex count, so that growing the matrix is amortized. Cells outside of
/// the `vertex_count × vertex_count` square are always unset.
///
/// The store works with indices only and does not validate them; the caller
/// is responsible for passing indices less than the vertex count.
#[derive(Debug, Clone, Default)]
pub struct DirectedMatrix {
    data: BitVec,
    stride: usize,
    vertex_count: usize,
}

impl DirectedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        if vertex_capacity == 0 {
            return Self::new();
        }

        let stride = vertex_capacity.next_power_of_two();
        let mut data = BitVec::with_capacity(dense_len(stride));
        data.resize(dense_len(stride), false);

        Self {
            data,
            stride,
            vertex_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn ensure_capacity(&mut self, vertex_capacity: usize) {
        if self.stride < vertex_capacity {
            let stride = (self.stride * 2).max(vertex_capacity.next_power_of_two());
            dense_grow(&mut self.data, self.stride, stride);
            self.stride = stride;
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.vertex_count && col < self.vertex_count);
        dense_index(row, col, self.stride)
    }

    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.data[self.index(src, dst)]
    }

    pub fn add_edge(&mut self, src: usize, dst: usize) {
        let index = self.index(src, dst);
        self.data.set(index, true);
    }

    pub fn delete_edge(&mut self, src: usize, dst: usize) {
        let index = self.index(src, dst);
        self.data.set(index, false);
    }

    /// Appends an empty row and column and returns the index of the new
    /// vertex.
    pub fn add_vertex(&mut self) -> usize {
        self.ensure_capacity(self.vertex_count + 1);

        // The new row and column are already unset thanks to the invariant.
        let index = self.vertex_count;
        self.vertex_count += 1;
        index
    }

    /// Removes the row and the column of given vertex. Rows and columns after
    /// it move one position up and left, respectively.
    pub fn delete_vertex(&mut self, index: usize) {
        let n = self.vertex_count;
        debug_assert!(index < n);

        // Compact in place. Each target cell precedes its source cell in the
        // row-major order, so no source is overwritten before it is read.
        for row in 0..n - 1 {
            let src_row = row + (row >= index) as usize;
            for col in 0..n - 1 {
                let src_col = col + (col >= index) as usize;
                let bit = self.data[dense_index(src_row, src_col, self.stride)];
                self.data.set(dense_index(row, col, self.stride), bit);
            }
        }

        // Unset the last row and column to restore the invariant.
        for i in 0..n {
            self.data.set(dense_index(n - 1, i, self.stride), false);
            self.data.set(dense_index(i, n - 1, self.stride), false);
        }

        self.vertex_count -= 1;
    }

    pub fn edge_count(&self) -> usize {
        self.data.count_ones()
    }

    /// For each row, the ordered list of columns with an edge.
    pub fn edges(&self) -> Vec<Vec<usize>> {
        let mut rows = vec![Vec::new(); self.vertex_count];

        // Cells outside of the square are unset, so every set bit is an edge.
        for index in self.data.iter_ones() {
            let (row, col) = dense_coords(index, self.stride);
            rows[row].push(col);
        }

        rows
    }

    pub fn degree_directed(&self, v: usize, dir: Direction) -> usize {
        match dir {
            Direction::Outgoing => {
                let start = self.index(v, 0);
                self.data[start..start + self.vertex_count].count_ones()
            }
            Direction::Incoming => (0..self.vertex_count)
                .filter(|&row| self.has_edge(row, v))
                .count(),
        }
    }

    pub fn clear_edges(&mut self) {
        self.data.fill(false);
    }

    pub fn clear(&mut self) {
        self.clear_edges();
        self.vertex_count = 0;
    }
}
