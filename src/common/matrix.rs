//! Index arithmetic for matrices stored in a single linear buffer.
//!
//! Dense matrices are stored row by row with a fixed stride that may exceed
//! the number of vertices, so that adding a vertex does not always need a
//! relocation. Packed matrices store only the lower triangle including the
//! diagonal:
//!
//! ```text
//!  row 0: 0
//!  row 1: 1 2
//!  row 2: 3 4 5
//!  row 3: 6 7 8 9
//! ```

use bitvec::vec::BitVec;

pub fn dense_len(stride: usize) -> usize {
    stride * stride
}

pub fn dense_index(row: usize, col: usize, stride: usize) -> usize {
    row * stride + col
}

pub fn dense_coords(index: usize, stride: usize) -> (usize, usize) {
    (index / stride, index % stride)
}

/// Grows a dense matrix from `prev_stride` to `stride`, keeping every cell at
/// the same coordinates.
pub fn dense_grow(prev: &mut BitVec, prev_stride: usize, stride: usize) {
    if stride <= prev_stride {
        // This routine is only for growing.
        return;
    }

    let len = dense_len(stride);
    let mut next = BitVec::with_capacity(len);

    if prev_stride > 0 {
        // Add the top-right corner.
        for (i, bit) in prev.iter().by_vals().enumerate() {
            next.push(bit);

            // Are we on the right edge of the original square?
            if (i + 1) % prev_stride == 0 {
                let additional = next.len() + stride - prev_stride;
                next.resize(additional, false);
            }
        }
    }

    // Add the bottom rectangle.
    next.resize(len, false);
    *prev = next;
}

/// Length of a packed lower triangle holding `vertex_count` rows.
pub fn packed_len(vertex_count: usize) -> usize {
    vertex_count * (vertex_count + 1) / 2
}

/// Offset of the first cell of given row in a packed lower triangle.
pub fn packed_row_start(row: usize) -> usize {
    packed_len(row)
}

pub fn packed_index(row: usize, col: usize) -> usize {
    // Make sure that the coordinates are in the lower triangle.
    let (row, col) = if row >= col { (row, col) } else { (col, row) };
    // The rows are 1 + 2 + 3 + ... + n = n (n + 1) / 2.
    packed_row_start(row) + col
}

pub fn packed_coords(index: usize) -> (usize, usize) {
    // index = row * (row + 1) / 2 + col => 2 * (index - col) = row^2 + row
    //
    // Quadratic equation for row. We don't know col so we use just
    // index => discriminant is generally not an integer, we need to
    // round down. The difference between index and start of the row is
    // the column.
    let d = (1. + 8. * index as f64).sqrt().floor() as usize;
    let row = (d - 1) / 2;
    let col = index - packed_row_start(row);
    (row, col)
}

/// Recovers the number of rows of a packed lower triangle from its length by
/// walking the triangular numbers. Returns `None` if the length is not a
/// triangular number.
///
/// Stores track their vertex count explicitly. This is used only to verify
/// that the tracked count agrees with the buffer.
pub fn implied_vertex_count(len: usize) -> Option<usize> {
    let mut rows = 0;
    let mut total = 0;

    while total < len {
        rows += 1;
        total += rows;
    }

    (total == len).then_some(rows)
}
