//! Simple generic graph library.
//!
//! Vertices are identified by user-supplied labels of any type that can be
//! compared for equality and cloned. Edges carry no data. Two interchangeable
//! engines are provided, [`MatrixGraph`](graph::MatrixGraph) over an
//! adjacency matrix and [`ListGraph`](graph::ListGraph) over an adjacency
//! list. Both implement [`LabelGraph`](core::LabelGraph).
//!
//! ```
//! use sgl::prelude::*;
//!
//! let mut graph = MatrixGraph::new(Config::DIRECTED);
//!
//! graph.add_vertex("a")?;
//! graph.add_vertex("b")?;
//! graph.add_edge(&"a", &"b")?;
//!
//! assert_eq!(graph.vertex_out_degree(&"a"), Ok(1));
//! assert_eq!(graph.vertex_is_sink(&"b"), Ok(true));
//! assert_eq!(graph.add_edge(&"a", &"c"), Err(Error::VertexNotFound));
//! # Ok::<(), Error>(())
//! ```

pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::core::{
        marker::{Direction, Incoming, Outgoing},
        Config, Error, LabelGraph,
    };
    pub use crate::graph::{ListGraph, MatrixGraph};
}
