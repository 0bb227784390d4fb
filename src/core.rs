pub mod config;
pub mod error;
pub mod marker;
pub mod vertices;

mod graph;

pub use config::Config;
pub use error::{Error, Result};
pub use graph::LabelGraph;
pub use vertices::VertexSet;
