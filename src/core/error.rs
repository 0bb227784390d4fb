use thiserror::Error;

/// Failure of a label-level graph operation.
///
/// Every variant is detected before the graph is mutated, so a returned error
/// means the graph is unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("vertex does not exist")]
    VertexNotFound,
    #[error("vertex already exists")]
    DuplicateVertex,
    #[error("edge does not exist")]
    EdgeNotFound,
    #[error("an edge already exists and the graph does not allow multi edges")]
    DuplicateEdge,
    #[error("the graph is undirected, the query is meaningful only for directed graphs")]
    UndirectedGraph,
    #[error("a vertex of the subgraph filter does not exist in the source graph")]
    SubgraphVertexAbsent,
}

pub type Result<T> = std::result::Result<T, Error>;
