use thiserror::Error;

/// Errors returned by the spanning tree algorithms in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex id lies outside `[0, vertex_count)`.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        /// Offending vertex id (signed so negative input can be reported).
        vertex: i64,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// A disjoint-set operand lies outside `[0, len)`.
    #[error("invalid index {index}: disjoint set has {len} elements")]
    InvalidIndex {
        /// Offending element index.
        index: usize,
        /// Number of elements in the set.
        len: usize,
    },

    /// An edge connects a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// The vertex at both ends of the edge.
        vertex: usize,
    },

    /// A candidate edge for an incremental update does not touch the new vertex.
    #[error("edge ({u}, {v}) is not incident to new vertex {vertex}")]
    NotIncident {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// The vertex being added.
        vertex: usize,
    },

    /// A membership query names an edge the graph does not contain.
    #[error("edge ({u}, {v}) with weight {weight} not found")]
    EdgeNotFound {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// Queried weight, formatted with `Debug`.
        weight: String,
    },

    /// A full spanning tree was required but the graph is disconnected.
    #[error("graph is disconnected: {components} components")]
    DisconnectedGraph {
        /// Number of connected components.
        components: usize,
    },

    /// The sum of selected edge weights does not fit in the weight type.
    #[error("total weight of {edges} edges overflows the weight type")]
    WeightOverflow {
        /// Number of edges being summed.
        edges: usize,
    },
}

impl Error {
    pub(crate) fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        Error::InvalidVertex {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
