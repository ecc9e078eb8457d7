//! Error type for graph queries that require an existing vertex.

/// The error type for graph queries on a vertex that was never added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The queried vertex is not in the graph.
    NotFound,
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => f.write_str("vertex does not exist"),
        }
    }
}

impl std::error::Error for GraphError {}
