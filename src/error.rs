use thiserror::Error;

/// Failures reported by the peer structures of this crate.
///
/// The linked lists never fail on a missing value: they report it through
/// `Option`/`bool` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A graph operation named a vertex that is not in the graph.
    #[error("vertex `{vertex}` not found")]
    VertexNotFound { vertex: String },
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn vertex_not_found_message() {
        let err = Error::VertexNotFound {
            vertex: "Z".to_string(),
        };
        assert_eq!(err.to_string(), "vertex `Z` not found");
    }
}
