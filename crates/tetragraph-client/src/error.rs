pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("both source and target nodes must be specified")]
    EndpointsRequired,

    #[error("source and target nodes cannot be the same")]
    SameEndpoints,

    #[error("the graph has no nodes; wait for it to finish loading")]
    NoNodes,

    #[error("the graph has no edges; wait for it to finish loading")]
    NoEdges,

    #[error("source node \"{0}\" does not exist in the graph")]
    MissingSource(String),

    #[error("target node \"{0}\" does not exist in the graph")]
    MissingTarget(String),

    #[error("path request failed: {status} {body}")]
    Backend { status: u16, body: String },

    #[error("path response is not an array of node labels")]
    MalformedResponse,
}
