//! Errors raised at the boundaries of the graph engine.
//!
//! The filter pipeline itself never fails. Errors only come from parsing
//! provider data, validating control input and addressing nodes that are
//! not currently displayed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to parse graph data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown direction `{0}`, expected one of: all, outgoing, incoming")]
    UnknownDirection(String),

    #[error("minimum amount must be finite and non-negative, got {0}")]
    InvalidMinAmount(f64),

    #[error("layout radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("no graph available for subject `{0}`")]
    UnknownSubject(String),

    #[error("node `{0}` is not part of the current display graph")]
    NodeNotVisible(String),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
