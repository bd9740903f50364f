//! Where raw graphs come from.

use crate::error::{GraphError, Result};
use crate::graph_data::RawGraph;
use std::collections::HashMap;

/// Supplies the transaction network for a subject.
///
/// Real providers query the network backend. Fetching may be slow or run
/// elsewhere; [`crate::workspace::Workspace`] takes care of ignoring
/// deliveries for subjects that are no longer current.
pub trait GraphDataProvider {
    fn fetch(&self, subject_id: &str) -> Result<RawGraph>;
}

/// Serves graphs from memory.
#[derive(Debug, Default)]
pub struct StaticGraphProvider {
    graphs: HashMap<String, RawGraph>,
}

impl StaticGraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject_id: impl Into<String>, graph: RawGraph) {
        self.graphs.insert(subject_id.into(), graph);
    }

    pub fn with(mut self, subject_id: impl Into<String>, graph: RawGraph) -> Self {
        self.insert(subject_id, graph);
        self
    }

    /// Loads a `{ "<subject id>": { "nodes": [...], "edges": [...] } }` map.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            graphs: serde_json::from_str(json)?,
        })
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

impl GraphDataProvider for StaticGraphProvider {
    fn fetch(&self, subject_id: &str) -> Result<RawGraph> {
        self.graphs
            .get(subject_id)
            .cloned()
            .ok_or_else(|| GraphError::UnknownSubject(subject_id.to_string()))
    }
}
