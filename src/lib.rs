//! Filtering and radial layout for transaction networks.
//!
//! Given the entities around an investigation subject and the transactions
//! between them, [`GraphFilterEngine`](engine::GraphFilterEngine) applies
//! the workspace filters and places the subject at the origin with its
//! peers evenly spread on a circle. Drawing is left to the renderer.
//!
//! # Example
//! ```
//! use txgrapher::prelude::*;
//!
//! let graph = RawGraph::from_json(
//!     r#"{
//!         "nodes": [
//!             {"id": "P1", "label": "Subject", "type": "Person", "isCenter": true},
//!             {"id": "C1", "label": "Shell Co", "type": "Company"},
//!             {"id": "C2", "label": "Exporter", "type": "Company"}
//!         ],
//!         "edges": [
//!             {"source": "P1", "target": "C1", "label": "₹50,000", "isOutgoing": true},
//!             {"source": "C2", "target": "P1", "label": "₹5,000", "isOutgoing": false}
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let engine = GraphFilterEngine::builder().radius(350.0).build().unwrap();
//! let display = engine.compute(&graph, &FilterCriteria::new().min_amount(10_000));
//!
//! assert_eq!(display.nodes.len(), 2);
//! assert_eq!(display.edges[0].target, "C1");
//! ```

pub mod amount;
pub mod display;
pub mod engine;
pub mod error;
pub mod graph_data;
pub mod provider;
pub mod selection;
pub mod workspace;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::amount::{extract_amount, format_grouped, format_inr};
    pub use crate::display::{DisplayEdge, DisplayGraph, DisplayNode, GraphSummary, Position};
    pub use crate::engine::criteria::{AmountSlider, Direction, FilterCriteria};
    pub use crate::engine::{EngineBuilder, GraphFilterEngine};
    pub use crate::error::GraphError;
    pub use crate::graph_data::{
        Center, CenterKind, Party, RawEdge, RawGraph, RawNode, TransactionRecord,
    };
    pub use crate::provider::{GraphDataProvider, StaticGraphProvider};
    pub use crate::selection::{SelectionState, SelectionStore};
    pub use crate::workspace::events::WorkspaceEvent;
    pub use crate::workspace::{FetchTicket, Workspace};
}
