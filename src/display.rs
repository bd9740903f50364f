//! What the engine hands to the renderer.

use crate::amount::extract_amount;
use crate::graph_data::CenterKind;
use glam::Vec2;
use petgraph::graphmap::UnGraphMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// The position of a node in layout units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position(pub Vec2);

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Position", 2)?;
        state.serialize_field("x", &self.0.x)?;
        state.serialize_field("y", &self.0.y)?;
        state.end()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    /// Set on the node anchored at the layout origin.
    pub is_center_role: bool,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEdge {
    /// `e{i}`, where `i` is the edge's index in [`DisplayGraph::edges`].
    pub id: String,
    pub source: String,
    pub target: String,
    pub amount_label: String,
    pub is_outgoing: bool,
}

/// Totals shown next to the graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub peer_count: usize,
    pub outgoing_count: usize,
    pub incoming_count: usize,
    pub outgoing_total: u64,
    pub incoming_total: u64,
}

/// One filtered, laid out view of a transaction network.
///
/// The center, if any, is always `nodes[0]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DisplayGraph {
    pub nodes: Vec<DisplayNode>,
    pub edges: Vec<DisplayEdge>,
    #[serde(skip)]
    pub center_kind: CenterKind,
}

impl DisplayGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn center(&self) -> Option<&DisplayNode> {
        self.nodes.first().filter(|n| n.is_center_role)
    }

    pub fn peers(&self) -> impl Iterator<Item = &DisplayNode> {
        self.nodes.iter().filter(|n| !n.is_center_role)
    }

    pub fn node(&self, id: &str) -> Option<&DisplayNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn node_ids(&self) -> HashSet<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// Nodes sharing at least one displayed edge with `id`, in display order.
    pub fn neighbors(&self, id: &str) -> Vec<&DisplayNode> {
        let network: UnGraphMap<&str, ()> = UnGraphMap::from_edges(
            self.edges
                .iter()
                .map(|e| (e.source.as_str(), e.target.as_str())),
        );
        if !network.contains_node(id) {
            return Vec::new();
        }

        let adjacent: HashSet<&str> = network.neighbors(id).filter(|&n| n != id).collect();
        self.nodes
            .iter()
            .filter(|n| adjacent.contains(n.id.as_str()))
            .collect()
    }

    pub fn summary(&self) -> GraphSummary {
        let mut summary = GraphSummary {
            peer_count: self.peers().count(),
            ..GraphSummary::default()
        };
        for edge in &self.edges {
            let amount = extract_amount(&edge.amount_label);
            if edge.is_outgoing {
                summary.outgoing_count += 1;
                summary.outgoing_total = summary.outgoing_total.saturating_add(amount);
            } else {
                summary.incoming_count += 1;
                summary.incoming_total = summary.incoming_total.saturating_add(amount);
            }
        }
        summary
    }
}
