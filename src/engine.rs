pub mod criteria;
pub mod ressources;
pub mod systems;

use crate::display::{DisplayEdge, DisplayGraph, DisplayNode, Position};
use crate::engine::{
    criteria::FilterCriteria,
    ressources::layout_vars::{LayoutOrigin, LayoutRadius},
    systems::{edge_filter, radial_layout, survivors},
};
use crate::error::{GraphError, Result};
use crate::graph_data::{RawGraph, RawNode};
use glam::Vec2;
use log::{debug, trace};

/// Turns a raw transaction network and the current filter controls into
/// the nodes and edges to draw.
///
/// The engine holds only its layout parameters. Every call to
/// [`GraphFilterEngine::compute`] is independent, so it can be driven on
/// every slider tick.
pub struct GraphFilterEngine {
    radius: LayoutRadius,
    origin: LayoutOrigin,
}

impl Default for GraphFilterEngine {
    fn default() -> Self {
        Self {
            radius: LayoutRadius::default(),
            origin: LayoutOrigin::default(),
        }
    }
}

impl GraphFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn radius(&self) -> f32 {
        self.radius.0
    }

    pub fn origin(&self) -> Vec2 {
        self.origin.0
    }

    /// Filters and lays out `graph`.
    ///
    /// 1. Edges below `min_amount` or against `direction` are dropped.
    /// 2. Nodes touching a remaining edge survive if their type is visible.
    ///    The center survives regardless.
    /// 3. Edges that lost an endpoint in step 2 are dropped.
    /// 4. The center goes to the origin, peers onto the circle.
    pub fn compute(&self, graph: &RawGraph, criteria: &FilterCriteria) -> DisplayGraph {
        let center = graph.center();
        let filtered = edge_filter::filter_edges(&graph.edges, criteria);
        let filtered_count = filtered.len();

        let survivors = survivors::survivors(&graph.nodes, center, &filtered, criteria);
        let edges = edge_filter::induced(filtered, &survivors.ids());
        let positions =
            radial_layout::radial_positions(survivors.peers.len(), &self.radius, &self.origin);

        debug!(
            "[{0}] Filtered graph: {1}/{2} edges pass criteria, {3} after node filter, {4}/{5} nodes shown (center: {6:?})",
            survivors.center.map_or("-", |n| n.id.as_str()),
            filtered_count,
            graph.edges.len(),
            edges.len(),
            survivors.len(),
            graph.nodes.len(),
            center.kind
        );

        let mut nodes = Vec::with_capacity(survivors.len());
        if let Some(center) = survivors.center {
            nodes.push(display_node(center, true, self.origin.0));
        }
        for (peer, position) in survivors.peers.iter().zip(positions) {
            nodes.push(display_node(peer, false, position));
        }

        let edges = edges
            .into_iter()
            .enumerate()
            .map(|(i, e)| DisplayEdge {
                id: format!("e{i}"),
                source: e.source.clone(),
                target: e.target.clone(),
                amount_label: e.amount_label.clone(),
                is_outgoing: e.is_outgoing,
            })
            .collect();

        DisplayGraph {
            nodes,
            edges,
            center_kind: center.kind,
        }
    }
}

fn display_node(node: &RawNode, is_center_role: bool, position: Vec2) -> DisplayNode {
    trace!("[{0}] Position: {1}", node.id, position);
    DisplayNode {
        id: node.id.clone(),
        label: node.label.clone(),
        node_type: node.node_type.clone(),
        is_center_role,
        position: Position(position),
    }
}

/// Builder for `GraphFilterEngine`
pub struct EngineBuilder {
    radius: f32,
    origin: Vec2,
}

impl EngineBuilder {
    /// Get a Instance of `EngineBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance between the center and every peer, in layout units.
    ///
    /// Must be finite and not negative.
    ///
    /// Default: `350.0`
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Where the center node is placed. Peers are laid out around it.
    ///
    /// Default: `(0.0, 0.0)`
    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Constructs a instance of `GraphFilterEngine`
    pub fn build(self) -> Result<GraphFilterEngine> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GraphError::InvalidRadius(self.radius));
        }
        Ok(GraphFilterEngine {
            radius: LayoutRadius(self.radius),
            origin: LayoutOrigin(self.origin),
        })
    }
}

impl Default for EngineBuilder {
    /// Get a Instance of `EngineBuilder` with default values
    fn default() -> Self {
        Self {
            radius: LayoutRadius::default().0,
            origin: LayoutOrigin::default().0,
        }
    }
}
