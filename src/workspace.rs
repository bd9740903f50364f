pub mod events;

use crate::display::{DisplayGraph, DisplayNode};
use crate::engine::criteria::FilterCriteria;
use crate::engine::GraphFilterEngine;
use crate::error::Result;
use crate::graph_data::{CenterKind, RawGraph};
use crate::provider::GraphDataProvider;
use crate::selection::{SelectionState, SelectionStore};
use events::WorkspaceEvent;
use log::{debug, info, warn};

/// Identifies one request for a subject's graph.
///
/// Only the ticket from the most recent [`Workspace::request`] is honoured
/// by [`Workspace::deliver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    subject_id: String,
    generation: u64,
}

impl FetchTicket {
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The investigation workspace state around one subject.
///
/// Holds the latest raw graph, the filter controls, the resulting display
/// graph and the selection. The display graph is recomputed whenever the
/// graph or the criteria change, and the selection is revalidated after
/// every recomputation.
pub struct Workspace {
    engine: GraphFilterEngine,
    criteria: FilterCriteria,
    subject_id: Option<String>,
    generation: u64,
    graph: Option<RawGraph>,
    display: DisplayGraph,
    selection: SelectionStore,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(GraphFilterEngine::default())
    }
}

impl Workspace {
    pub fn new(engine: GraphFilterEngine) -> Self {
        Self {
            engine,
            criteria: FilterCriteria::default(),
            subject_id: None,
            generation: 0,
            graph: None,
            display: DisplayGraph::default(),
            selection: SelectionStore::new(),
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self.recompute();
        self
    }

    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn raw_graph(&self) -> Option<&RawGraph> {
        self.graph.as_ref()
    }

    pub fn display(&self) -> &DisplayGraph {
        &self.display
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn selected_node(&self) -> Option<&DisplayNode> {
        self.selection.selected(&self.display)
    }

    /// Switches to a new subject and returns the ticket its graph must be
    /// delivered with.
    ///
    /// The previous graph and selection are dropped immediately.
    pub fn request(&mut self, subject_id: &str) -> FetchTicket {
        self.generation += 1;
        info!("Opening subject {0} (request {1})", subject_id, self.generation);

        self.subject_id = Some(subject_id.to_string());
        self.graph = None;
        self.display = DisplayGraph::default();
        self.selection.clear();

        FetchTicket {
            subject_id: subject_id.to_string(),
            generation: self.generation,
        }
    }

    /// Accepts a fetched graph if `ticket` is still current.
    ///
    /// Returns `false` and changes nothing for stale deliveries.
    pub fn deliver(&mut self, ticket: &FetchTicket, graph: RawGraph) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding graph for {0} (request {1}, current {2})",
                ticket.subject_id, ticket.generation, self.generation
            );
            return false;
        }

        if graph.center().kind == CenterKind::Ambiguous {
            warn!(
                "Graph for {0} flags several center nodes, using the first",
                ticket.subject_id
            );
        }
        let dangling = graph.dangling_edges().count();
        if dangling > 0 {
            warn!(
                "Graph for {0} has {1} edges referencing unknown nodes",
                ticket.subject_id, dangling
            );
        }

        self.graph = Some(graph);
        self.selection.clear();
        self.recompute();
        true
    }

    /// Fetches and delivers a subject's graph in one go.
    pub fn load<P>(&mut self, provider: &P, subject_id: &str) -> Result<()>
    where
        P: GraphDataProvider + ?Sized,
    {
        let ticket = self.request(subject_id);
        let graph = provider.fetch(subject_id)?;
        self.deliver(&ticket, graph);
        Ok(())
    }

    /// Replaces all filter criteria at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn apply(&mut self, event: WorkspaceEvent) -> Result<()> {
        let recompute = event.changes_filter();
        match event {
            WorkspaceEvent::MinAmountChanged(amount) => self.criteria.min_amount = amount,
            WorkspaceEvent::DirectionChanged(direction) => self.criteria.direction = direction,
            WorkspaceEvent::TypeShown(node_type) => self.criteria.show_type(node_type),
            WorkspaceEvent::TypeFiltered(node_type) => self.criteria.hide_type(&node_type),
            WorkspaceEvent::TypeToggled(node_type) => {
                self.criteria.toggle_type(&node_type);
            }
            WorkspaceEvent::NodeActivated(id) => self.selection.select(&id, &self.display)?,
            WorkspaceEvent::SelectionCleared => self.selection.clear(),
        }
        if recompute {
            self.recompute();
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.display = match &self.graph {
            Some(graph) => self.engine.compute(graph, &self.criteria),
            None => DisplayGraph::default(),
        };
        self.selection.revalidate(&self.display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::criteria::Direction;
    use crate::error::GraphError;
    use crate::graph_data::{RawEdge, RawNode};
    use crate::provider::StaticGraphProvider;

    fn other_graph() -> RawGraph {
        RawGraph::new(
            vec![
                RawNode::new("COM-900", "Northwind Holdings", "Company").center(),
                RawNode::new("PER-901", "Dev Malhotra", "Person"),
            ],
            vec![RawEdge::new("COM-900", "PER-901", "₹20,000", true)],
        )
    }

    fn provider() -> StaticGraphProvider {
        StaticGraphProvider::new()
            .with("PER-001", RawGraph::demo())
            .with("COM-900", other_graph())
    }

    #[test]
    fn load_computes_display() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();

        assert_eq!(workspace.subject_id(), Some("PER-001"));
        assert_eq!(workspace.display().center().map(|n| n.id.as_str()), Some("PER-001"));
        assert_eq!(workspace.display().nodes.len(), 7);
    }

    #[test]
    fn load_unknown_subject_leaves_empty_workspace() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();

        let err = workspace.load(&provider(), "PER-404").unwrap_err();
        assert!(matches!(err, GraphError::UnknownSubject(_)));
        assert!(workspace.display().is_empty());
        assert!(workspace.raw_graph().is_none());
    }

    #[test]
    fn stale_delivery_is_discarded() {
        let mut workspace = Workspace::default();
        let first = workspace.request("PER-001");
        let second = workspace.request("COM-900");
        assert!(second.generation() > first.generation());
        assert_eq!(second.subject_id(), "COM-900");

        assert!(!workspace.deliver(&first, RawGraph::demo()));
        assert!(workspace.display().is_empty());

        assert!(workspace.deliver(&second, other_graph()));
        assert_eq!(workspace.display().center().map(|n| n.id.as_str()), Some("COM-900"));

        // A late answer for the old subject must not overwrite the new one.
        assert!(!workspace.deliver(&first, RawGraph::demo()));
        assert_eq!(workspace.subject_id(), Some("COM-900"));
        assert_eq!(workspace.display().nodes.len(), 2);
    }

    #[test]
    fn new_subject_clears_selection() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();
        workspace
            .apply(WorkspaceEvent::NodeActivated("COM-001".to_string()))
            .unwrap();
        assert_eq!(workspace.selected_node().map(|n| n.id.as_str()), Some("COM-001"));

        workspace.load(&provider(), "COM-900").unwrap();
        assert_eq!(workspace.selection(), &SelectionState::Unselected);
    }

    #[test]
    fn filter_events_recompute_and_heal_selection() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();
        workspace
            .apply(WorkspaceEvent::NodeActivated("PER-004".to_string()))
            .unwrap();

        workspace.apply(WorkspaceEvent::MinAmountChanged(10_000)).unwrap();
        assert!(!workspace.display().contains("PER-004"));
        assert_eq!(workspace.selection(), &SelectionState::Unselected);
    }

    #[test]
    fn type_and_direction_events() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();

        workspace.apply(WorkspaceEvent::TypeFiltered("Company".to_string())).unwrap();
        assert!(workspace.display().peers().all(|n| n.node_type == "Person"));

        workspace.apply(WorkspaceEvent::TypeToggled("Company".to_string())).unwrap();
        assert!(workspace.display().contains("COM-001"));

        workspace
            .apply(WorkspaceEvent::DirectionChanged(Direction::Outgoing))
            .unwrap();
        assert!(workspace.display().edges.iter().all(|e| e.is_outgoing));

        workspace.apply(WorkspaceEvent::TypeToggled("Person".to_string())).unwrap();
        workspace.apply(WorkspaceEvent::TypeShown("Person".to_string())).unwrap();
        assert!(workspace.criteria().is_visible("Person"));
    }

    #[test]
    fn activating_hidden_node_is_rejected() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();
        workspace.apply(WorkspaceEvent::MinAmountChanged(100_000)).unwrap();

        let err = workspace
            .apply(WorkspaceEvent::NodeActivated("PER-002".to_string()))
            .unwrap_err();
        assert!(matches!(err, GraphError::NodeNotVisible(_)));
        assert_eq!(workspace.selection(), &SelectionState::Unselected);
    }

    #[test]
    fn set_criteria_heals_selection() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();
        workspace
            .apply(WorkspaceEvent::NodeActivated("COM-003".to_string()))
            .unwrap();

        workspace.set_criteria(FilterCriteria::new().min_amount(200_000));
        assert!(!workspace.display().contains("COM-003"));
        assert_eq!(workspace.selection(), &SelectionState::Unselected);
    }

    #[test]
    fn criteria_given_up_front_apply_to_first_delivery() {
        let workspace = Workspace::default().with_criteria(FilterCriteria::new().min_amount(100_000));
        assert!(workspace.display().is_empty());
        assert_eq!(workspace.selection(), &SelectionState::Unselected);

        let mut workspace = workspace;
        workspace.load(&provider(), "PER-001").unwrap();
        let ids: Vec<&str> = workspace.display().nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["PER-001", "COM-001", "COM-002", "COM-003"]);

        workspace
            .apply(WorkspaceEvent::NodeActivated("COM-003".to_string()))
            .unwrap();
        let workspace = workspace.with_criteria(FilterCriteria::new().visible_types(["Person"]));
        assert!(!workspace.display().contains("COM-003"));
        assert_eq!(workspace.selection(), &SelectionState::Unselected);
    }

    #[test]
    fn selection_survives_unrelated_filter_changes() {
        let mut workspace = Workspace::default();
        workspace.load(&provider(), "PER-001").unwrap();
        workspace
            .apply(WorkspaceEvent::NodeActivated("COM-001".to_string()))
            .unwrap();
        workspace.apply(WorkspaceEvent::MinAmountChanged(100_000)).unwrap();
        assert_eq!(workspace.selection(), &SelectionState::Selected("COM-001".to_string()));

        workspace.apply(WorkspaceEvent::SelectionCleared).unwrap();
        assert_eq!(workspace.selection(), &SelectionState::Unselected);
    }
}
