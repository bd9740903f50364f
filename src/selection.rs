//! The node picked in the graph, shown in the details panel.

use crate::display::{DisplayGraph, DisplayNode};
use crate::error::{GraphError, Result};
use log::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(String),
}

impl SelectionState {
    pub fn node_id(&self) -> Option<&str> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(id) => Some(id),
        }
    }
}

/// Owns the selection and keeps it consistent with the displayed graph.
///
/// A selection only ever names a node that is currently displayed. Filter
/// changes that hide the node clear it.
#[derive(Debug, Default)]
pub struct SelectionStore {
    state: SelectionState,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.state.node_id()
    }

    /// The selected node as displayed, for the details panel.
    pub fn selected<'d>(&self, graph: &'d DisplayGraph) -> Option<&'d DisplayNode> {
        self.selected_id().and_then(|id| graph.node(id))
    }

    /// Selects `id`, replacing any earlier selection.
    ///
    /// Fails and leaves the selection untouched when `id` is not displayed.
    pub fn select(&mut self, id: &str, graph: &DisplayGraph) -> Result<()> {
        if !graph.contains(id) {
            return Err(GraphError::NodeNotVisible(id.to_string()));
        }
        debug!("[{0}] Selected", id);
        self.state = SelectionState::Selected(id.to_string());
        Ok(())
    }

    pub fn clear(&mut self) {
        if let SelectionState::Selected(id) = &self.state {
            debug!("[{0}] Deselected", id);
        }
        self.state = SelectionState::Unselected;
    }

    /// Drops the selection if `graph` no longer shows it.
    ///
    /// Returns `true` when the selection was cleared.
    pub fn revalidate(&mut self, graph: &DisplayGraph) -> bool {
        match &self.state {
            SelectionState::Selected(id) if !graph.contains(id) => {
                debug!("[{0}] Filtered out, clearing selection", id);
                self.state = SelectionState::Unselected;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::criteria::FilterCriteria;
    use crate::engine::GraphFilterEngine;
    use crate::graph_data::RawGraph;

    fn display(criteria: &FilterCriteria) -> DisplayGraph {
        GraphFilterEngine::new().compute(&RawGraph::demo(), criteria)
    }

    #[test]
    fn starts_unselected() {
        let store = SelectionStore::new();
        assert_eq!(store.state(), &SelectionState::Unselected);
        assert!(store.selected_id().is_none());
    }

    #[test]
    fn select_and_reselect() {
        let graph = display(&FilterCriteria::new());
        let mut store = SelectionStore::new();

        store.select("COM-001", &graph).unwrap();
        assert_eq!(store.selected_id(), Some("COM-001"));
        assert_eq!(store.selected(&graph).map(|n| n.label.as_str()), Some("Zenith Global Exports"));

        store.select("PER-002", &graph).unwrap();
        assert_eq!(store.state(), &SelectionState::Selected("PER-002".to_string()));
    }

    #[test]
    fn selecting_a_hidden_node_fails() {
        let graph = display(&FilterCriteria::new());
        let mut store = SelectionStore::new();
        store.select("COM-001", &graph).unwrap();

        let err = store.select("NOPE", &graph).unwrap_err();
        assert!(matches!(err, GraphError::NodeNotVisible(id) if id == "NOPE"));
        assert_eq!(store.selected_id(), Some("COM-001"));
    }

    #[test]
    fn clear_selection() {
        let graph = display(&FilterCriteria::new());
        let mut store = SelectionStore::new();
        store.select("PER-001", &graph).unwrap();
        store.clear();
        assert_eq!(store.state(), &SelectionState::Unselected);
    }

    #[test]
    fn revalidate_heals_filtered_selection() {
        let mut store = SelectionStore::new();
        store.select("PER-004", &display(&FilterCriteria::new())).unwrap();

        // Still there with a low threshold.
        assert!(!store.revalidate(&display(&FilterCriteria::new().min_amount(5_000))));
        assert_eq!(store.selected_id(), Some("PER-004"));

        // PER-004 only moved ₹9,500.
        assert!(store.revalidate(&display(&FilterCriteria::new().min_amount(10_000))));
        assert_eq!(store.state(), &SelectionState::Unselected);
    }
}
