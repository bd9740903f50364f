//! Events sent to a workspace by the filter controls and the renderer.

use crate::engine::criteria::Direction;

/// Describes an event received by a [`Workspace`](super::Workspace).
#[derive(Clone, Debug, PartialEq)]
pub enum WorkspaceEvent {
    /// The minimum amount slider moved.
    MinAmountChanged(u64),

    /// The direction toggle changed.
    DirectionChanged(Direction),

    /// Show peers of this entity type.
    TypeShown(String),

    /// Hide peers of this entity type.
    TypeFiltered(String),

    /// A type checkbox was clicked.
    TypeToggled(String),

    /// The renderer reported a click on a node.
    NodeActivated(String),

    /// The details panel was closed.
    SelectionCleared,
}

impl WorkspaceEvent {
    /// Whether handling this event changes the filter criteria.
    pub fn changes_filter(&self) -> bool {
        !matches!(
            self,
            WorkspaceEvent::NodeActivated(_) | WorkspaceEvent::SelectionCleared
        )
    }
}
