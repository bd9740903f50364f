use crate::amount::extract_amount;
use crate::engine::criteria::FilterCriteria;
use crate::graph_data::RawEdge;
use std::collections::HashSet;

/// Whether an edge clears the amount threshold and the direction filter.
pub fn passes(edge: &RawEdge, criteria: &FilterCriteria) -> bool {
    extract_amount(&edge.amount_label) >= criteria.min_amount
        && criteria.direction.admits(edge.is_outgoing)
}

/// Keeps the edges that pass `criteria`, in their original order.
pub fn filter_edges<'g>(edges: &'g [RawEdge], criteria: &FilterCriteria) -> Vec<&'g RawEdge> {
    edges.iter().filter(|e| passes(e, criteria)).collect()
}

/// Drops edges that lost an endpoint to the node filter.
///
/// Order is preserved. Edges pointing at ids that never existed end up
/// here too and are dropped the same way.
pub fn induced<'g>(edges: Vec<&'g RawEdge>, survivors: &HashSet<&str>) -> Vec<&'g RawEdge> {
    edges
        .into_iter()
        .filter(|e| survivors.contains(e.source.as_str()) && survivors.contains(e.target.as_str()))
        .collect()
}
