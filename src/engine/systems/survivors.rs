use crate::engine::criteria::FilterCriteria;
use crate::graph_data::{Center, RawEdge, RawNode};
use petgraph::graphmap::UnGraphMap;
use std::collections::HashSet;

/// Nodes that remain visible after filtering.
///
/// The center is kept apart from the peers so the layout can anchor it.
/// Peers keep their relative input order.
#[derive(Debug, Default)]
pub struct Survivors<'g> {
    pub center: Option<&'g RawNode>,
    pub peers: Vec<&'g RawNode>,
}

impl<'g> Survivors<'g> {
    /// Center first, then peers.
    pub fn iter(&self) -> impl Iterator<Item = &'g RawNode> + '_ {
        self.center.into_iter().chain(self.peers.iter().copied())
    }

    pub fn ids(&self) -> HashSet<&'g str> {
        self.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.peers.len() + usize::from(self.center.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects the nodes to display.
///
/// A node survives when it touches a filtered edge and its type is
/// visible. The center always survives, whatever its type and however
/// many edges it has left.
pub fn survivors<'g>(
    nodes: &'g [RawNode],
    center: Center,
    edges: &[&'g RawEdge],
    criteria: &FilterCriteria,
) -> Survivors<'g> {
    let center = center.index.and_then(|i| nodes.get(i).map(|n| (i, n)));

    let mut network: UnGraphMap<&str, ()> =
        UnGraphMap::from_edges(edges.iter().map(|e| (e.source.as_str(), e.target.as_str())));
    let mut placed: HashSet<&str> = HashSet::new();
    if let Some((_, node)) = center {
        network.add_node(node.id.as_str());
        placed.insert(node.id.as_str());
    }

    let peers = nodes
        .iter()
        .enumerate()
        .filter(|&(i, _)| center.map_or(true, |(c, _)| c != i))
        .map(|(_, n)| n)
        .filter(|&n| network.contains_node(n.id.as_str()))
        .filter(|&n| criteria.is_visible(&n.node_type))
        .filter(|&n| placed.insert(n.id.as_str()))
        .collect();

    Survivors {
        center: center.map(|(_, n)| n),
        peers,
    }
}
