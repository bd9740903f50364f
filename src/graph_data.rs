use crate::amount::format_grouped;
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::io::Read;

/// An entity in the transaction network, as delivered by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    /// Unique identifier, e.g. a person id or a company CIN.
    pub id: String,
    /// Display name.
    pub label: String,
    /// Entity category such as `"Person"` or `"Company"`.
    ///
    /// The set of categories is open; filtering compares them verbatim.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Marks the subject of the investigation.
    #[serde(default)]
    pub is_center: bool,
}

impl RawNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type: node_type.into(),
            is_center: false,
        }
    }

    /// Same node, flagged as the investigation subject.
    pub fn center(mut self) -> Self {
        self.is_center = true;
        self
    }
}

/// A transaction between two entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEdge {
    pub source: String,
    pub target: String,
    /// Formatted amount such as `"₹50,000"`.
    ///
    /// The provider sends this as `label`; both names are accepted.
    /// A bare number is taken as its decimal text. A missing, `null` or
    /// otherwise unusable label becomes `""`, which extracts to 0.
    #[serde(alias = "label", default, deserialize_with = "lenient_label")]
    pub amount_label: String,
    /// `true` when money leaves the subject, `false` when it arrives.
    #[serde(default)]
    pub is_outgoing: bool,
}

impl RawEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        amount_label: impl Into<String>,
        is_outgoing: bool,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            amount_label: amount_label.into(),
            is_outgoing,
        }
    }
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(label) => label,
        Value::Number(amount) => amount.to_string(),
        _ => String::new(),
    })
}

/// How the center of a graph was determined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CenterKind {
    /// Exactly one node carries `isCenter`.
    Flagged,
    /// No node carries `isCenter`; the first node stands in for layout.
    Fallback,
    /// Several nodes carry `isCenter`; the first of them wins.
    Ambiguous,
    /// The graph has no nodes.
    #[default]
    None,
}

/// The resolved center of a graph: an index into [`RawGraph::nodes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Center {
    pub index: Option<usize>,
    pub kind: CenterKind,
}

/// Nodes and edges of one subject's transaction network.
///
/// Edges are kept in provider order. Nothing here is validated: edges may
/// point at unknown ids and any number of nodes may claim to be the
/// center. The engine copes with both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGraph {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

impl RawGraph {
    pub fn new(nodes: Vec<RawNode>, edges: Vec<RawEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Parses the provider's `{ "nodes": [...], "edges": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&RawNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Resolves the investigation subject without touching the data.
    pub fn center(&self) -> Center {
        let mut flagged = self.nodes.iter().enumerate().filter(|(_, n)| n.is_center);
        match (flagged.next(), flagged.next()) {
            (Some((index, _)), None) => Center {
                index: Some(index),
                kind: CenterKind::Flagged,
            },
            (Some((index, _)), Some(_)) => Center {
                index: Some(index),
                kind: CenterKind::Ambiguous,
            },
            (None, _) if self.nodes.is_empty() => Center {
                index: None,
                kind: CenterKind::None,
            },
            (None, _) => Center {
                index: Some(0),
                kind: CenterKind::Fallback,
            },
        }
    }

    /// Edges with at least one endpoint missing from `nodes`.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &RawEdge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(move |e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
    }

    /// Assembles a graph from provider transaction rows.
    ///
    /// Nodes are deduplicated in first-seen order. Every row becomes one
    /// edge from its subject to its peer, labelled in thousands grouping.
    pub fn from_transactions(records: impl IntoIterator<Item = TransactionRecord>) -> Self {
        let mut nodes: Vec<RawNode> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut edges = Vec::new();

        for record in records {
            for (party, is_subject) in [(&record.subject, true), (&record.peer, false)] {
                match seen.get(&party.id) {
                    Some(&i) => nodes[i].is_center |= is_subject,
                    None => {
                        seen.insert(party.id.clone(), nodes.len());
                        nodes.push(RawNode {
                            id: party.id.clone(),
                            label: party.name.clone(),
                            node_type: party.entity_type.clone(),
                            is_center: is_subject,
                        });
                    }
                }
            }

            edges.push(RawEdge::new(
                record.subject.id,
                record.peer.id,
                format_grouped(record.amount),
                record.is_outgoing,
            ));
        }

        Self { nodes, edges }
    }

    /// A small network around one subject, handy for demos and benches.
    pub fn demo() -> Self {
        let subject = Party::new("PER-001", "Arjun Verma", "Person");
        let rows = [
            (Party::new("COM-001", "Zenith Global Exports", "Company"), 800_000, true),
            (Party::new("PER-002", "Riya Singh", "Person"), 48_000, false),
            (Party::new("PER-003", "Anonymous Depositor", "Person"), 45_000, false),
            (Party::new("COM-002", "Bluewater Trading LLP", "Company"), 750_000, false),
            (Party::new("PER-004", "Kabir Mehta", "Person"), 9_500, true),
            (Party::new("COM-003", "Sunrise Logistics Pvt Ltd", "Company"), 125_000, true),
            (Party::new("PER-002", "Riya Singh", "Person"), 62_000, true),
        ];

        Self::from_transactions(rows.into_iter().map(|(peer, amount, is_outgoing)| {
            TransactionRecord {
                subject: subject.clone(),
                peer,
                amount,
                is_outgoing,
            }
        }))
    }
}

/// One side of a provider transaction row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub name: String,
    pub entity_type: String,
}

impl Party {
    pub fn new(id: impl Into<String>, name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entity_type: entity_type.into(),
        }
    }
}

/// A single transaction as returned by the network query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub subject: Party,
    pub peer: Party,
    pub amount: u64,
    pub is_outgoing: bool,
}
