use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::lists::uniq;

/// Edges of a graph keyed by their id.
pub type Edges = BTreeMap<String, Edge>;

/// A group of source and target token ids that are aligned with each other.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Derived from `ids`, so edges connecting the same tokens are identical
    id: String,

    /// Source and target token ids, sorted
    ids: Vec<String>,

    labels: Vec<String>,

    /// Whether the alignment was asserted by a user rather than computed
    manual: bool,

    comment: Option<String>,
}

impl Edge {
    /// Creates an edge over `ids`, which get sorted, with its `labels`
    /// deduplicated in order.
    ///
    /// ```
    /// use parallel_corpus::Edge;
    ///
    /// let edge = Edge::new(["t1".to_owned(), "s0".to_owned()], [], false, None);
    /// assert_eq!(edge.id(), "e-s0-t1");
    /// assert_eq!(edge.ids(), ["s0", "t1"]);
    /// ```
    pub fn new(
        ids: impl IntoIterator<Item = String>,
        labels: impl IntoIterator<Item = String>,
        manual: bool,
        comment: Option<String>,
    ) -> Self {
        let mut ids: Vec<String> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        Self {
            id: format!("e-{}", ids.join("-")),
            ids,
            labels: uniq(labels),
            manual,
            comment,
        }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn ids(&self) -> &[String] { &self.ids }

    pub fn labels(&self) -> &[String] { &self.labels }

    pub fn is_manual(&self) -> bool { self.manual }

    pub fn comment(&self) -> Option<&str> { self.comment.as_deref() }

    pub fn contains(&self, token_id: &str) -> bool { self.ids.iter().any(|id| id == token_id) }
}

/// Combines edges into one: ids and labels are united, the result is manual
/// if any of the edges is, and comments are joined by a blank line.
///
/// Merging nothing gives the empty, automatic edge `e-`.
pub fn merge_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Edge {
    let mut ids = Vec::new();
    let mut labels = Vec::new();
    let mut manual = false;
    let mut comments: Vec<&str> = Vec::new();

    for edge in edges {
        ids.extend(edge.ids.iter().cloned());
        labels.extend(edge.labels.iter().cloned());
        manual |= edge.manual;
        comments.extend(edge.comment.as_deref());
    }

    let comment = (!comments.is_empty()).then(|| comments.join("\n\n"));

    Edge::new(ids, labels, manual, comment)
}

/// Keys edges by their id.
pub fn edge_record(edges: impl IntoIterator<Item = Edge>) -> Edges {
    edges
        .into_iter()
        .map(|edge| (edge.id.clone(), edge))
        .collect()
}

/// Text of a token together with the labels of its edge, used to build
/// graphs from unaligned tokens.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLabels {
    pub text: String,
    pub labels: Vec<String>,
}

impl TextLabels {
    pub fn new(text: impl Into<String>, labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            text: text.into(),
            labels: labels.into_iter().collect(),
        }
    }
}
