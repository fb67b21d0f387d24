use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Side, SourceTarget,
    tokenizer::{
        token::{Token, identify, text, texts},
        whitespace_tokenizer::tokenize,
    },
    utils::ids,
};

mod align;
mod edge;
mod modify;
mod rearrange;

pub use edge::{Edge, Edges, TextLabels, edge_record, merge_edges};

/// Token-level alignment between a source text and a target text.
///
/// Every token of either side belongs to exactly one edge. Graphs are
/// values: operations return a new graph and leave `self` untouched.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    source: Vec<Token>,
    target: Vec<Token>,
    edges: Edges,
    comment: Option<String>,
}

impl Graph {
    /// Creates a graph as-is, without aligning it.
    pub fn new(source: Vec<Token>, target: Vec<Token>, edges: Edges) -> Self {
        Self {
            source,
            target,
            edges,
            comment: None,
        }
    }

    /// Starts with identical source and target texts.
    ///
    /// ```
    /// use parallel_corpus::Graph;
    ///
    /// let graph = Graph::init("w1 w2");
    /// assert_eq!(graph.source_text(), "w1 w2 ");
    /// assert_eq!(graph.edges().keys().collect::<Vec<_>>(), ["e-s0-t0", "e-s1-t1"]);
    /// ```
    #[must_use]
    pub fn init(text: &str) -> Self { Self::init_from(&tokenize(text), false) }

    #[must_use]
    pub fn init_with_source_and_target(source: &str, target: &str) -> Self {
        Self::init_from_source_and_target(&tokenize(source), &tokenize(target), false)
    }

    /// Starts with the same pre-tokenized text on both sides, the `i`-th
    /// source token linked to the `i`-th target token.
    #[must_use]
    pub fn init_from<S: AsRef<str>>(tokens: &[S], manual: bool) -> Self {
        Self::init_from_source_and_target(tokens, tokens, manual)
    }

    /// Starts from pre-tokenized texts. Tokens with the same index are linked
    /// and the tokens of the longer side left over get an edge of their own.
    #[must_use]
    pub fn init_from_source_and_target<S: AsRef<str>>(
        source: &[S],
        target: &[S],
        manual: bool,
    ) -> Self {
        let source = identify(source, Side::Source.prefix());
        let target = identify(target, Side::Target.prefix());

        let edges = edge_record((0..source.len().max(target.len())).map(|i| {
            let ids = [source.get(i), target.get(i)]
                .into_iter()
                .flatten()
                .map(|token| token.id().to_owned());
            Edge::new(ids, [], manual, None)
        }));

        Self::new(source, target, edges).align()
    }

    /// Builds an aligned graph from unaligned tokens. The labels of each token
    /// go on its initial edge.
    #[must_use]
    pub fn from_unaligned(tokens: SourceTarget<Vec<TextLabels>>) -> Self {
        let mut edges = Edges::new();

        let sides = tokens.map_sides(|tokens, side| {
            tokens
                .into_iter()
                .enumerate()
                .map(|(i, TextLabels { text, labels })| {
                    let id = format!("{}{i}", side.prefix());
                    let edge = Edge::new([id.clone()], labels, false, None);
                    edges.insert(edge.id().to_owned(), edge);
                    Token::new(text, id)
                })
                .collect::<Vec<_>>()
        });

        Self::new(sides.source, sides.target, edges).align()
    }

    #[must_use]
    pub fn with_comment(self, comment: Option<String>) -> Self { Self { comment, ..self } }

    pub fn source(&self) -> &[Token] { &self.source }

    pub fn target(&self) -> &[Token] { &self.target }

    pub fn edges(&self) -> &Edges { &self.edges }

    pub fn comment(&self) -> Option<&str> { self.comment.as_deref() }

    pub fn get_side(&self, side: Side) -> &[Token] {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    pub fn get_side_text(&self, side: Side) -> String { text(self.get_side(side)) }

    pub fn get_side_texts(&self, side: Side) -> Vec<&str> { texts(self.get_side(side)) }

    pub fn source_text(&self) -> String { self.get_side_text(Side::Source) }

    pub fn target_text(&self) -> String { self.get_side_text(Side::Target) }

    /// The first number not used in any token id, on either side.
    pub fn next_id(&self) -> usize {
        ids::next_id(self.target.iter().chain(&self.source).map(Token::id))
    }

    /// Maps token ids to the edge containing them.
    pub fn edge_map(&self) -> HashMap<&str, &Edge> {
        self.edges
            .values()
            .flat_map(|edge| edge.ids().iter().map(move |id| (id.as_str(), edge)))
            .collect()
    }

    fn with_edges(&self, edges: Edges) -> Self {
        Self {
            source: self.source.clone(),
            target: self.target.clone(),
            edges,
            comment: self.comment.clone(),
        }
    }

    fn with_side_and_edges(&self, side: Side, tokens: Vec<Token>, edges: Edges) -> Self {
        let (source, target) = match side {
            Side::Source => (tokens, self.target.clone()),
            Side::Target => (self.source.clone(), tokens),
        };

        Self {
            source,
            target,
            edges,
            comment: self.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn labelled(text: &str, labels: &[&str]) -> TextLabels {
        TextLabels::new(text, labels.iter().map(|&label| label.to_owned()))
    }

    #[test]
    fn test_init() {
        let graph = Graph::init("w1 w2");

        assert_debug_snapshot!(graph, @r#"
        Graph {
            source: [
                Token {
                    text: "w1 ",
                    id: "s0",
                },
                Token {
                    text: "w2 ",
                    id: "s1",
                },
            ],
            target: [
                Token {
                    text: "w1 ",
                    id: "t0",
                },
                Token {
                    text: "w2 ",
                    id: "t1",
                },
            ],
            edges: {
                "e-s0-t0": Edge {
                    id: "e-s0-t0",
                    ids: [
                        "s0",
                        "t0",
                    ],
                    labels: [],
                    manual: false,
                    comment: None,
                },
                "e-s1-t1": Edge {
                    id: "e-s1-t1",
                    ids: [
                        "s1",
                        "t1",
                    ],
                    labels: [],
                    manual: false,
                    comment: None,
                },
            },
            comment: None,
        }
        "#);
    }

    #[test]
    fn test_init_empty() {
        let graph = Graph::init("");

        assert!(graph.source().is_empty());
        assert!(graph.target().is_empty());
        assert!(graph.edges().is_empty());
        assert_eq!(graph.next_id(), 0);
    }

    #[test]
    fn test_init_with_source_and_target() {
        let graph = Graph::init_with_source_and_target("apa bepa", "apa cepa bepa");

        assert_eq!(graph.source_text(), "apa bepa ");
        assert_eq!(graph.target_text(), "apa cepa bepa ");
        assert_eq!(
            graph.edges().keys().collect::<Vec<_>>(),
            ["e-s0-t0", "e-s1-t2", "e-t1"]
        );
    }

    #[test]
    fn test_init_from_manual() {
        let graph = Graph::init_from_source_and_target(&["apa ", "bepa "], &["cepa "], true);

        assert_eq!(
            graph.edges().keys().collect::<Vec<_>>(),
            ["e-s0-t0", "e-s1"]
        );
        assert!(graph.edges().values().all(Edge::is_manual));
    }

    #[test]
    fn test_from_unaligned() {
        let graph = Graph::from_unaligned(SourceTarget::new(
            vec![labelled("apa ", &["x"]), labelled("bepa ", &[])],
            vec![labelled("apa ", &["y"]), labelled("bepa ", &["z"])],
        ));

        let edges: Vec<_> = graph.edges().values().collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].id(), "e-s0-t0");
        assert_eq!(edges[0].labels(), ["x", "y"]);
        assert_eq!(edges[1].id(), "e-s1-t1");
        assert_eq!(edges[1].labels(), ["z"]);
    }

    #[test]
    fn test_next_id_is_shared_between_sides() {
        let graph = Graph::init_with_source_and_target("a b c d", "a");

        assert_eq!(graph.next_id(), 4);
    }

    #[test]
    fn test_edge_map() {
        let graph = Graph::init("apa bepa");
        let edge_map = graph.edge_map();

        assert_eq!(edge_map.len(), 4);
        assert_eq!(edge_map["s1"].id(), "e-s1-t1");
        assert_eq!(edge_map["t0"].id(), "e-s0-t0");
    }

    #[test]
    fn test_comment_is_kept() {
        let graph = Graph::init("apa").with_comment(Some("checked".to_owned()));

        assert_eq!(graph.comment(), Some("checked"));
        assert_eq!(graph.align().comment(), Some("checked"));
    }
}
