use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    Change, Edge, Graph, PolyUnionFind, SourceTarget, Token, hdiff,
    graph::{edge_record, merge_edges},
    utils::unique_check::UniqueCheck,
};

/// A character of a token, remembering which token it came from. Spaces
/// don't remember, so they never link tokens.
#[derive(Debug, Clone, Copy)]
struct CharId<'a> {
    char: char,
    id: Option<&'a str>,
}

fn char_ids(token: &Token) -> impl Iterator<Item = CharId<'_>> {
    token.text().chars().map(|char| CharId {
        char,
        id: (char != ' ').then_some(token.id()),
    })
}

impl Graph {
    /// Recomputes the automatic edges from a character diff of the tokens
    /// that aren't part of a manual edge.
    ///
    /// Source and target tokens sharing a character in the diff end up in
    /// the same edge. Manual edges are kept as they are. The labels and the
    /// comment of a previous edge are carried over by the first of its tokens.
    #[must_use]
    pub fn align(&self) -> Graph {
        let edge_map = self.edge_map();
        let is_manual =
            |token: &Token| edge_map.get(token.id()).is_some_and(|edge| edge.is_manual());

        let chars = SourceTarget::new(&self.source, &self.target).map_sides(|tokens, _| {
            tokens
                .iter()
                .filter(|&token| !is_manual(token))
                .flat_map(char_ids)
                .collect::<Vec<_>>()
        });

        let mut groups: PolyUnionFind<&str> = PolyUnionFind::new();
        for change in hdiff(&chars.source, &chars.target, |a| a.char, |b| b.char) {
            if let Change::Constant(
                CharId { id: Some(a), .. },
                CharId { id: Some(b), .. },
            ) = change
            {
                trace!("Linking {a} and {b}");
                groups.union(&a, &b);
            }
        }

        let mut first = UniqueCheck::default();
        let mut rebuilt: HashMap<&str, Edge> = HashMap::new();

        for token in self.source.iter().chain(&self.target) {
            let previous = edge_map.get(token.id()).copied();
            if previous.is_some_and(Edge::is_manual) {
                continue;
            }

            let (labels, comment) = match previous {
                Some(edge) if first.check(edge.id()) => (
                    edge.labels().to_vec(),
                    edge.comment().map(str::to_owned),
                ),
                _ => (Vec::new(), None),
            };
            let token_edge = Edge::new([token.id().to_owned()], labels, false, comment);

            let group = groups.find(&token.id());
            let merged = match rebuilt.remove(group) {
                Some(edge) => merge_edges([&edge, &token_edge]),
                None => token_edge,
            };
            rebuilt.insert(group, merged);
        }

        debug!("Aligned tokens into {} automatic edges", rebuilt.len());

        let manual_edges = self.edges.values().filter(|edge| edge.is_manual()).cloned();
        self.with_edges(edge_record(manual_edges.chain(rebuilt.into_values())))
    }
}
