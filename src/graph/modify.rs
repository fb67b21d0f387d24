use std::collections::HashSet;

use log::{debug, warn};

use crate::{
    Edge, Edges, GraphError, Side, Token,
    edit_range::{EditRange, edit_range},
    graph::Graph,
    tokenizer::{token::token_at, whitespace_tokenizer::tokenize},
    utils::lists::splice,
};

fn is_all_whitespace(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

fn ends_with_non_whitespace(text: &str) -> bool {
    text.chars().last().is_some_and(|c| !c.is_whitespace())
}

impl Graph {
    /// Replaces the characters `from..to` of a side with `text`, then
    /// realigns.
    ///
    /// Offsets are character offsets into the current text of `side`.
    pub fn modify(&self, from: usize, to: usize, text: &str, side: Side) -> Result<Graph, GraphError> {
        Ok(self.unaligned_modify(from, to, text, side)?.align())
    }

    /// Replaces the whole source text, editing only the range that changed.
    pub fn set_source(&self, text: &str) -> Result<Graph, GraphError> {
        Ok(self.unaligned_set_side(Side::Source, text)?.align())
    }

    /// Replaces the whole target text, editing only the range that changed.
    pub fn set_target(&self, text: &str) -> Result<Graph, GraphError> {
        Ok(self.unaligned_set_side(Side::Target, text)?.align())
    }

    pub fn unaligned_set_side(&self, side: Side, text: &str) -> Result<Graph, GraphError> {
        let EditRange { from, to, insert } = edit_range(&self.get_side_text(side), text);

        self.unaligned_modify(from, to, &insert, side)
    }

    /// Replaces the characters `from..to` of a side with `text`, merging the
    /// edges of the tokens it touches, without realigning.
    ///
    /// The tokens only partially covered by the range are replaced too, with
    /// their uncovered text kept around `text`.
    ///
    /// ```not_rust
    /// "test graph hello ", 0, 0, "new"   -> ["newtest ", "graph ", "hello "]
    /// "test graph hello ", 0, 5, "new"   -> ["newgraph ", "hello "]
    /// "test graph hello ", 5, 6, " "     -> ["test ", " raph ", "hello "]
    /// "test graph hello ", 0, 15, "_"    -> ["_o "]
    /// "test graph hello ", 16, 16, " !"  -> ["test ", "graph ", "hello ", "! "]
    /// ```
    pub fn unaligned_modify(
        &self,
        from: usize,
        to: usize,
        text: &str,
        side: Side,
    ) -> Result<Graph, GraphError> {
        let tokens = self.get_side_texts(side);
        let length = tokens.iter().map(|token| token.chars().count()).sum();
        if from > to || to > length {
            return Err(GraphError::InvalidCharacterRange { from, to, length });
        }

        let from_at = token_at(&tokens, from)?;
        let pre: String = tokens
            .get(from_at.token)
            .map(|token| token.chars().take(from_at.offset).collect())
            .unwrap_or_default();

        if to == length {
            return self.unaligned_modify_tokens(from_at.token, tokens.len(), &(pre + text), side);
        }

        let to_at = token_at(&tokens, to)?;
        let post: String = tokens
            .get(to_at.token)
            .map(|token| token.chars().skip(to_at.offset).collect())
            .unwrap_or_default();

        self.unaligned_modify_tokens(from_at.token, to_at.token + 1, &format!("{pre}{text}{post}"), side)
    }

    /// Replaces the tokens `from..to` of a side with the tokens of `text`,
    /// merging the edges of the removed tokens into one edge for the new
    /// tokens, without realigning.
    ///
    /// Text that can't make up tokens of its own is glued to the neighbouring
    /// tokens first: whitespace goes onto the previous token (or the next one
    /// at the start), text not ending in whitespace takes the next token
    /// along, and text appended at the end joins the last token.
    ///
    /// ```not_rust
    /// "test graph hello ", 0, 1, "this "  -> ["this ", "graph ", "hello "]
    /// "test graph hello ", 0, 1, "this"   -> ["thisgraph ", "hello "]
    /// "test graph hello ", 1, 3, "  "     -> ["test   "]
    /// "test graph hello ", 3, 3, " !"     -> ["test ", "graph ", "hello  ", "! "]
    /// ```
    pub fn unaligned_modify_tokens(
        &self,
        from: usize,
        to: usize,
        text: &str,
        side: Side,
    ) -> Result<Graph, GraphError> {
        let tokens = self.get_side(side);
        let length = tokens.len();
        if from > to || to > length {
            return Err(GraphError::InvalidTokenRange { from, to, length });
        }

        let (mut from, mut to, mut text) = (from, to, text.to_owned());
        loop {
            if is_all_whitespace(&text) {
                if from > 0 {
                    debug!("Gluing whitespace onto the previous {side} token");
                    from -= 1;
                    text.insert_str(0, tokens[from].text());
                    continue;
                }

                if to < length {
                    debug!("Gluing whitespace onto the next {side} token");
                    text.push_str(tokens[to].text());
                    to += 1;
                    continue;
                }

                warn!("Introducing whitespace into an empty {side}");
            }

            if ends_with_non_whitespace(&text) && to < length {
                debug!("Gluing the next {side} token onto an unfinished word");
                text.push_str(tokens[to].text());
                to += 1;
                continue;
            }

            if from > 0 && from == length && to == length {
                debug!("Gluing text appended to the {side} onto its last token");
                from -= 1;
                text.insert_str(0, tokens[from].text());
                continue;
            }

            break;
        }

        let id_offset = self.next_id();
        let new_tokens: Vec<Token> = tokenize(&text)
            .into_iter()
            .enumerate()
            .map(|(i, text)| Token::new(text, format!("{}{}", side.prefix(), id_offset + i)))
            .collect();

        let (side_tokens, removed) = splice(tokens, from, to - from, new_tokens.iter().cloned());
        let removed_ids: HashSet<&str> = removed.iter().map(Token::id).collect();

        let mut merged_ids: Vec<String> = new_tokens.iter().map(|token| token.id().to_owned()).collect();
        let mut merged_labels: Vec<String> = Vec::new();
        let mut edges = Edges::new();

        for (id, edge) in &self.edges {
            if edge.ids().iter().any(|id| removed_ids.contains(id.as_str())) {
                merged_ids.extend(
                    edge.ids()
                        .iter()
                        .filter(|id| !removed_ids.contains(id.as_str()))
                        .cloned(),
                );
                merged_labels.extend(edge.labels().iter().cloned());
            } else {
                edges.insert(id.clone(), edge.clone());
            }
        }

        if !merged_ids.is_empty() {
            let edge = Edge::new(merged_ids, merged_labels, false, None);
            edges.insert(edge.id().to_owned(), edge);
        }

        Ok(self.with_side_and_edges(side, side_tokens, edges))
    }
}
