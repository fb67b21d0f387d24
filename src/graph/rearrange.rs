use log::debug;

use crate::{
    Edge, GraphError, Side,
    graph::{Graph, merge_edges},
    utils::lists,
};

impl Graph {
    /// Moves the target tokens `begin..=end` to `dest`, then realigns.
    ///
    /// The edges of the moved tokens become manual so that the move isn't
    /// undone by the alignment.
    pub fn rearrange(&self, begin: usize, end: usize, dest: usize) -> Result<Graph, GraphError> {
        Ok(self.unaligned_rearrange(begin, end, dest)?.align())
    }

    /// Moves the target tokens `begin..=end` to `dest` without realigning.
    ///
    /// ```
    /// use parallel_corpus::Graph;
    ///
    /// let graph = Graph::init("apa bepa cepa depa");
    /// let moved = graph.unaligned_rearrange(1, 2, 0).unwrap();
    /// assert_eq!(moved.target_text(), "bepa cepa apa depa ");
    /// ```
    pub fn unaligned_rearrange(
        &self,
        begin: usize,
        end: usize,
        dest: usize,
    ) -> Result<Graph, GraphError> {
        let length = self.target.len();
        if begin > end || end >= length || dest > length {
            return Err(GraphError::InvalidRearrange {
                begin,
                end,
                dest,
                length,
            });
        }

        let manual = Edge::new([], [], true, None);
        let mut edges = self.edges.clone();
        for token in &self.target[begin..=end] {
            let Some((id, edge)) = edges.iter_mut().find(|(_, edge)| edge.contains(token.id())) else {
                continue;
            };
            if !edge.is_manual() {
                debug!("Marking {id} manual");
                *edge = merge_edges([&*edge, &manual]);
            }
        }

        let target = lists::rearrange(&self.target, begin, end, dest);
        Ok(self.with_side_and_edges(Side::Target, target, edges))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::tokenize;

    fn manual_edge_ids(graph: &Graph) -> Vec<&str> {
        graph
            .edges()
            .values()
            .filter(|edge| edge.is_manual())
            .map(Edge::id)
            .collect()
    }

    #[test]
    fn test_rearrange() {
        let graph = Graph::init("apa bepa cepa depa").rearrange(1, 2, 0).unwrap();

        assert_eq!(graph.target_text(), "bepa cepa apa depa ");
        assert_eq!(graph.source_text(), "apa bepa cepa depa ");
        assert_eq!(
            graph.edges().keys().collect::<Vec<_>>(),
            ["e-s0-t0", "e-s1-t1", "e-s2-t2", "e-s3-t3"]
        );
        assert_eq!(manual_edge_ids(&graph), ["e-s1-t1", "e-s2-t2"]);
    }

    #[test]
    fn test_rearrange_then_modify_manual_graph() {
        let graph = Graph::init_from(&tokenize("aporna bepa cepa depa"), true)
            .rearrange(1, 2, 0)
            .unwrap()
            .modify(10, 10, "h", Side::Target)
            .unwrap();

        assert_eq!(graph.target_text(), "bepa cepa haporna depa ");
        assert_eq!(
            graph.edges().keys().collect::<Vec<_>>(),
            ["e-s0-t4", "e-s1-t1", "e-s2-t2", "e-s3-t3"]
        );
        assert_eq!(manual_edge_ids(&graph), ["e-s1-t1", "e-s2-t2", "e-s3-t3"]);
    }

    #[test]
    fn test_rearrange_to_same_place_keeps_order() {
        let graph = Graph::init("apa bepa cepa depa");

        assert_eq!(graph.rearrange(1, 2, 1).unwrap().target_text(), "apa bepa cepa depa ");
        assert_eq!(graph.rearrange(1, 2, 4).unwrap().target_text(), "apa depa bepa cepa ");
    }

    #[test_case(2, 1, 0 ; "inverted")]
    #[test_case(1, 4, 0 ; "end past the last token")]
    #[test_case(0, 1, 5 ; "destination past the end")]
    fn test_invalid_rearrange(begin: usize, end: usize, dest: usize) {
        let graph = Graph::init("apa bepa cepa depa");

        assert_eq!(
            graph.rearrange(begin, end, dest),
            Err(GraphError::InvalidRearrange {
                begin,
                end,
                dest,
                length: 4
            })
        );
    }
}
