mod diffs;
mod edit_range;
mod errors;
mod graph;
mod tokenizer;
mod types;
mod utils;

pub use diffs::{Change, ChangeType, hdiff, token_diff};
pub use edit_range::{EditRange, edit_range};
pub use errors::GraphError;
pub use graph::{Edge, Edges, Graph, TextLabels, edge_record, merge_edges};
pub use tokenizer::{
    token::{Token, TokenAt, identify, text, texts, token_at},
    whitespace_tokenizer::{end_with_space, tokenize},
};
pub use types::{side::Side, source_target::SourceTarget};
pub use utils::{
    ids::next_id,
    union_find::{PolyUnionFind, Renumber, UnionFind},
};

#[cfg(feature = "wasm")]
pub mod wasm;
