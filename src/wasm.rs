//! Expose the alignment graph to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{Graph, Side};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around [`Graph`]. Every edit returns a new graph and leaves
/// the original untouched.
#[wasm_bindgen(js_name = Graph)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WasmGraph {
    graph: Graph,
}

#[wasm_bindgen(js_class = Graph)]
impl WasmGraph {
    /// Aligns `source` with `target`.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(source: &str, target: &str) -> WasmGraph {
        set_panic_hook();

        Graph::init_with_source_and_target(source, target).into()
    }

    /// Starts with the same text on both sides.
    #[wasm_bindgen(js_name = fromText)]
    #[must_use]
    pub fn from_text(text: &str) -> WasmGraph {
        set_panic_hook();

        Graph::init(text).into()
    }

    /// Parses a graph serialized by `toJson`.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmGraph, JsError> {
        set_panic_hook();

        Ok(serde_json::from_str::<Graph>(json)?.into())
    }

    /// Replaces the characters `from..to` of a side.
    pub fn modify(&self, from: usize, to: usize, text: &str, side: Side) -> Result<WasmGraph, JsError> {
        Ok(self.graph.modify(from, to, text, side)?.into())
    }

    #[wasm_bindgen(js_name = setSource)]
    pub fn set_source(&self, text: &str) -> Result<WasmGraph, JsError> {
        Ok(self.graph.set_source(text)?.into())
    }

    #[wasm_bindgen(js_name = setTarget)]
    pub fn set_target(&self, text: &str) -> Result<WasmGraph, JsError> {
        Ok(self.graph.set_target(text)?.into())
    }

    /// Moves the target tokens `begin..=end` to `dest`.
    pub fn rearrange(&self, begin: usize, end: usize, dest: usize) -> Result<WasmGraph, JsError> {
        Ok(self.graph.rearrange(begin, end, dest)?.into())
    }

    #[wasm_bindgen(js_name = sourceText)]
    #[must_use]
    pub fn source_text(&self) -> String { self.graph.source_text() }

    #[wasm_bindgen(js_name = targetText)]
    #[must_use]
    pub fn target_text(&self) -> String { self.graph.target_text() }

    /// Ids of the edges, in order.
    #[wasm_bindgen(js_name = edgeIds)]
    #[must_use]
    pub fn edge_ids(&self) -> Vec<String> { self.graph.edges().keys().cloned().collect() }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> { Ok(serde_json::to_string(&self.graph)?) }
}

impl WasmGraph {
    #[must_use]
    pub fn graph(&self) -> &Graph { &self.graph }
}

impl From<Graph> for WasmGraph {
    fn from(graph: Graph) -> Self { Self { graph } }
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
