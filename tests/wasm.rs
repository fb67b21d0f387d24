#![cfg(feature = "wasm")]

use parallel_corpus::{Side, wasm::*};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_from_text() {
    let graph = WasmGraph::from_text("apa bepa");

    assert_eq!(graph.source_text(), "apa bepa ");
    assert_eq!(graph.target_text(), "apa bepa ");
    assert_eq!(graph.edge_ids(), ["e-s0-t0", "e-s1-t1"]);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_edits() {
    let graph = WasmGraph::new("apa bepa cepa depa", "apa bepa cepa depa")
        .rearrange(1, 2, 0)
        .unwrap()
        .modify(0, 0, "x", Side::Target)
        .unwrap();

    assert_eq!(graph.target_text(), "xbepa cepa apa depa ");
    assert_eq!(graph.source_text(), "apa bepa cepa depa ");

    let graph = graph.set_source("apa bepa cepa").unwrap();
    assert_eq!(graph.source_text(), "apa bepa cepa ");

    let graph = graph.set_target("apa").unwrap();
    assert_eq!(graph.target_text(), "apa ");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_json_round_trip() {
    let graph = WasmGraph::from_text("apa bepa").set_target("apa cepa").unwrap();
    let json = graph.to_json().unwrap();

    assert_eq!(WasmGraph::from_json(&json).unwrap(), graph);
}
