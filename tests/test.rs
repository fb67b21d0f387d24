
use std::{fs, path::Path};

use example_document::ExampleDocument;
use parallel_corpus::Graph;
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[test]
fn test_documents() {
    for doc in &get_all_documents() {
        doc.assert_eq(&doc.run());
    }
}

#[test]
fn test_documents_are_aligned() {
    for doc in &get_all_documents() {
        let graph = doc.run();
        assert_eq!(graph.align(), graph, "{}", doc.name());
    }
}

#[test]
fn test_every_token_has_exactly_one_edge() {
    for doc in &get_all_documents() {
        let graph = doc.run();
        let edge_map = graph.edge_map();

        for token in graph.source().iter().chain(graph.target()) {
            assert!(
                edge_map.contains_key(token.id()),
                "{}: {} has no edge",
                doc.name(),
                token.id()
            );
        }

        let linked: usize = graph.edges().values().map(|edge| edge.ids().len()).sum();
        assert_eq!(
            linked,
            graph.source().len() + graph.target().len(),
            "{}",
            doc.name()
        );
    }
}

#[test]
fn test_edits_keep_the_original_graph() {
    let graph = Graph::init("apa bepa cepa");
    let before = graph.clone();

    let _ = graph.set_target("apa cepa").unwrap();
    let _ = graph.rearrange(0, 1, 3).unwrap();

    assert_eq!(graph, before);
}

fn get_all_documents() -> Vec<ExampleDocument> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let doc =
                    ExampleDocument::deserialize(document).expect("Failed to deserialize document");
                documents.push(doc);
            }
        }
    }

    assert!(!documents.is_empty(), "No example documents found");

    documents
}
