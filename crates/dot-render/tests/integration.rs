// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end visualization pipeline.
//!
//! Exercises the complete flow from file loading → symbol parsing →
//! graph assembly → DOT emission, over a LeNet-style network that covers
//! every operator category.

use dot_render::{plot_network, PALETTE};
use std::collections::HashMap;
use symbol_ir::{SymbolError, SymbolLoader};

// ── Helpers ────────────────────────────────────────────────────

/// A LeNet-style symbol: conv/pool/activation stack, flatten, dense
/// layers, softmax output, with hidden weight/bias placeholders.
fn lenet_json() -> &'static str {
    r#"{
        "nodes": [
            { "op": "null", "name": "data", "inputs": [] },
            { "op": "null", "name": "conv1_weight", "inputs": [] },
            { "op": "null", "name": "conv1_bias", "inputs": [] },
            {
                "op": "Convolution", "name": "conv1",
                "inputs": [[0, 0], [1, 0], [2, 0]],
                "param": { "kernel": "(5, 5)", "stride": "(1, 1)", "num_filter": "20" }
            },
            {
                "op": "Activation", "name": "act1", "inputs": [[3, 0]],
                "param": { "act_type": "tanh" }
            },
            {
                "op": "Pooling", "name": "pool1", "inputs": [[4, 0]],
                "param": { "pool_type": "max", "kernel": "(2, 2)", "stride": "(2, 2)" }
            },
            { "op": "Flatten", "name": "flatten", "inputs": [[5, 0]] },
            { "op": "null", "name": "fc1_weight", "inputs": [] },
            {
                "op": "FullyConnected", "name": "fc1", "inputs": [[6, 0], [7, 0]],
                "param": { "num_hidden": "500" }
            },
            { "op": "BatchNorm", "name": "bn1", "inputs": [[8, 0]] },
            { "op": "Softmax", "name": "softmax", "inputs": [[9, 0]] }
        ],
        "heads": [[0]]
    }"#
}

fn write_container(path: &std::path::Path, dataset: &str, payload: &[u8]) {
    let view = safetensors::tensor::TensorView::new(
        safetensors::Dtype::U8,
        vec![payload.len()],
        payload,
    )
    .unwrap();
    let mut tensors = HashMap::new();
    tensors.insert(dataset.to_string(), view);
    std::fs::write(path, safetensors::serialize(tensors, &None).unwrap()).unwrap();
}

// ── Tests ──────────────────────────────────────────────────────

#[test]
fn test_json_file_to_dot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lenet.json");
    std::fs::write(&path, lenet_json()).unwrap();

    let symbol = SymbolLoader::load(&path).unwrap();
    assert_eq!(symbol.num_nodes(), 11);
    // data is a head; the three weight/bias placeholders are hidden.
    assert_eq!(symbol.num_visible(), 8);

    let graph = plot_network(&symbol, "lenet", &[]);
    assert_eq!(graph.nodes().len(), 8);

    let hidden = ["conv1_weight", "conv1_bias", "fc1_weight"];
    for node in graph.nodes() {
        assert!(!hidden.contains(&node.name.as_str()));
    }
    for edge in graph.edges() {
        assert!(!hidden.contains(&edge.head.as_str()));
        assert!(!hidden.contains(&edge.tail.as_str()));
    }

    // Linear chain: each compute node keeps exactly its one visible input.
    let pairs: Vec<(&str, &str)> = graph
        .edges()
        .iter()
        .map(|e| (e.tail.as_str(), e.head.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("conv1", "data"),
            ("act1", "conv1"),
            ("pool1", "act1"),
            ("flatten", "pool1"),
            ("fc1", "flatten"),
            ("bn1", "fc1"),
            ("softmax", "bn1"),
        ]
    );

    let dot = graph.to_dot();
    assert!(dot.starts_with("digraph \"lenet\" {"));
    assert!(dot.contains("label=\"Convolution\\n5x5/1, 20\""));
    assert!(dot.contains("label=\"Pooling\\nmax, 2x2/2\""));
    assert!(dot.contains("label=\"FullyConnected\\n500\""));
    assert!(dot.contains("label=\"Activation\\ntanh\""));
    assert!(dot.contains(&format!("fillcolor=\"{}\"", PALETTE[0])));
    assert!(dot.contains("\"conv1\" -> \"data\" [dir=\"back\" arrowtail=\"open\"];"));
}

#[test]
fn test_container_to_dot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lenet.safetensors");
    write_container(&path, "network", lenet_json().as_bytes());

    let symbol = SymbolLoader::load(&path).unwrap();
    let graph = plot_network(&symbol, "lenet", &[]);
    assert_eq!(graph.nodes().len(), 8);
    assert_eq!(graph.edges().len(), 7);
}

#[test]
fn test_container_without_dataset_never_reaches_plotting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lenet.safetensors");
    write_container(&path, "weights", lenet_json().as_bytes());

    let err = SymbolLoader::load(&path).unwrap_err();
    assert!(matches!(err, SymbolError::Format { .. }));
}

#[test]
fn test_caller_overrides_apply_to_all_nodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lenet.json");
    std::fs::write(&path, lenet_json()).unwrap();

    let symbol = SymbolLoader::load(&path).unwrap();
    let graph = plot_network(&symbol, "lenet", &[("shape", "rect"), ("fixedsize", "false")]);
    for node in graph.nodes() {
        let shape = node.attrs.iter().find(|(k, _)| k == "shape").unwrap();
        assert_eq!(shape.1, "rect");
    }
}
