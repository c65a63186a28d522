// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Symbol-to-digraph assembly.
//!
//! Walks a validated [`Symbol`] and produces a [`Digraph`]: one node per
//! visible record (keyed by record name) and one edge per resolvable
//! dependency. Edges are constructed consumer→producer and drawn with a
//! reversed arrowhead (`dir=back`), so the rendered arrow appears to flow
//! producer→consumer. Dependencies on hidden placeholders are dropped, not
//! rerouted.

use crate::dot::{Attrs, Digraph};
use crate::style::node_style;
use symbol_ir::Symbol;

/// Default node attributes, copied (not shared) for every node.
const NODE_DEFAULTS: [(&str, &str); 5] = [
    ("shape", "box"),
    ("fixedsize", "true"),
    ("width", "1.3"),
    ("height", "0.8034"),
    ("style", "filled"),
];

/// Attributes shared by all dependency edges.
const EDGE_ATTRS: [(&str, &str); 2] = [("dir", "back"), ("arrowtail", "open")];

/// Builds a renderable digraph from a symbol.
///
/// `node_attrs` are caller overrides merged on top of the built-in node
/// defaults; keys already present are replaced, new keys appended.
pub fn plot_network(symbol: &Symbol, title: &str, node_attrs: &[(&str, &str)]) -> Digraph {
    let base_attrs = merged_defaults(node_attrs);
    let mut dot = Digraph::new(title);

    // Nodes: every visible record, styled by operator kind.
    for (i, node) in symbol.nodes.iter().enumerate() {
        let Some(style) = node_style(node, symbol.heads.contains(&i)) else {
            continue;
        };
        let mut attrs = base_attrs.clone();
        attrs.push(("label".to_string(), style.label));
        attrs.push(("fillcolor".to_string(), style.fillcolor.to_string()));
        dot.node(&node.name, attrs);
    }

    // Edges: consumer → producer, skipping hidden placeholders.
    let edge_attrs: Attrs = EDGE_ATTRS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for node in &symbol.nodes {
        if node.op.is_null() {
            continue;
        }
        for &index in &node.inputs {
            // Indices were bounds-checked at parse time.
            let producer = &symbol.nodes[index];
            if producer.op.is_null() && !symbol.heads.contains(&index) {
                tracing::debug!(
                    "dropping edge from '{}' into hidden placeholder '{}'",
                    node.name,
                    producer.name,
                );
                continue;
            }
            dot.edge(&node.name, &producer.name, edge_attrs.clone());
        }
    }

    dot
}

/// Merges caller overrides onto a fresh copy of the node defaults.
fn merged_defaults(overrides: &[(&str, &str)]) -> Attrs {
    let mut attrs: Attrs = NODE_DEFAULTS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (key, value) in overrides {
        match attrs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.to_string(),
            None => attrs.push((key.to_string(), value.to_string())),
        }
    }
    attrs
}
