// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The parsed network symbol: an arena of operator records plus head indices.
//!
//! # Format
//! ```json
//! {
//!   "nodes": [
//!     { "op": "null", "name": "data", "inputs": [] },
//!     {
//!       "op": "Convolution", "name": "conv1", "inputs": [[0, 0]],
//!       "param": { "kernel": "(3,3)", "stride": "(1,1)", "num_filter": "16" }
//!     }
//!   ],
//!   "heads": [[0]]
//! }
//! ```
//!
//! Nodes reference each other positionally: each `inputs` entry is a pair
//! whose first element is an index into `nodes`. The first `heads` entry
//! lists the indices of no-op nodes that are real graph inputs/outputs and
//! should be drawn; every other no-op is internal bookkeeping and is hidden.
//!
//! All structural validation happens here, at parse time: out-of-bounds
//! references, missing operator parameters, and duplicate names among
//! rendered nodes are rejected before any drawing starts.

use crate::{OpKind, SymbolError};
use std::collections::{HashMap, HashSet};

/// Raw document shape, straight from serde.
#[derive(serde::Deserialize)]
struct RawSymbol {
    nodes: Vec<RawNode>,
    heads: Vec<Vec<usize>>,
}

/// A single raw node entry.
#[derive(serde::Deserialize)]
struct RawNode {
    op: String,
    name: String,
    inputs: Vec<Vec<usize>>,
    #[serde(default)]
    param: HashMap<String, serde_json::Value>,
}

/// One operator record in the symbol's node list.
#[derive(Debug, Clone)]
pub struct NodeRecord {
    /// Unique display identifier; becomes the graph node key.
    pub name: String,
    /// The operator this node represents, with its parameters.
    pub op: OpKind,
    /// Indices of the records this node consumes.
    pub inputs: Vec<usize>,
}

/// A validated network symbol.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Ordered node list; indices in `inputs` and `heads` point into it.
    pub nodes: Vec<NodeRecord>,
    /// Indices of no-op nodes that should be rendered.
    pub heads: HashSet<usize>,
}

impl Symbol {
    /// Parses and validates a symbol from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, SymbolError> {
        let raw: RawSymbol = serde_json::from_str(text)?;

        let heads: HashSet<usize> = raw
            .heads
            .first()
            .ok_or_else(|| SymbolError::Parse("'heads' must contain at least one entry".into()))?
            .iter()
            .copied()
            .collect();

        let len = raw.nodes.len();
        for &head in &heads {
            if head >= len {
                tracing::warn!("head index {head} is outside the node list ({len} nodes)");
            }
        }

        let mut nodes = Vec::with_capacity(len);
        for raw_node in &raw.nodes {
            let params = normalize_params(&raw_node.param);
            let op = OpKind::from_tag(&raw_node.op, &raw_node.name, &params)?;

            let mut inputs = Vec::with_capacity(raw_node.inputs.len());
            for entry in &raw_node.inputs {
                let index = *entry.first().ok_or_else(|| {
                    SymbolError::Parse(format!(
                        "node '{}': empty input reference",
                        raw_node.name
                    ))
                })?;
                if index >= len {
                    return Err(SymbolError::Reference {
                        node: raw_node.name.clone(),
                        index,
                        len,
                    });
                }
                inputs.push(index);
            }

            nodes.push(NodeRecord {
                name: raw_node.name.clone(),
                op,
                inputs,
            });
        }

        let symbol = Symbol { nodes, heads };
        symbol.check_rendered_names()?;
        Ok(symbol)
    }

    /// Whether the node at `index` should appear in the rendered graph.
    ///
    /// No-op placeholders are visible only when listed as heads; every
    /// other node is always visible.
    pub fn is_visible(&self, index: usize) -> bool {
        match self.nodes.get(index) {
            Some(node) => !node.op.is_null() || self.heads.contains(&index),
            None => false,
        }
    }

    /// Number of records in the node list.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes that will be rendered.
    pub fn num_visible(&self) -> usize {
        (0..self.nodes.len()).filter(|&i| self.is_visible(i)).count()
    }

    /// Returns a concise summary string for display.
    pub fn summary(&self) -> String {
        format!(
            "{} nodes ({} rendered), {} heads",
            self.num_nodes(),
            self.num_visible(),
            self.heads.len(),
        )
    }

    /// Rendered node names must be unique: they key the output graph.
    fn check_rendered_names(&self) -> Result<(), SymbolError> {
        let mut seen = HashSet::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if self.is_visible(i) && !seen.insert(node.name.as_str()) {
                return Err(SymbolError::Parse(format!(
                    "duplicate rendered node name '{}'",
                    node.name
                )));
            }
        }
        Ok(())
    }
}

/// Flattens JSON parameter values to strings.
///
/// Symbol files in the wild carry both `"num_filter": "16"` and
/// `"num_filter": 16`; both forms are accepted.
fn normalize_params(raw: &HashMap<String, serde_json::Value>) -> HashMap<String, String> {
    raw.iter()
        .map(|(k, v)| {
            let s = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), s)
        })
        .collect()
}
