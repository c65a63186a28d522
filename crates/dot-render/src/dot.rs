// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Declarative Graphviz digraph builder.
//!
//! [`Digraph`] collects named nodes and directed edges with attribute
//! lists, then emits valid DOT source. Identifiers and attribute values
//! are always quoted; embedded quotes are escaped, while backslash
//! escapes such as `\n` in labels pass through untouched.

/// An attribute list: ordered `key = "value"` pairs.
pub type Attrs = Vec<(String, String)>;

/// A node definition in the graph.
#[derive(Debug, Clone)]
pub struct DotNode {
    pub name: String,
    pub attrs: Attrs,
}

/// A directed edge from `tail` to `head`.
#[derive(Debug, Clone)]
pub struct DotEdge {
    pub tail: String,
    pub head: String,
    pub attrs: Attrs,
}

/// A directed graph, buffered declaratively and emitted with [`Digraph::to_dot`].
#[derive(Debug, Clone)]
pub struct Digraph {
    name: String,
    nodes: Vec<DotNode>,
    edges: Vec<DotEdge>,
}

impl Digraph {
    /// Creates an empty digraph titled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node definition.
    pub fn node(&mut self, name: impl Into<String>, attrs: Attrs) {
        self.nodes.push(DotNode {
            name: name.into(),
            attrs,
        });
    }

    /// Adds a directed edge.
    pub fn edge(&mut self, tail: impl Into<String>, head: impl Into<String>, attrs: Attrs) {
        self.edges.push(DotEdge {
            tail: tail.into(),
            head: head.into(),
            attrs,
        });
    }

    /// The graph title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The buffered node definitions, in insertion order.
    pub fn nodes(&self) -> &[DotNode] {
        &self.nodes
    }

    /// The buffered edges, in insertion order.
    pub fn edges(&self) -> &[DotEdge] {
        &self.edges
    }

    /// Emits the graph as DOT source.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("digraph {} {{\n", quote(&self.name)));

        for node in &self.nodes {
            out.push_str(&format!(
                "    {}{};\n",
                quote(&node.name),
                attr_block(&node.attrs)
            ));
        }
        if !self.nodes.is_empty() && !self.edges.is_empty() {
            out.push('\n');
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "    {} -> {}{};\n",
                quote(&edge.tail),
                quote(&edge.head),
                attr_block(&edge.attrs)
            ));
        }

        out.push_str("}\n");
        out
    }
}

/// Formats an attribute list as ` [k="v" ...]`, or nothing when empty.
fn attr_block(attrs: &Attrs) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let body: Vec<String> = attrs
        .iter()
        .map(|(k, v)| format!("{k}={}", quote(v)))
        .collect();
    format!(" [{}]", body.join(" "))
}

/// Quotes a DOT identifier or attribute value, escaping embedded quotes.
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}
