// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for symbol loading and graph construction.

/// Errors that can occur when loading or parsing a network symbol.
#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    /// The input path does not exist.
    #[error("input file not found: {path}")]
    NotFound { path: String },

    /// The container file is present but the expected dataset is missing,
    /// or its bytes cannot be decoded as text.
    #[error("bad container '{path}': {detail}")]
    Format { path: String, detail: String },

    /// The symbol document is malformed or missing required fields.
    #[error("failed to parse symbol: {0}")]
    Parse(String),

    /// An `inputs` entry references a node index outside the node list.
    #[error("node '{node}' references input index {index}, but the graph has {len} nodes")]
    Reference {
        node: String,
        index: usize,
        len: usize,
    },
}

impl From<serde_json::Error> for SymbolError {
    fn from(e: serde_json::Error) -> Self {
        SymbolError::Parse(e.to_string())
    }
}
