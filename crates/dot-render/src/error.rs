// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for diagram rendering.

/// Errors that can occur while rendering a graph to an output file.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The DOT source file could not be written.
    #[error("failed to write DOT source: {0}")]
    Io(#[from] std::io::Error),

    /// The Graphviz `dot` executable is not installed or not on PATH.
    #[error(
        "Graphviz is not installed or not on PATH; install it with your \
         package manager (e.g. `apt install graphviz`, `brew install graphviz`)"
    )]
    GraphvizMissing,

    /// Graphviz ran but exited with a failure.
    #[error("dot exited with an error: {stderr}")]
    DotFailed { stderr: String },

    /// The platform viewer could not be launched.
    #[error("failed to open viewer for '{path}': {detail}")]
    ViewerFailed { path: String, detail: String },
}
