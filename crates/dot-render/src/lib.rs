// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # dot-render
//!
//! Turns a parsed [`symbol_ir::Symbol`] into a rendered diagram.
//!
//! The pipeline is three small pieces:
//! - [`node_style`] — pure per-operator label/color derivation,
//! - [`plot_network`] — graph assembly into a declarative [`Digraph`],
//! - [`render`] — DOT emission plus layout through the external Graphviz
//!   `dot` executable.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//!
//! let symbol = symbol_ir::SymbolLoader::load(Path::new("lenet.json")).unwrap();
//! let graph = dot_render::plot_network(&symbol, "lenet.json", &[]);
//! dot_render::render(&graph, Path::new("network"), "pdf").unwrap();
//! ```

mod dot;
mod error;
mod plot;
mod render;
mod style;

pub use dot::{Attrs, Digraph, DotEdge, DotNode};
pub use error::RenderError;
pub use plot::plot_network;
pub use render::{open_viewer, render};
pub use style::{node_style, NodeStyle, PALETTE};
