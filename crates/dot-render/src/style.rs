// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-operator label and color derivation.
//!
//! This is a pure mapping from an operator record to its visual style:
//! the same record always yields the same label and fill color. A return
//! of `None` means the node is excluded from the diagram entirely (a
//! placeholder that is not a head).
//!
//! Labels use the DOT `\n` escape for line breaks, so multi-line labels
//! are carried as literal backslash-n in the emitted source.

use symbol_ir::{NodeRecord, OpKind};

/// Fixed fill-color palette, indexed by operator category.
///
/// The assignment is deterministic: the same operator kind always maps to
/// the same palette slot.
pub const PALETTE: [&str; 8] = [
    "#8dd3c7", // placeholders (heads)
    "#fb8072", // convolution / fully-connected
    "#ffffb3", // activations
    "#bebada", // batch normalization
    "#80b1d3", // pooling
    "#fdb462", // shape ops (concat / flatten / reshape)
    "#b3de69", // softmax
    "#fccde5", // everything else
];

/// Visual attributes of a rendered node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    /// Display label; may contain DOT `\n` escapes.
    pub label: String,
    /// Fill color from [`PALETTE`].
    pub fillcolor: &'static str,
}

/// Derives the style for a node, or `None` if the node is hidden.
///
/// `is_head` marks placeholder nodes that are real graph inputs/outputs;
/// placeholders that are not heads are internal bookkeeping and are not
/// drawn at all.
pub fn node_style(node: &NodeRecord, is_head: bool) -> Option<NodeStyle> {
    let style = match &node.op {
        OpKind::Null => {
            if !is_head {
                return None;
            }
            NodeStyle {
                label: node.name.clone(),
                fillcolor: PALETTE[0],
            }
        }
        OpKind::Convolution {
            kernel: (kh, kw),
            stride,
            num_filter,
        } => NodeStyle {
            label: format!("Convolution\\n{kh}x{kw}/{stride}, {num_filter}"),
            fillcolor: PALETTE[1],
        },
        OpKind::FullyConnected { num_hidden } => NodeStyle {
            label: format!("FullyConnected\\n{num_hidden}"),
            fillcolor: PALETTE[1],
        },
        OpKind::BatchNorm => NodeStyle {
            label: "BatchNorm".to_string(),
            fillcolor: PALETTE[3],
        },
        OpKind::Activation { op, act_type } => NodeStyle {
            label: format!("{op}\\n{act_type}"),
            fillcolor: PALETTE[2],
        },
        OpKind::Pooling {
            pool_type,
            kernel: (kh, kw),
            stride,
        } => NodeStyle {
            label: format!("Pooling\\n{pool_type}, {kh}x{kw}/{stride}"),
            fillcolor: PALETTE[4],
        },
        OpKind::Concat | OpKind::Flatten | OpKind::Reshape => NodeStyle {
            label: node.op.tag().to_string(),
            fillcolor: PALETTE[5],
        },
        OpKind::Softmax => NodeStyle {
            label: "Softmax".to_string(),
            fillcolor: PALETTE[6],
        },
        OpKind::Other(tag) => NodeStyle {
            label: tag.clone(),
            fillcolor: PALETTE[7],
        },
    };
    Some(style)
}
