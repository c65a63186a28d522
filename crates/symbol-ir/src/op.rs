// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operator kinds for network symbol nodes.
//!
//! Each node in a symbol file carries an `op` tag string plus an
//! operator-specific `param` map. [`OpKind`] closes that open string tag
//! into an explicit enumeration, with the parameters each kind needs
//! already extracted and checked, so downstream label/color derivation is
//! total and cannot fail.

use crate::SymbolError;
use std::collections::HashMap;

/// The operator a symbol node represents.
///
/// Known kinds carry their display-relevant parameters; anything the
/// enumeration does not recognise lands in [`OpKind::Other`] with the raw
/// tag preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpKind {
    /// No-op placeholder (an input or parameter tensor, not a computation).
    Null,
    /// 2-D convolution.
    Convolution {
        /// Kernel height and width.
        kernel: (String, String),
        /// Stride (first component).
        stride: String,
        /// Number of output filters.
        num_filter: String,
    },
    /// Dense / fully-connected layer.
    FullyConnected { num_hidden: String },
    /// Batch normalization.
    BatchNorm,
    /// Activation function; also covers the `LeakyReLU` alias.
    Activation {
        /// The original tag (`"Activation"` or `"LeakyReLU"`).
        op: String,
        act_type: String,
    },
    /// Pooling layer.
    Pooling {
        pool_type: String,
        kernel: (String, String),
        stride: String,
    },
    Concat,
    Flatten,
    Reshape,
    Softmax,
    /// Any operator kind not covered above; the raw tag is kept.
    Other(String),
}

impl OpKind {
    /// Builds an `OpKind` from a raw `op` tag and its parameter map.
    ///
    /// Parameters required by the matched kind must be present and, for
    /// kernel/stride, must contain extractable integers; otherwise this
    /// fails with [`SymbolError::Parse`]. `node` is only used for error
    /// messages.
    pub fn from_tag(
        op: &str,
        node: &str,
        params: &HashMap<String, String>,
    ) -> Result<Self, SymbolError> {
        let require = |key: &str| -> Result<String, SymbolError> {
            params.get(key).cloned().ok_or_else(|| {
                SymbolError::Parse(format!(
                    "node '{node}': operator '{op}' requires parameter '{key}'"
                ))
            })
        };

        let kind = match op {
            "null" => OpKind::Null,
            "Convolution" => OpKind::Convolution {
                kernel: kernel_2d(op, node, &require("kernel")?)?,
                stride: stride_scalar(op, node, &require("stride")?)?,
                num_filter: require("num_filter")?,
            },
            "FullyConnected" => OpKind::FullyConnected {
                num_hidden: require("num_hidden")?,
            },
            "BatchNorm" => OpKind::BatchNorm,
            "Activation" | "LeakyReLU" => OpKind::Activation {
                op: op.to_string(),
                act_type: require("act_type")?,
            },
            "Pooling" => OpKind::Pooling {
                pool_type: require("pool_type")?,
                kernel: kernel_2d(op, node, &require("kernel")?)?,
                stride: stride_scalar(op, node, &require("stride")?)?,
            },
            "Concat" => OpKind::Concat,
            "Flatten" => OpKind::Flatten,
            "Reshape" => OpKind::Reshape,
            "Softmax" => OpKind::Softmax,
            other => OpKind::Other(other.to_string()),
        };
        Ok(kind)
    }

    /// Returns the canonical tag string for this kind.
    pub fn tag(&self) -> &str {
        match self {
            OpKind::Null => "null",
            OpKind::Convolution { .. } => "Convolution",
            OpKind::FullyConnected { .. } => "FullyConnected",
            OpKind::BatchNorm => "BatchNorm",
            OpKind::Activation { op, .. } => op,
            OpKind::Pooling { .. } => "Pooling",
            OpKind::Concat => "Concat",
            OpKind::Flatten => "Flatten",
            OpKind::Reshape => "Reshape",
            OpKind::Softmax => "Softmax",
            OpKind::Other(tag) => tag,
        }
    }

    /// Whether this is the no-op placeholder kind.
    pub fn is_null(&self) -> bool {
        matches!(self, OpKind::Null)
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Extracts maximal ASCII digit runs from a string, left to right.
///
/// Tolerates tuple-rendered values such as `"(3, 3)"` or `"(2,)"`.
pub fn digit_runs(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

/// Extracts the first two integers of a kernel string as `(height, width)`.
fn kernel_2d(op: &str, node: &str, value: &str) -> Result<(String, String), SymbolError> {
    let runs = digit_runs(value);
    match runs.as_slice() {
        [h, w, ..] => Ok((h.to_string(), w.to_string())),
        _ => Err(SymbolError::Parse(format!(
            "node '{node}': operator '{op}' kernel '{value}' does not contain two integers"
        ))),
    }
}

/// Extracts the first integer of a stride string.
fn stride_scalar(op: &str, node: &str, value: &str) -> Result<String, SymbolError> {
    digit_runs(value)
        .first()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            SymbolError::Parse(format!(
                "node '{node}': operator '{op}' stride '{value}' does not contain an integer"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_digit_runs_pair() {
        assert_eq!(digit_runs("(3, 3)"), vec!["3", "3"]);
    }

    #[test]
    fn test_digit_runs_single() {
        assert_eq!(digit_runs("(2,)"), vec!["2"]);
    }

    #[test]
    fn test_digit_runs_multidigit() {
        assert_eq!(digit_runs("[11, 4]"), vec!["11", "4"]);
        assert_eq!(digit_runs("no digits"), Vec::<&str>::new());
    }

    #[test]
    fn test_convolution_from_tag() {
        let p = params(&[("kernel", "(3,3)"), ("stride", "(1,1)"), ("num_filter", "16")]);
        let kind = OpKind::from_tag("Convolution", "conv1", &p).unwrap();
        assert_eq!(
            kind,
            OpKind::Convolution {
                kernel: ("3".into(), "3".into()),
                stride: "1".into(),
                num_filter: "16".into(),
            }
        );
    }

    #[test]
    fn test_convolution_missing_param() {
        let p = params(&[("kernel", "(3,3)"), ("stride", "(1,1)")]);
        let err = OpKind::from_tag("Convolution", "conv1", &p).unwrap_err();
        assert!(matches!(err, SymbolError::Parse(_)));
        assert!(err.to_string().contains("num_filter"));
    }

    #[test]
    fn test_convolution_bad_kernel() {
        let p = params(&[("kernel", "()"), ("stride", "(1,1)"), ("num_filter", "8")]);
        let err = OpKind::from_tag("Convolution", "conv1", &p).unwrap_err();
        assert!(matches!(err, SymbolError::Parse(_)));
    }

    #[test]
    fn test_leaky_relu_alias() {
        let p = params(&[("act_type", "leaky")]);
        let kind = OpKind::from_tag("LeakyReLU", "act0", &p).unwrap();
        assert_eq!(
            kind,
            OpKind::Activation {
                op: "LeakyReLU".into(),
                act_type: "leaky".into(),
            }
        );
        assert_eq!(kind.tag(), "LeakyReLU");
    }

    #[test]
    fn test_pooling_from_tag() {
        let p = params(&[("pool_type", "max"), ("kernel", "(2,2)"), ("stride", "(2,2)")]);
        let kind = OpKind::from_tag("Pooling", "pool0", &p).unwrap();
        assert_eq!(
            kind,
            OpKind::Pooling {
                pool_type: "max".into(),
                kernel: ("2".into(), "2".into()),
                stride: "2".into(),
            }
        );
    }

    #[test]
    fn test_unknown_op_is_other() {
        let kind = OpKind::from_tag("SoftmaxOutput", "out", &HashMap::new()).unwrap();
        assert_eq!(kind, OpKind::Other("SoftmaxOutput".into()));
        assert_eq!(kind.tag(), "SoftmaxOutput");
    }

    #[test]
    fn test_null_is_null() {
        let kind = OpKind::from_tag("null", "data", &HashMap::new()).unwrap();
        assert!(kind.is_null());
        assert_eq!(format!("{kind}"), "null");
    }
}
