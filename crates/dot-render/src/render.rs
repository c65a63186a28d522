// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rendering through the external Graphviz engine.
//!
//! The layout engine is a process boundary: we write the DOT source to
//! `{base}.dot`, invoke `dot -T<format>` on it, and leave layout entirely
//! to Graphviz. The rendered file lands at `{base}.<format>`.

use crate::{Digraph, RenderError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Renders `graph` to `{base}.<format>`, returning the output path.
///
/// The DOT source is written to `{base}.dot` first; it is kept alongside
/// the rendered file. Fails with [`RenderError::GraphvizMissing`] when the
/// `dot` executable cannot be found.
pub fn render(graph: &Digraph, base: &Path, format: &str) -> Result<PathBuf, RenderError> {
    let dot_path = base.with_extension("dot");
    std::fs::write(&dot_path, graph.to_dot())?;
    tracing::debug!("wrote DOT source to '{}'", dot_path.display());

    if !graphviz_available() {
        return Err(RenderError::GraphvizMissing);
    }

    let output_path = base.with_extension(format);
    let output = Command::new("dot")
        .arg(format!("-T{format}"))
        .arg(&dot_path)
        .arg("-o")
        .arg(&output_path)
        .output()
        .map_err(|_| RenderError::GraphvizMissing)?;

    if !output.status.success() {
        return Err(RenderError::DotFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    tracing::info!("rendered '{}'", output_path.display());
    Ok(output_path)
}

/// Opens `path` with the platform's default viewer.
///
/// The viewer is spawned and not waited on.
pub fn open_viewer(path: &Path) -> Result<(), RenderError> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command
        .spawn()
        .map(|_| ())
        .map_err(|e| RenderError::ViewerFailed {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
}

/// Whether the Graphviz `dot` executable is on PATH.
fn graphviz_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
