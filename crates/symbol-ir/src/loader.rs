// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Symbol loading from plain JSON files or binary containers.
//!
//! Two input forms are accepted:
//! - a plain text file holding the symbol JSON directly;
//! - a SafeTensors container (`.safetensors`) embedding the JSON bytes as
//!   a `U8` tensor under the well-known `network` dataset name.
//!
//! For containers only the header and the one dataset are touched, via
//! memory-mapped I/O; nothing else in the file is read.

use crate::{Symbol, SymbolError};
use std::path::Path;

/// Dataset name holding the symbol JSON bytes inside a container.
const NETWORK_DATASET: &str = "network";

/// File extension identifying the binary container form.
const CONTAINER_EXT: &str = "safetensors";

/// Loads a [`Symbol`] from a user-supplied input path.
///
/// # Example
/// ```no_run
/// use symbol_ir::SymbolLoader;
/// use std::path::Path;
///
/// let symbol = SymbolLoader::load(Path::new("lenet.json")).unwrap();
/// println!("{}", symbol.summary());
/// ```
pub struct SymbolLoader;

impl SymbolLoader {
    /// Reads the symbol text from `path` and parses it.
    pub fn load(path: &Path) -> Result<Symbol, SymbolError> {
        let text = Self::read_text(path)?;
        Symbol::from_json(&text)
    }

    /// Reads the raw symbol JSON text, dispatching on the file extension.
    pub fn read_text(path: &Path) -> Result<String, SymbolError> {
        if !path.exists() {
            return Err(SymbolError::NotFound {
                path: path.display().to_string(),
            });
        }

        let is_container = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(CONTAINER_EXT));

        if is_container {
            tracing::debug!("reading container '{}'", path.display());
            Self::read_container(path)
        } else {
            tracing::debug!("reading plain symbol file '{}'", path.display());
            Self::read_plain(path)
        }
    }

    /// Reads a plain text symbol file in full.
    fn read_plain(path: &Path) -> Result<String, SymbolError> {
        std::fs::read_to_string(path).map_err(|e| SymbolError::Format {
            path: path.display().to_string(),
            detail: format!("cannot read as text: {e}"),
        })
    }

    /// Extracts the `network` dataset from a SafeTensors container.
    fn read_container(path: &Path) -> Result<String, SymbolError> {
        let format_err = |detail: String| SymbolError::Format {
            path: path.display().to_string(),
            detail,
        };

        let file = std::fs::File::open(path)
            .map_err(|e| format_err(format!("cannot open: {e}")))?;

        // Memory-map so only the header and the one dataset are paged in.
        let mmap = unsafe { memmap2::Mmap::map(&file) }
            .map_err(|e| format_err(format!("mmap failed: {e}")))?;

        let tensors = safetensors::SafeTensors::deserialize(&mmap)
            .map_err(|e| format_err(format!("not a valid container: {e}")))?;

        let view = tensors.tensor(NETWORK_DATASET).map_err(|_| {
            format_err(format!("missing '{NETWORK_DATASET}' dataset"))
        })?;

        if view.dtype() != safetensors::Dtype::U8 {
            return Err(format_err(format!(
                "dataset '{NETWORK_DATASET}' has dtype {:?}, expected U8",
                view.dtype()
            )));
        }

        String::from_utf8(view.data().to_vec())
            .map_err(|_| format_err(format!("dataset '{NETWORK_DATASET}' is not valid UTF-8")))
    }
}
