// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # symbol-ir
//!
//! A lightweight intermediate representation for serialized neural-network
//! graph descriptions ("symbols").
//!
//! A symbol file is a JSON document holding a flat node list with
//! index-based dependency references, plus a set of head indices marking
//! which placeholder nodes are real graph inputs/outputs. This crate
//! defines:
//!
//! - [`OpKind`] — the kind of operator each node performs, as a closed
//!   enumeration with per-kind parameters extracted up front.
//! - [`NodeRecord`] / [`Symbol`] — the parsed document as an arena of
//!   records, validated at parse time (reference bounds, required
//!   parameters, rendered-name uniqueness).
//! - [`SymbolLoader`] — reads the JSON either from a plain text file or
//!   from the `network` dataset of a SafeTensors container.
//!
//! # Example
//! ```no_run
//! use symbol_ir::SymbolLoader;
//! use std::path::Path;
//!
//! let symbol = SymbolLoader::load(Path::new("lenet.json")).unwrap();
//! println!("{}", symbol.summary());
//! ```

mod error;
mod loader;
mod op;
mod symbol;

pub use error::SymbolError;
pub use loader::SymbolLoader;
pub use op::{digit_runs, OpKind};
pub use symbol::{NodeRecord, Symbol};
