// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # netviz
//!
//! Command-line front-end: read a network symbol file, build the diagram,
//! and render it through Graphviz.
//!
//! ## Usage
//! ```bash
//! # Render lenet.json to network.pdf and open it
//! netviz lenet.json
//!
//! # Render a container to a custom name/format, without opening a viewer
//! netviz model.safetensors --output lenet --format svg --no-show
//! ```

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "netviz",
    about = "Visualize a serialized neural-network graph as a diagram",
    version
)]
struct Cli {
    /// Path to the symbol file: plain JSON, or a .safetensors container
    /// holding the JSON under its 'network' dataset.
    input: PathBuf,

    /// Output file base name, without extension.
    #[arg(short, long, default_value = "network")]
    output: PathBuf,

    /// Output format extension (pdf, png, svg, ...).
    #[arg(short, long, default_value = "pdf")]
    format: String,

    /// Do not open the rendered diagram when done.
    #[arg(long)]
    no_show: bool,

    /// Enable verbose logging (repeat for more: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let symbol = symbol_ir::SymbolLoader::load(&cli.input)
        .map_err(|e| anyhow::anyhow!("failed to load '{}': {e}", cli.input.display()))?;
    tracing::info!("loaded symbol: {}", symbol.summary());

    // The original front-end relaxes the fixed box sizing so long labels fit.
    let title = cli.input.display().to_string();
    let graph = dot_render::plot_network(
        &symbol,
        &title,
        &[("shape", "rect"), ("fixedsize", "false")],
    );

    let rendered = dot_render::render(&graph, &cli.output, &cli.format)
        .map_err(|e| anyhow::anyhow!("failed to render diagram: {e}"))?;
    println!("wrote {}", rendered.display());

    if !cli.no_show {
        if let Err(e) = dot_render::open_viewer(&rendered) {
            tracing::warn!("{e}");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber from the `-v` count.
///
/// `RUST_LOG` takes precedence when set.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
