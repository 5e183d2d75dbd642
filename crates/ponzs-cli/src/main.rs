// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! ponzs-search - print the top DuckDuckGo hits for a term.
//!
//! Runs one query against DuckDuckGo's HTML results page and prints the
//! first few hits to stdout. Logs go to stderr and are controlled by
//! `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ponzs_search_duckduckgo::DuckDuckGoClient;

mod output;

use output::render_results;

const DEFAULT_TERM: &str = "ponzs";

/// Search DuckDuckGo and print the top results
#[derive(Parser, Debug)]
#[command(name = "ponzs-search", version, about, long_about = None)]
struct Args {
	/// Search term
	#[arg(default_value = DEFAULT_TERM, allow_hyphen_values = true)]
	term: String,

	/// Anything after the term is ignored
	#[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
	ignored: Vec<String>,
}

fn init_tracing() {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ponzs=warn"));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(io::stderr))
		.init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	let args = Args::parse();

	init_tracing();

	info!(term = %args.term, "starting search");
	if !args.ignored.is_empty() {
		debug!(ignored = ?args.ignored, "ignoring extra arguments");
	}

	let client = DuckDuckGoClient::new().context("failed to create search client")?;
	let results = client
		.search(&args.term)
		.await
		.with_context(|| format!("search for {:?} failed", args.term))?;

	debug!(result_count = results.len(), "rendering results");

	let stdout = io::stdout();
	render_results(&mut stdout.lock(), &results).context("failed to write results")?;

	Ok(())
}
