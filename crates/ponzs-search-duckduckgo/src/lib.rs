// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! DuckDuckGo HTML search client for ponzs.
//!
//! This crate fetches the DuckDuckGo `/html/` results page for a query and
//! extracts the title, link and snippet of each hit. Markup parsing lives in
//! [`parser`] and needs no network access.

pub mod client;
pub mod error;
pub mod parser;
pub mod types;

pub use client::DuckDuckGoClient;
pub use error::DuckDuckGoError;
pub use parser::parse_results;
pub use types::{SearchRequest, SearchResponse, SearchResult};
