// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for DuckDuckGo searches.

/// Request parameters for a DuckDuckGo search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
	pub query: String,
}

impl SearchRequest {
	/// Creates a new request. The query is sent as given, without trimming
	/// or validation.
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
		}
	}
}

/// Response from a DuckDuckGo search.
#[derive(Debug, Clone)]
pub struct SearchResponse {
	pub query: String,
	pub results: Vec<SearchResult>,
}

/// A single search hit, in the order it appeared on the results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
	pub title: String,
	/// Raw `href` of the result anchor.
	pub link: String,
	/// Empty when the hit had no snippet next to it.
	pub snippet: String,
}

impl SearchResult {
	pub fn new(
		title: impl Into<String>,
		link: impl Into<String>,
		snippet: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			link: link.into(),
			snippet: snippet.into(),
		}
	}
}
