// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Extraction of search hits from DuckDuckGo's HTML results page.
//!
//! Selection is best-effort: anything that does not look like a result is
//! skipped, and a page with no results yields an empty list.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::types::SearchResult;

static RESULT_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
	Selector::parse(".result__a").expect("BUG: hardcoded CSS selector '.result__a' is invalid")
});

static RESULT_SNIPPET_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
	Selector::parse("a.result__snippet")
		.expect("BUG: hardcoded CSS selector 'a.result__snippet' is invalid")
});

/// Parses a results page into hits, preserving document order.
///
/// For every `.result__a` element the title is its full text content and
/// the link its `href`. The snippet is taken from the next sibling element
/// only if that element is an `a.result__snippet`; otherwise it is empty.
/// Anchors without an `href` are dropped.
pub fn parse_results(html: &str) -> Vec<SearchResult> {
	let document = Html::parse_document(html);

	let results: Vec<SearchResult> = document
		.select(&RESULT_TITLE_SELECTOR)
		.filter_map(extract_result)
		.collect();

	trace!(result_count = results.len(), "parsed results page");
	results
}

fn extract_result(anchor: ElementRef<'_>) -> Option<SearchResult> {
	let Some(link) = anchor.value().attr("href") else {
		trace!("skipping result anchor without href");
		return None;
	};

	Some(SearchResult {
		title: anchor.text().collect(),
		link: link.to_string(),
		snippet: adjacent_snippet(anchor).unwrap_or_default(),
	})
}

// Text and comment nodes between the two elements do not break adjacency.
fn adjacent_snippet(anchor: ElementRef<'_>) -> Option<String> {
	let next = anchor.next_siblings().find_map(ElementRef::wrap)?;
	RESULT_SNIPPET_SELECTOR
		.matches(&next)
		.then(|| next.text().collect())
}
