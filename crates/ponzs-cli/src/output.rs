// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Plain-text rendering of search hits.

use std::io::{self, Write};

use ponzs_search_duckduckgo::SearchResult;

/// Number of hits printed, however many the page held.
pub const MAX_DISPLAYED_RESULTS: usize = 5;

/// Writes one `Title`/`Link`/`Snippet` block per hit, each followed by a
/// blank line.
pub fn render_results<W: Write>(out: &mut W, results: &[SearchResult]) -> io::Result<()> {
	for result in results.iter().take(MAX_DISPLAYED_RESULTS) {
		writeln!(out, "Title: {}", result.title)?;
		writeln!(out, "Link: {}", result.link)?;
		writeln!(out, "Snippet: {}", result.snippet)?;
		writeln!(out)?;
	}
	out.flush()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn render_to_string(results: &[SearchResult]) -> String {
		let mut buf = Vec::new();
		render_results(&mut buf, results).unwrap();
		String::from_utf8(buf).unwrap()
	}

	fn numbered(n: usize) -> Vec<SearchResult> {
		(0..n)
			.map(|i| SearchResult::new(format!("T{i}"), format!("https://{i}.example"), ""))
			.collect()
	}

	#[test]
	fn test_render_block_layout() {
		let output = render_to_string(&[
			SearchResult::new("A", "https://a.example", "snip-a"),
			SearchResult::new("B", "https://b.example", ""),
		]);

		assert_eq!(
			output,
			"Title: A\nLink: https://a.example\nSnippet: snip-a\n\n\
			 Title: B\nLink: https://b.example\nSnippet: \n\n"
		);
	}

	#[test]
	fn test_render_nothing_for_no_results() {
		assert_eq!(render_to_string(&[]), "");
	}

	#[test]
	fn test_render_stops_after_five() {
		let output = render_to_string(&numbered(8));
		assert!(output.contains("Title: T4\n"));
		assert!(!output.contains("Title: T5\n"));
	}

	proptest! {
		/// Property: exactly min(n, 5) blocks are printed.
		#[test]
		fn render_prints_at_most_five_blocks(n in 0usize..40) {
			let output = render_to_string(&numbered(n));
			let blocks = output.matches("Title: ").count();
			prop_assert_eq!(blocks, n.min(MAX_DISPLAYED_RESULTS));
		}
	}
}
