// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! DuckDuckGo HTML client implementation.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, instrument, trace};

use crate::error::DuckDuckGoError;
use crate::parser::parse_results;
use crate::types::{SearchRequest, SearchResponse, SearchResult};

pub const DEFAULT_BASE_URL: &str = "https://duckduckgo.com/html/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for DuckDuckGo's JavaScript-free results page.
///
/// Each search is a single GET; failures are reported as-is and never
/// retried.
#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
	http_client: Client,
	base_url: String,
	timeout: Duration,
}

impl DuckDuckGoClient {
	/// Creates a new client pointed at the public DuckDuckGo endpoint.
	pub fn new() -> Result<Self, DuckDuckGoError> {
		Self::build(DEFAULT_BASE_URL.to_string(), REQUEST_TIMEOUT)
	}

	/// Sets a custom base URL (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets a custom request timeout. Rebuilds the underlying HTTP client.
	pub fn with_timeout(self, timeout: Duration) -> Result<Self, DuckDuckGoError> {
		Self::build(self.base_url, timeout)
	}

	fn build(base_url: String, timeout: Duration) -> Result<Self, DuckDuckGoError> {
		let http_client =
			ponzs_common_http::new_client_with_timeout(timeout).map_err(DuckDuckGoError::Client)?;

		Ok(Self {
			http_client,
			base_url,
			timeout,
		})
	}

	/// Searches for `term` and returns the hits in page order.
	pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>, DuckDuckGoError> {
		let response = self.search_request(SearchRequest::new(term)).await?;
		Ok(response.results)
	}

	/// Performs a search and returns the hits together with the query.
	#[instrument(skip(self), fields(query = %request.query))]
	pub async fn search_request(
		&self,
		request: SearchRequest,
	) -> Result<SearchResponse, DuckDuckGoError> {
		debug!(
			url = %self.base_url,
			timeout_ms = self.timeout.as_millis(),
			"Sending search request to DuckDuckGo"
		);

		let response = self
			.http_client
			.get(&self.base_url)
			.query(&[("q", request.query.as_str())])
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return DuckDuckGoError::Timeout;
				}
				error!(error = %e, "Network error during DuckDuckGo request");
				DuckDuckGoError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from DuckDuckGo");

		if !status.is_success() {
			error!(status = status.as_u16(), "DuckDuckGo returned an error status");
			return Err(DuckDuckGoError::Status {
				status: status.as_u16(),
			});
		}

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				error!("Timed out reading response body");
				return DuckDuckGoError::Timeout;
			}
			error!(error = %e, "Failed to read response body");
			DuckDuckGoError::Network(e)
		})?;

		trace!(body_len = body.len(), "Response body");

		let results = parse_results(&body);

		debug!(
			result_count = results.len(),
			"Search completed successfully"
		);

		Ok(SearchResponse {
			query: request.query,
			results,
		})
	}
}
