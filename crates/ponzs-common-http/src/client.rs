// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a browser-like User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Static User-Agent sent with every request.
///
/// Search engines reject requests carrying the default `reqwest/x.y`
/// agent, so the client presents itself as a generic browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Creates a new HTTP client builder with the standard browser User-Agent.
///
/// Use this when you need to customize the client further.
///
/// # Example
/// ```ignore
/// let client = ponzs_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	builder_with_user_agent(BROWSER_USER_AGENT)
}

/// Creates a new HTTP client builder with a custom User-Agent header.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Creates a new HTTP client with the given timeout and the standard
/// User-Agent.
pub fn new_client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
	tracing::trace!(timeout_ms = timeout.as_millis(), "building HTTP client");
	builder().timeout(timeout).build()
}

#[cfg(test)]
mod tests {
	use super::*;
	use wiremock::matchers::{header, method};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	#[test]
	fn builder_with_custom_user_agent() {
		let client = builder_with_user_agent("my-custom-agent/1.0").build();
		assert!(client.is_ok());
	}

	#[tokio::test]
	async fn client_sends_browser_user_agent() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(header("User-Agent", "Mozilla/5.0"))
			.respond_with(ResponseTemplate::new(200))
			.expect(1)
			.mount(&server)
			.await;

		let client = new_client_with_timeout(Duration::from_secs(5)).unwrap();
		let response = client.get(server.uri()).send().await.unwrap();

		assert!(response.status().is_success());
	}
}
