// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the DuckDuckGo client.

use thiserror::Error;

/// Errors that can occur when querying DuckDuckGo.
///
/// Unexpected markup is not an error: the parser skips what it cannot
/// resolve and returns whatever it found.
#[derive(Debug, Error)]
pub enum DuckDuckGoError {
	/// The HTTP client could not be constructed.
	#[error("Failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// DuckDuckGo answered with a non-success status.
	#[error("DuckDuckGo returned HTTP {status}")]
	Status { status: u16 },
}

impl DuckDuckGoError {
	/// Returns true for transport failures (timeouts included).
	pub fn is_transport(&self) -> bool {
		matches!(self, DuckDuckGoError::Network(_) | DuckDuckGoError::Timeout)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_error_names_the_code() {
		let err = DuckDuckGoError::Status { status: 503 };
		assert_eq!(err.to_string(), "DuckDuckGo returned HTTP 503");
		assert!(!err.is_transport());
	}

	#[test]
	fn timeout_is_transport() {
		assert!(DuckDuckGoError::Timeout.is_transport());
	}
}
