//! Shared HTTP client

use std::time::Duration;

/// Timeout applied to every outbound provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloneable HTTP client shared by all provider instances.
///
/// Carries a request timeout so a slow provider cannot hang an
/// authentication attempt; dropping an in-flight future cancels the
/// underlying request. Cloning is cheap (the inner connection pool is
/// reference-counted).
#[derive(Debug, Clone)]
pub struct OAuth2Client {
	client: reqwest::Client,
}

impl OAuth2Client {
	/// Creates a new client with the default timeout.
	pub fn new() -> Self {
		// GitHub's API rejects requests without a User-Agent.
		let client = reqwest::Client::builder()
			.timeout(REQUEST_TIMEOUT)
			.user_agent(concat!("authweave/", env!("CARGO_PKG_VERSION")))
			.build()
			.unwrap_or_default();

		Self { client }
	}

	/// The underlying reqwest client.
	pub fn client(&self) -> &reqwest::Client {
		&self.client
	}
}

impl Default for OAuth2Client {
	fn default() -> Self {
		Self::new()
	}
}
