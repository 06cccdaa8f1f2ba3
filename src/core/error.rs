//! Provider error types

use thiserror::Error;

/// Errors surfaced by an authentication attempt.
///
/// Only transport and decoding failures appear here. A profile field
/// absent from the provider payload is not an error; extraction
/// degrades to an empty default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
	/// Network or protocol failure during the code-for-token exchange
	#[error("Token exchange failed: {0}")]
	TokenExchange(String),

	/// Network or HTTP failure fetching the user profile
	#[error("User data fetch failed: {0}")]
	UserFetch(String),

	/// The user-info payload was not a valid JSON object
	#[error("Malformed user response: {0}")]
	MalformedResponse(String),
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for ProviderError {
	fn from(error: serde_json::Error) -> Self {
		ProviderError::MalformedResponse(error.to_string())
	}
}
