//! OAuth2 token types

use serde::{Deserialize, Serialize};

/// Access/refresh credential pair returned by a token endpoint.
///
/// Produced by [`Provider::exchange`](crate::Provider::exchange) and
/// passed by reference into subsequent provider calls; the provider
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
	/// Bearer credential for authenticated API calls
	pub access_token: String,

	/// Token type as reported by the provider (usually `"Bearer"`)
	#[serde(default)]
	pub token_type: String,

	/// Refresh credential, absent for providers that do not issue one
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,

	/// Access-token lifetime in seconds
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expires_in: Option<u64>,
}
