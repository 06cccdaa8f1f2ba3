//! Canonical user record

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Normalized identity returned by
/// [`Provider::fetch_auth_user`](crate::Provider::fetch_auth_user).
///
/// Constructed once per successful fetch and owned by the caller;
/// the provider keeps no reference to it. If `email` is non-empty it
/// has passed mailbox-syntax validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
	/// Provider-scoped opaque identifier; empty when unresolved
	pub id: String,

	/// Best-effort display name; may be empty
	pub name: String,

	/// Validated mailbox address, or empty
	pub email: String,

	/// Full undigested provider payload, for callers that need
	/// provider-specific fields
	pub raw_user: HashMap<String, Value>,

	/// Access credential, transferred to the caller for storage
	pub access_token: String,

	/// Refresh credential; empty when the provider issued none
	pub refresh_token: String,
}
