//! Identity-provider implementations
//!
//! Each provider is structurally identical: endpoint and scope
//! defaults plus a normalization pipeline mapping the service's
//! user-info payload onto [`AuthUser`](crate::AuthUser).

pub mod github;
pub mod google;
pub mod microsoft;

pub use github::{GitHub, NAME_GITHUB};
pub use google::{Google, NAME_GOOGLE};
pub use microsoft::{Microsoft, NAME_MICROSOFT};

use crate::base::Provider;

/// Creates the provider registered under `name`.
///
/// Returns `None` for unknown names. Hosts typically call this once
/// per enabled configuration key at startup; the returned instance
/// holds no per-user state and may serve concurrent attempts.
pub fn by_name(name: &str) -> Option<Box<dyn Provider>> {
	match name {
		NAME_MICROSOFT => Some(Box::new(Microsoft::new())),
		NAME_GOOGLE => Some(Box::new(Google::new())),
		NAME_GITHUB => Some(Box::new(GitHub::new())),
		_ => None,
	}
}
