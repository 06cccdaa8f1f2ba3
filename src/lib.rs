//! # Authweave
//!
//! Pluggable OAuth2 identity providers with declarative user-profile
//! normalization.
//!
//! Every supported identity service is a [`Provider`]: a thin adapter
//! that carries the service's endpoint defaults and knows how to map
//! the service's user-info payload onto a canonical [`AuthUser`]
//! record. The OAuth2 legwork (authorization URL, code-for-token
//! exchange, authenticated profile fetch) is shared by all providers
//! through [`BaseProvider`]; the per-provider part is reduced to a
//! handful of [path queries](extract::PathQuery) with ordered
//! fallbacks.
//!
//! # Supported Providers
//!
//! - **Microsoft**: Azure AD / Microsoft Graph
//! - **Google**: OIDC userinfo endpoint
//! - **GitHub**: OAuth2 user API
//!
//! # Example
//!
//! ```ignore
//! use authweave::{Provider, providers::Microsoft};
//!
//! # async fn run() -> Result<(), authweave::ProviderError> {
//! let mut provider = Microsoft::new();
//! provider.set_client_id("client-id".to_string());
//! provider.set_client_secret("client-secret".to_string());
//! provider.set_redirect_uri("https://example.com/callback".to_string());
//!
//! // Redirect the user, then exchange the callback code.
//! let redirect = provider.auth_code_url("random-state");
//! let token = provider.exchange("code-from-callback").await?;
//! let user = provider.fetch_auth_user(&token).await?;
//! println!("{} <{}>", user.name, user.email);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Model
//!
//! Only transport and decoding failures are errors
//! ([`ProviderError`]). A profile field missing from the payload is
//! never one: extraction degrades to an empty string, so a structurally
//! valid [`AuthUser`] with empty `id`/`name`/`email` is a valid,
//! non-error outcome.

pub mod base;
pub mod core;
pub mod extract;
pub mod providers;

pub use base::{BaseProvider, Provider};
pub use core::{AuthUser, OAuth2Client, ProviderError, Token};
pub use providers::{GitHub, Google, Microsoft, by_name};
