//! GitHub provider

use async_trait::async_trait;

use crate::base::{self, BaseProvider, Provider};
use crate::core::{AuthUser, ProviderError, Token};
use crate::extract::{self, FieldQuery};

/// Unique name of the GitHub provider.
pub const NAME_GITHUB: &str = "github";

const EMAIL_QUERIES: &[FieldQuery] = &[FieldQuery::plain("$.email")];

/// Display name falls back to the login handle.
const NAME_QUERIES: &[FieldQuery] = &[
	FieldQuery::plain("$.name"),
	FieldQuery::plain("$.login"),
];

/// GitHub provider via the OAuth2 user API.
pub struct GitHub {
	base: BaseProvider,
}

impl GitHub {
	/// Creates a GitHub provider with some defaults.
	pub fn new() -> Self {
		Self {
			base: BaseProvider::new(
				"https://github.com/login/oauth/authorize",
				"https://github.com/login/oauth/access_token",
				"https://api.github.com/user",
				vec!["user".to_string(), "user:email".to_string()],
			),
		}
	}
}

impl Default for GitHub {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Provider for GitHub {
	fn name(&self) -> &'static str {
		NAME_GITHUB
	}

	fn base(&self) -> &BaseProvider {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseProvider {
		&mut self.base
	}

	/// Normalizes the GitHub user payload.
	///
	/// API reference: <https://docs.github.com/en/rest/users/users>
	async fn fetch_auth_user(&self, token: &Token) -> Result<AuthUser, ProviderError> {
		let data = self.fetch_raw_user_data(token).await?;
		let document = base::decode_user_document(&data)?;

		// GitHub ids are JSON numbers.
		let id = extract::query_identifier(&document, "$.id").unwrap_or_default();
		let email = extract::first_string(&document, EMAIL_QUERIES).unwrap_or_default();
		let name = extract::first_string(&document, NAME_QUERIES).unwrap_or_default();

		Ok(AuthUser {
			id,
			name,
			email,
			raw_user: base::into_raw_user(document),
			access_token: token.access_token.clone(),
			refresh_token: token.refresh_token.clone().unwrap_or_default(),
		})
	}
}
