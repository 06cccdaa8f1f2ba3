//! Google provider

use async_trait::async_trait;

use crate::base::{self, BaseProvider, Provider};
use crate::core::{AuthUser, ProviderError, Token};
use crate::extract::{self, FieldQuery};

/// Unique name of the Google provider.
pub const NAME_GOOGLE: &str = "google";

const EMAIL_QUERIES: &[FieldQuery] = &[FieldQuery::plain("$.email")];

/// Google provider via the OIDC userinfo endpoint.
pub struct Google {
	base: BaseProvider,
}

impl Google {
	/// Creates a Google provider with some defaults.
	pub fn new() -> Self {
		Self {
			base: BaseProvider::new(
				"https://accounts.google.com/o/oauth2/v2/auth",
				"https://oauth2.googleapis.com/token",
				"https://www.googleapis.com/oauth2/v3/userinfo",
				vec![
					"openid".to_string(),
					"email".to_string(),
					"profile".to_string(),
				],
			),
		}
	}
}

impl Default for Google {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Provider for Google {
	fn name(&self) -> &'static str {
		NAME_GOOGLE
	}

	fn base(&self) -> &BaseProvider {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseProvider {
		&mut self.base
	}

	/// Normalizes the Google userinfo payload.
	async fn fetch_auth_user(&self, token: &Token) -> Result<AuthUser, ProviderError> {
		let data = self.fetch_raw_user_data(token).await?;
		let document = base::decode_user_document(&data)?;

		let id = extract::query_string(&document, "$.sub").unwrap_or_default();
		let email = extract::first_string(&document, EMAIL_QUERIES).unwrap_or_default();

		let first = extract::query_string(&document, "$.given_name").unwrap_or_default();
		let last = extract::query_string(&document, "$.family_name").unwrap_or_default();
		let name = format!("{} {}", first, last);

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
