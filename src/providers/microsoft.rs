//! Microsoft (Azure AD) provider

use async_trait::async_trait;

use crate::base::{self, BaseProvider, Provider};
use crate::core::mailbox::parse_mailbox;
use crate::core::{AuthUser, ProviderError, Token};
use crate::extract::{self, FieldQuery};

/// Unique name of the Microsoft provider.
pub const NAME_MICROSOFT: &str = "microsoft";

/// Email fallback chain: the dedicated address list wins; the account
/// principal name is only trusted when it parses as a mailbox.
const EMAIL_QUERIES: &[FieldQuery] = &[
	FieldQuery::plain("$.emails[0].address"),
	FieldQuery::validated("$.account[0].userPrincipalName", parse_mailbox),
];

/// Microsoft provider via Azure AD OAuth2.
pub struct Microsoft {
	base: BaseProvider,
}

impl Microsoft {
	/// Creates a Microsoft provider with Azure AD defaults.
	pub fn new() -> Self {
		Self {
			base: BaseProvider::new(
				"https://login.microsoftonline.com/common/oauth2/v2.0/authorize",
				"https://login.microsoftonline.com/common/oauth2/v2.0/token",
				"https://graph.microsoft.com/beta/me/profile",
				vec!["User.Read".to_string()],
			),
		}
	}
}

impl Default for Microsoft {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Provider for Microsoft {
	fn name(&self) -> &'static str {
		NAME_MICROSOFT
	}

	fn base(&self) -> &BaseProvider {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseProvider {
		&mut self.base
	}

	/// Normalizes the Microsoft Graph profile payload.
	///
	/// API reference:  <https://learn.microsoft.com/en-us/azure/active-directory/develop/userinfo>
	/// Graph explorer: <https://developer.microsoft.com/en-us/graph/graph-explorer>
	async fn fetch_auth_user(&self, token: &Token) -> Result<AuthUser, ProviderError> {
		let data = self.fetch_raw_user_data(token).await?;
		let document = base::decode_user_document(&data)?;

		let id = extract::query_string(&document, "$.id").unwrap_or_default();
		let email = extract::first_string(&document, EMAIL_QUERIES).unwrap_or_default();

		let first = extract::query_string(&document, "$.names[0].first").unwrap_or_default();
		let last = extract::query_string(&document, "$.names[0].last").unwrap_or_default();
		// The separating space is kept even when one part is missing.
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
