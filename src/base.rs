//! Shared provider behavior
//!
//! Every concrete provider embeds a [`BaseProvider`] and delegates the
//! OAuth2 legwork to it: building the authorization redirect URL,
//! exchanging the authorization code for tokens, and fetching the raw
//! user-info payload. The per-provider part is reduced to endpoint
//! defaults and a normalization pipeline.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::core::{AuthUser, OAuth2Client, ProviderError, Token};

/// Shared configuration and behavior embedded in every provider.
///
/// Endpoint URLs and scopes are provider defaults set at construction;
/// the host supplies client credentials before starting a flow. All
/// fields are read-only during an authentication attempt, so a single
/// instance may serve concurrent attempts without locking.
#[derive(Debug, Clone)]
pub struct BaseProvider {
	client: OAuth2Client,
	client_id: String,
	client_secret: String,
	redirect_uri: String,
	auth_url: String,
	token_url: String,
	user_api_url: String,
	scopes: Vec<String>,
}

impl BaseProvider {
	/// Creates a base provider with the given endpoint defaults.
	pub fn new(auth_url: &str, token_url: &str, user_api_url: &str, scopes: Vec<String>) -> Self {
		Self {
			client: OAuth2Client::new(),
			client_id: String::new(),
			client_secret: String::new(),
			redirect_uri: String::new(),
			auth_url: auth_url.to_string(),
			token_url: token_url.to_string(),
			user_api_url: user_api_url.to_string(),
			scopes,
		}
	}

	/// Authorization endpoint URL.
	pub fn auth_url(&self) -> &str {
		&self.auth_url
	}

	/// Token endpoint URL.
	pub fn token_url(&self) -> &str {
		&self.token_url
	}

	/// User-info endpoint URL.
	pub fn user_api_url(&self) -> &str {
		&self.user_api_url
	}

	/// Requested scopes.
	pub fn scopes(&self) -> &[String] {
		&self.scopes
	}

	/// OAuth2 client id.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Redirect URI sent with the authorization request.
	pub fn redirect_uri(&self) -> &str {
		&self.redirect_uri
	}

	pub fn set_client_id(&mut self, client_id: String) {
		self.client_id = client_id;
	}

	pub fn set_client_secret(&mut self, client_secret: String) {
		self.client_secret = client_secret;
	}

	pub fn set_redirect_uri(&mut self, redirect_uri: String) {
		self.redirect_uri = redirect_uri;
	}

	pub fn set_auth_url(&mut self, auth_url: String) {
		self.auth_url = auth_url;
	}

	pub fn set_token_url(&mut self, token_url: String) {
		self.token_url = token_url;
	}

	pub fn set_user_api_url(&mut self, user_api_url: String) {
		self.user_api_url = user_api_url;
	}

	pub fn set_scopes(&mut self, scopes: Vec<String>) {
		self.scopes = scopes;
	}

	/// Builds the authorization redirect URL for `state`.
	///
	/// Scopes are space-joined into a single `scope` parameter. The
	/// configured endpoint is a provider constant; an unparseable
	/// override is returned as-is rather than panicking.
	pub fn auth_code_url(&self, state: &str) -> String {
		let mut url = match Url::parse(&self.auth_url) {
			Ok(url) => url,
			Err(_) => return self.auth_url.clone(),
		};

		url.query_pairs_mut()
			.append_pair("client_id", &self.client_id)
			.append_pair("redirect_uri", &self.redirect_uri)
			.append_pair("response_type", "code")
			.append_pair("scope", &self.scopes.join(" "))
			.append_pair("state", state);

		url.to_string()
	}

	/// Exchanges an authorization code for tokens.
	///
	/// Fails with [`ProviderError::TokenExchange`] on network failure,
	/// a non-2xx response, or an undecodable token response.
	pub async fn exchange(&self, code: &str) -> Result<Token, ProviderError> {
		let mut params = HashMap::new();
		params.insert("grant_type", "authorization_code");
		params.insert("code", code);
		params.insert("client_id", self.client_id.as_str());
		params.insert("client_secret", self.client_secret.as_str());
		params.insert("redirect_uri", self.redirect_uri.as_str());

		tracing::debug!(token_url = %self.token_url, "exchanging authorization code");

		let response = self
			.client
			.client()
			.post(&self.token_url)
			// GitHub answers form-encoded unless JSON is requested.
			.header("Accept", "application/json")
			.form(&params)
			.send()
			.await
			.map_err(|e| ProviderError::TokenExchange(e.to_string()))?;

		if !response.status().is_success() {
			let status = response.status();
			let error_body = response
				.text()
				.await
				.unwrap_or_else(|_| "Unknown error".to_string());
			tracing::warn!(%status, "token endpoint returned an error");

			return Err(ProviderError::TokenExchange(format!(
				"Token endpoint returned {}: {}",
				status, error_body
			)));
		}

		response
			.json()
			.await
			.map_err(|e| ProviderError::TokenExchange(e.to_string()))
	}

	/// Fetches the raw user-info payload with `token` as the bearer
	/// credential.
	///
	/// Fails with [`ProviderError::UserFetch`] on network failure or a
	/// non-2xx status; otherwise returns the body bytes untouched.
	/// Decoding is the normalization pipeline's job.
	pub async fn fetch_raw_user_data(&self, token: &Token) -> Result<Vec<u8>, ProviderError> {
		tracing::debug!(user_api_url = %self.user_api_url, "fetching user profile");

		let response = self
			.client
			.client()
			.get(&self.user_api_url)
			.bearer_auth(&token.access_token)
			.send()
			.await
			.map_err(|e| ProviderError::UserFetch(e.to_string()))?;

		if !response.status().is_success() {
			let status = response.status();
			let error_body = response
				.text()
				.await
				.unwrap_or_else(|_| "Unknown error".to_string());
			tracing::warn!(%status, "user endpoint returned an error");

			return Err(ProviderError::UserFetch(format!(
				"User endpoint returned {}: {}",
				status, error_body
			)));
		}

		let body = response
			.bytes()
			.await
			.map_err(|e| ProviderError::UserFetch(e.to_string()))?;

		Ok(body.to_vec())
	}
}

/// Decodes a raw user-info payload into a JSON document.
///
/// The payload must be a JSON object; anything else is a
/// [`ProviderError::MalformedResponse`]. This is the pipeline's only
/// hard stop after the fetch.
pub(crate) fn decode_user_document(data: &[u8]) -> Result<Value, ProviderError> {
	let document: Value =
		serde_json::from_slice(data).map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

	if !document.is_object() {
		return Err(ProviderError::MalformedResponse(
			"user payload is not a JSON object".to_string(),
		));
	}

	Ok(document)
}

/// Moves a decoded document into the `raw_user` map shape.
pub(crate) fn into_raw_user(document: Value) -> HashMap<String, Value> {
	match document {
		Value::Object(map) => map.into_iter().collect(),
		// decode_user_document already rejected non-objects
		_ => HashMap::new(),
	}
}

/// Polymorphic provider contract.
///
/// One implementation per identity service, all structurally
/// identical: a [`BaseProvider`] with service defaults plus a
/// [`fetch_auth_user`](Provider::fetch_auth_user) normalization
/// pipeline. Hosts select a variant by configuration key at startup
/// (see [`providers::by_name`](crate::providers::by_name)) and use it
/// through this trait only.
#[async_trait]
pub trait Provider: Send + Sync {
	/// Unique configuration key of the provider (e.g. `"microsoft"`).
	fn name(&self) -> &'static str;

	/// Shared configuration and behavior.
	fn base(&self) -> &BaseProvider;

	/// Mutable access for host configuration and endpoint overrides.
	fn base_mut(&mut self) -> &mut BaseProvider;

	/// Authorization endpoint URL.
	fn auth_url(&self) -> &str {
		self.base().auth_url()
	}

	/// Token endpoint URL.
	fn token_url(&self) -> &str {
		self.base().token_url()
	}

	/// User-info endpoint URL.
	fn user_api_url(&self) -> &str {
		self.base().user_api_url()
	}

	/// Requested scopes.
	fn scopes(&self) -> &[String] {
		self.base().scopes()
	}

	fn set_client_id(&mut self, client_id: String) {
		self.base_mut().set_client_id(client_id);
	}

	fn set_client_secret(&mut self, client_secret: String) {
		self.base_mut().set_client_secret(client_secret);
	}

	fn set_redirect_uri(&mut self, redirect_uri: String) {
		self.base_mut().set_redirect_uri(redirect_uri);
	}

	fn set_auth_url(&mut self, auth_url: String) {
		self.base_mut().set_auth_url(auth_url);
	}

	fn set_token_url(&mut self, token_url: String) {
		self.base_mut().set_token_url(token_url);
	}

	fn set_user_api_url(&mut self, user_api_url: String) {
		self.base_mut().set_user_api_url(user_api_url);
	}

	/// Overrides the default scopes.
	fn set_scopes(&mut self, scopes: Vec<String>) {
		self.base_mut().set_scopes(scopes);
	}

	/// Builds the authorization redirect URL for `state`.
	fn auth_code_url(&self, state: &str) -> String {
		self.base().auth_code_url(state)
	}

	/// Exchanges an authorization code for tokens.
	async fn exchange(&self, code: &str) -> Result<Token, ProviderError> {
		self.base().exchange(code).await
	}

	/// Fetches the raw, undecoded user-info payload.
	async fn fetch_raw_user_data(&self, token: &Token) -> Result<Vec<u8>, ProviderError> {
		self.base().fetch_raw_user_data(token).await
	}

	/// Fetches and normalizes the authenticated user.
	///
	/// Transport and decoding failures are fatal; missing profile
	/// fields are not and degrade to empty strings.
	async fn fetch_auth_user(&self, token: &Token) -> Result<AuthUser, ProviderError>;
}
