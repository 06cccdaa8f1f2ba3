//! Shared helpers for provider integration tests

use authweave::Token;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A token carrying the given access credential and no refresh token.
pub fn token(access_token: &str) -> Token {
	Token {
		access_token: access_token.to_string(),
		token_type: "Bearer".to_string(),
		refresh_token: None,
		expires_in: None,
	}
}

/// Starts a mock server answering `GET /profile` with `document`.
pub async fn profile_server(document: &serde_json::Value) -> MockServer {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/profile"))
		.respond_with(ResponseTemplate::new(200).set_body_json(document))
		.mount(&server)
		.await;

	server
}
