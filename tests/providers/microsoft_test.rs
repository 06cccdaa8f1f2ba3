//! Microsoft provider tests

use authweave::providers::Microsoft;
use authweave::{AuthUser, Provider, Token};
use serde_json::{json, Value};

use crate::common::{profile_server, token};

async fn fetch_user_with(document: Value, token: &Token) -> AuthUser {
	let server = profile_server(&document).await;
	let mut provider = Microsoft::new();
	provider.set_user_api_url(format!("{}/profile", server.uri()));

	provider.fetch_auth_user(token).await.unwrap()
}

async fn fetch_user(document: Value) -> AuthUser {
	fetch_user_with(document, &token("access")).await
}

#[test]
fn test_microsoft_defaults() {
	let provider = Microsoft::new();

	assert_eq!(provider.name(), "microsoft");
	assert_eq!(provider.scopes(), ["User.Read".to_string()]);
	assert!(provider.auth_url().contains("login.microsoftonline.com"));
	assert!(provider.token_url().contains("login.microsoftonline.com"));
	assert!(provider.user_api_url().contains("graph.microsoft.com"));
}

#[tokio::test]
async fn test_principal_name_fallback_document() {
	// Arrange: no `emails` field, id only under account[0], split name.
	let document = json!({
		"account": [{"id": "123", "userPrincipalName": "a@b.com"}],
		"names": [{"first": "A", "last": "B"}]
	});

	// Act
	let user = fetch_user(document).await;

	// Assert: id query targets the top-level field, so it misses here.
	assert_eq!(user.id, "");
	assert_eq!(user.name, "A B");
	assert_eq!(user.email, "a@b.com");
}

#[tokio::test]
async fn test_primary_email_wins_over_principal_name() {
	// Arrange
	let document = json!({
		"emails": [{"address": "primary@example.com"}],
		"account": [{"userPrincipalName": "secondary@example.com"}]
	});

	// Act
	let user = fetch_user(document).await;

	// Assert
	assert_eq!(user.email, "primary@example.com");
}

#[tokio::test]
async fn test_invalid_principal_name_degrades_to_empty() {
	// Arrange: the principal name is not a mailbox address.
	let document = json!({
		"account": [{"userPrincipalName": "DOMAIN\\machine-account"}]
	});

	// Act
	let user = fetch_user(document).await;

	// Assert
	assert_eq!(user.email, "");
}

#[tokio::test]
async fn test_principal_name_with_display_form_is_normalized() {
	// Arrange
	let document = json!({
		"account": [{"userPrincipalName": "Ada Lovelace <ada@example.com>"}]
	});

	// Act
	let user = fetch_user(document).await;

	// Assert
	assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn test_name_joins_first_and_last() {
	let user = fetch_user(json!({
		"names": [{"first": "Ada", "last": "Lovelace"}]
	}))
	.await;

	assert_eq!(user.name, "Ada Lovelace");
}

#[tokio::test]
async fn test_name_join_keeps_separator_when_first_is_missing() {
	// The single separating space survives a missing part.
	let user = fetch_user(json!({
		"names": [{"last": "Lovelace"}]
	}))
	.await;

	assert_eq!(user.name, " Lovelace");
}

#[tokio::test]
async fn test_name_join_keeps_separator_when_last_is_missing() {
	let user = fetch_user(json!({
		"names": [{"first": "Ada"}]
	}))
	.await;

	assert_eq!(user.name, "Ada ");
}

#[tokio::test]
async fn test_top_level_id_is_extracted() {
	let user = fetch_user(json!({"id": "user-42"})).await;

	assert_eq!(user.id, "user-42");
}

#[tokio::test]
async fn test_raw_user_round_trip() {
	// Arrange
	let document = json!({
		"id": "user-42",
		"names": [{"first": "A", "last": "B"}],
		"extra": {"deeply": ["nested", 1, true, null]}
	});

	// Act
	let user = fetch_user(document.clone()).await;

	// Assert: the decoded input document, no fields dropped or mutated.
	let round_trip = Value::Object(user.raw_user.into_iter().collect());
	assert_eq!(round_trip, document);
}

#[tokio::test]
async fn test_tokens_are_copied_onto_the_user() {
	// Arrange
	let token = Token {
		access_token: "at-789".to_string(),
		token_type: "Bearer".to_string(),
		refresh_token: Some("rt-789".to_string()),
		expires_in: Some(3600),
	};

	// Act
	let user = fetch_user_with(json!({"id": "u"}), &token).await;

	// Assert
	assert_eq!(user.access_token, "at-789");
	assert_eq!(user.refresh_token, "rt-789");
}

#[tokio::test]
async fn test_missing_refresh_token_is_empty() {
	let user = fetch_user(json!({"id": "u"})).await;

	assert_eq!(user.refresh_token, "");
}

#[tokio::test]
async fn test_empty_profile_is_a_valid_outcome() {
	// Arrange: structurally valid but content-free payload.
	let user = fetch_user(json!({})).await;

	// Assert: empty fields, not an error. The name join quirk leaves
	// the lone separator in place.
	assert_eq!(user.id, "");
	assert_eq!(user.email, "");
	assert_eq!(user.name, " ");
	assert!(user.raw_user.is_empty());
}
