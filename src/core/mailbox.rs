//! Mailbox-syntax validation
//!
//! Used as the post-validation step of email fallback chains: a field
//! that looks like a principal name is only trusted as an email address
//! when it parses as a mailbox.

use regex::Regex;
use std::sync::LazyLock;

static ADDR_SPEC: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"(?x)
		^[A-Za-z0-9.!\#$%&'*+/=?^_`{|}~-]+
		@
		[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?
		(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
	)
	.expect("mailbox pattern is valid")
});

/// Parses a mailbox string, returning the normalized bare address.
///
/// Accepts both `user@example.com` and the RFC 5322 name-addr form
/// `Display Name <user@example.com>`. Returns `None` when the input is
/// not a syntactically valid mailbox.
pub fn parse_mailbox(input: &str) -> Option<String> {
	let trimmed = input.trim();
	let addr = match (trimmed.rfind('<'), trimmed.ends_with('>')) {
		(Some(start), true) => &trimmed[start + 1..trimmed.len() - 1],
		(None, false) => trimmed,
		_ => return None,
	};

	ADDR_SPEC.is_match(addr).then(|| addr.to_string())
}
