//! Declarative path queries over dynamic JSON documents
//!
//! Provider payloads are untrusted, partially-structured input, so they
//! stay a dynamically-typed [`serde_json::Value`] tree and field
//! extraction is a small recursive matcher over that tree. A query that
//! matches nothing is an ordinary `None`, never an error; only a query
//! that cannot be parsed is a [`PathQueryError`].
//!
//! Normalization pipelines combine queries into [`FieldQuery`] fallback
//! chains evaluated first-match-wins, which keeps the per-provider
//! policy data instead of control flow.

use serde_json::Value;
use thiserror::Error;

/// Error raised when a path query cannot be parsed.
///
/// Distinct from a query that parses but matches nothing: a missing
/// path is a `None` from [`PathQuery::get`], never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid path query `{query}`: {reason}")]
pub struct PathQueryError {
	/// The offending query string
	pub query: String,

	/// What the parser rejected
	pub reason: String,
}

/// One step of a parsed path query.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Field(String),
	Index(usize),
}

/// A parsed path query.
///
/// Supports the subset of JSONPath the providers need: `$` root,
/// `.field` object access and `[n]` array indexing, e.g.
/// `$.account[0].userPrincipalName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
	segments: Vec<Segment>,
}

impl PathQuery {
	/// Parses `query` into its segments.
	pub fn parse(query: &str) -> Result<Self, PathQueryError> {
		let err = |reason: &str| PathQueryError {
			query: query.to_string(),
			reason: reason.to_string(),
		};

		let rest = query
			.strip_prefix('$')
			.ok_or_else(|| err("must start with `$`"))?;

		let mut segments = Vec::new();
		let mut chars = rest.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'.' => {
					let mut name = String::new();
					while let Some(&next) = chars.peek() {
						if next == '.' || next == '[' {
							break;
						}
						name.push(next);
						chars.next();
					}
					if name.is_empty() {
						return Err(err("empty field name"));
					}
					segments.push(Segment::Field(name));
				}
				'[' => {
					let mut digits = String::new();
					loop {
						match chars.next() {
							Some(']') => break,
							Some(d) if d.is_ascii_digit() => digits.push(d),
							Some(_) => {
								return Err(err("array index must be a non-negative integer"));
							}
							None => return Err(err("unterminated array index")),
						}
					}
					let index = digits
						.parse()
						.map_err(|_| err("array index must be a non-negative integer"))?;
					segments.push(Segment::Index(index));
				}
				_ => return Err(err("expected `.` or `[` after `$`")),
			}
		}

		Ok(Self { segments })
	}

	/// Resolves the query against `document`.
	///
	/// A path that walks off the document (missing field, index out of
	/// range, or a segment applied to the wrong shape) is `None`.
	pub fn get<'a>(&self, document: &'a Value) -> Option<&'a Value> {
		let mut current = document;
		for segment in &self.segments {
			current = match segment {
				Segment::Field(name) => current.as_object()?.get(name)?,
				Segment::Index(index) => current.as_array()?.get(*index)?,
			};
		}
		Some(current)
	}

	/// String value at this query; a non-string match is a miss.
	pub fn get_str<'a>(&self, document: &'a Value) -> Option<&'a str> {
		self.get(document)?.as_str()
	}
}

/// Evaluates `path` against `document`, shape-checked as a string.
///
/// Pipeline-side convenience: a malformed path degrades to `None` like
/// any other miss. Use [`PathQuery::parse`] directly when the caller
/// needs to distinguish a bad query from an absent field.
pub fn query_string(document: &Value, path: &str) -> Option<String> {
	Some(PathQuery::parse(path).ok()?.get_str(document)?.to_string())
}

/// Evaluates `path` as an opaque identifier.
///
/// Accepts both strings and JSON numbers; a numeric id is rendered as
/// its decimal string. Anything else is a miss.
pub fn query_identifier(document: &Value, path: &str) -> Option<String> {
	match PathQuery::parse(path).ok()?.get(document)? {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}

/// A path query plus an optional post-validation step.
///
/// An ordered slice of these is a fallback chain: entries are tried in
/// order and the first one that matches (and survives validation)
/// wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldQuery {
	/// The path to try
	pub path: &'static str,

	/// Optional normalizing validation; returning `None` rejects the
	/// match and moves on to the next entry
	pub validate: Option<fn(&str) -> Option<String>>,
}

impl FieldQuery {
	/// A query whose string match is taken as-is.
	pub const fn plain(path: &'static str) -> Self {
		Self {
			path,
			validate: None,
		}
	}

	/// A query whose match must pass `validate` before it is used.
	pub const fn validated(path: &'static str, validate: fn(&str) -> Option<String>) -> Self {
		Self {
			path,
			validate: Some(validate),
		}
	}
}

/// Evaluates a fallback chain over `document`, first match wins.
///
/// A query that matches nothing, matches a non-string, or fails its
/// post-validation simply yields to the next entry; an exhausted chain
/// is `None`.
pub fn first_string(document: &Value, chain: &[FieldQuery]) -> Option<String> {
	chain.iter().find_map(|field| {
		let value = query_string(document, field.path)?;
		match field.validate {
			Some(validate) => validate(&value),
			None => Some(value),
		}
	})
}
