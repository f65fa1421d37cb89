//! Request/access token pair produced by the token endpoints.

// self
use crate::{_prelude::*, auth::Secret};

/// Which stage of the three-legged flow produced a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
	/// Temporary token issued by the request-token endpoint.
	Request,
	/// Long-lived token issued by the access-token endpoint.
	Access,
}
impl TokenKind {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenKind::Request => "request",
			TokenKind::Access => "access",
		}
	}
}
impl Display for TokenKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Opaque credential pair parsed from a token endpoint response.
///
/// The public identifier and the secret are either both present or both empty; the
/// protocol never inspects them beyond these fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
	/// Public token identifier sent as `oauth_token`.
	pub public: String,
	/// Token secret folded into the signing key; redacted in formatters.
	pub secret: Secret,
	/// Flow stage that produced the token.
	pub kind: TokenKind,
}
impl Token {
	/// Builds a token from parsed endpoint response fields.
	pub fn new(kind: TokenKind, public: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { public: public.into(), secret: Secret::new(secret), kind }
	}

	/// Returns `true` when the token authorizes arbitrary API fetches.
	pub fn is_access(&self) -> bool {
		matches!(self.kind, TokenKind::Access)
	}
}
