//! Pure, stateless OAuth 1.0a signing engine.
//!
//! [`Signer`] transforms a [`Consumer`] credential, a [`SignableRequest`], and an
//! optional [`Token`] into a complete [`OAuthParameters`] set carrying an HMAC-SHA1
//! signature, plus the `Authorization` header rendering. Signing is deterministic
//! for a fixed nonce and timestamp, which is what makes the output verifiable as a
//! cross-implementation test vector; the only randomness is the per-call nonce.

pub mod encode;

pub use encode::{NONCE_LENGTH, encode_form, percent_encode};

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::{Consumer, Token},
	error::SignError,
};

/// Represents `oauth_callback`.
pub const OAUTH_CALLBACK_KEY: &str = "oauth_callback";
/// Represents `oauth_consumer_key`.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// Represents `oauth_nonce`.
pub const OAUTH_NONCE_KEY: &str = "oauth_nonce";
/// Represents `oauth_signature`.
pub const OAUTH_SIGNATURE_KEY: &str = "oauth_signature";
/// Represents `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD_KEY: &str = "oauth_signature_method";
/// Represents `oauth_timestamp`.
pub const OAUTH_TIMESTAMP_KEY: &str = "oauth_timestamp";
/// Represents `oauth_token`.
pub const OAUTH_TOKEN_KEY: &str = "oauth_token";
/// Represents `oauth_token_secret`.
pub const OAUTH_TOKEN_SECRET_KEY: &str = "oauth_token_secret";
/// Represents `oauth_verifier`.
pub const OAUTH_VERIFIER_KEY: &str = "oauth_verifier";
/// Represents `oauth_version`.
pub const OAUTH_VERSION_KEY: &str = "oauth_version";
/// Represents `realm`.
pub const REALM_KEY: &str = "realm";
/// Signature method label advertised in every signed parameter set.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
/// Protocol version label advertised in every signed parameter set.
pub const OAUTH_VERSION: &str = "1.0a";

pub(crate) const OAUTH_KEY_PREFIX: &str = "oauth_";

/// Description of the HTTP request being signed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignableRequest {
	/// HTTP method; uppercased during base-string construction.
	pub method: String,
	/// Target URL including any query string, which participates in the signature.
	pub url: Url,
	/// Form-urlencoded body parameters, present only for form payloads.
	pub form: Option<BTreeMap<String, String>>,
}
impl SignableRequest {
	/// Creates a request description without a form payload.
	pub fn new(method: impl Into<String>, url: Url) -> Self {
		Self { method: method.into(), url, form: None }
	}

	/// Replaces the form payload wholesale.
	pub fn with_form(mut self, form: BTreeMap<String, String>) -> Self {
		self.form = Some(form);

		self
	}

	/// Adds a single form parameter, creating the payload on first use.
	pub fn form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.form.get_or_insert_with(BTreeMap::new).insert(key.into(), value.into());

		self
	}
}

/// Complete set of OAuth protocol parameters attached to one signed request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthParameters(BTreeMap<String, String>);
impl OAuthParameters {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a parameter, returning the previous value when the key was present.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Returns the value stored under `key`, if any.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Iterates parameters in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
		self.0.iter()
	}

	/// Number of parameters in the set.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when the set holds no parameters.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Renders the `Authorization` header value.
	///
	/// Keys are emitted in ascending order; only `realm` and `oauth_`-prefixed keys are
	/// included, each side percent-encoded, joined as `OAuth k1="v1",k2="v2"` with no
	/// trailing separator.
	pub fn authorization_header(&self) -> String {
		let rendered = self
			.0
			.iter()
			.filter(|(key, _)| key.as_str() == REALM_KEY || key.starts_with(OAUTH_KEY_PREFIX))
			.map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
			.collect::<Vec<_>>()
			.join(",");

		format!("OAuth {rendered}")
	}
}
impl<K, V> FromIterator<(K, V)> for OAuthParameters
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}

/// Stateless signing engine bound to one [`Consumer`] credential.
#[derive(Clone, Debug)]
pub struct Signer {
	consumer: Consumer,
	trailing_ampersand: bool,
}
impl Signer {
	/// Creates a signer for the provided consumer credential.
	pub fn new(consumer: Consumer) -> Self {
		Self { consumer, trailing_ampersand: true }
	}

	/// Switches signing-key derivation to the no-trailing-ampersand mode, kept for
	/// compatibility with signature-method variants that never use a token secret.
	pub fn without_trailing_ampersand(mut self) -> Self {
		self.trailing_ampersand = false;

		self
	}

	/// Returns the consumer credential this signer was constructed with.
	pub fn consumer(&self) -> &Consumer {
		&self.consumer
	}

	/// Produces the signed parameter set for a request using a fresh nonce and the
	/// current Unix time.
	///
	/// `extra` entries are merged over the protocol defaults last-writer-wins (this is
	/// how `oauth_callback` and `oauth_verifier` ride along); `oauth_token` is included
	/// iff a token is supplied.
	pub fn sign(
		&self,
		request: &SignableRequest,
		token: Option<&Token>,
		extra: &OAuthParameters,
	) -> Result<OAuthParameters, SignError> {
		self.sign_at(request, token, extra, &encode::fresh_nonce(), encode::unix_timestamp())
	}

	/// Deterministic variant of [`sign`](Self::sign) with a caller-supplied nonce and
	/// timestamp; byte-identical across runs for identical inputs.
	pub fn sign_at(
		&self,
		request: &SignableRequest,
		token: Option<&Token>,
		extra: &OAuthParameters,
		nonce: &str,
		timestamp: u64,
	) -> Result<OAuthParameters, SignError> {
		let mut params = OAuthParameters::new();

		params.insert(OAUTH_CONSUMER_KEY, self.consumer.key.clone());
		params.insert(OAUTH_NONCE_KEY, nonce);
		params.insert(OAUTH_SIGNATURE_METHOD_KEY, SIGNATURE_METHOD);
		params.insert(OAUTH_TIMESTAMP_KEY, timestamp.to_string());
		params.insert(OAUTH_VERSION_KEY, OAUTH_VERSION);

		for (key, value) in extra.iter() {
			params.insert(key.clone(), value.clone());
		}
		if let Some(token) = token {
			params.insert(OAUTH_TOKEN_KEY, token.public.clone());
		}

		let signature =
			self.signature(request, token.map(|token| token.secret.expose()), &params)?;

		params.insert(OAUTH_SIGNATURE_KEY, signature);

		Ok(params)
	}

	/// Computes the base64-encoded HMAC-SHA1 signature over the canonical base string.
	///
	/// `params` must not yet contain `oauth_signature`.
	pub fn signature(
		&self,
		request: &SignableRequest,
		token_secret: Option<&str>,
		params: &OAuthParameters,
	) -> Result<String, SignError> {
		let base = base_string(request, params);
		let key = self.signing_key(token_secret);

		hmac_sha1(&base, &key)
	}

	// `enc(consumer_secret) & enc(token_secret or "")`; in no-trailing-ampersand mode
	// with no token secret the consumer part stands alone.
	fn signing_key(&self, token_secret: Option<&str>) -> String {
		let consumer = percent_encode(self.consumer.secret.expose());
		let token = token_secret.unwrap_or_default();

		if token.is_empty() && !self.trailing_ampersand {
			return consumer;
		}

		format!("{consumer}&{}", percent_encode(token))
	}
}

// `UPPER(method) & enc(base_url) & enc(parameter_string)`.
fn base_string(request: &SignableRequest, params: &OAuthParameters) -> String {
	format!(
		"{}&{}&{}",
		request.method.to_uppercase(),
		percent_encode(&base_url(&request.url)),
		percent_encode(&parameter_string(request, params)),
	)
}

// Target URL with the query string and fragment stripped.
fn base_url(url: &Url) -> String {
	let mut url = url.clone();

	url.set_query(None);
	url.set_fragment(None);

	String::from(url)
}

// Merges URL query parameters, form body parameters, and OAuth parameters (in that
// order, last writer wins), percent-encodes each key and value independently, sorts by
// the encoded key in ascending byte order, and joins `key=value` pairs with `&`.
fn parameter_string(request: &SignableRequest, params: &OAuthParameters) -> String {
	let mut merged: BTreeMap<String, String> = BTreeMap::new();

	if let Some(query) = request.url.query() {
		merged.extend(url::form_urlencoded::parse(query.as_bytes()).into_owned());
	}
	if let Some(form) = &request.form {
		merged.extend(form.iter().map(|(key, value)| (key.clone(), value.clone())));
	}

	merged.extend(params.iter().map(|(key, value)| (key.clone(), value.clone())));

	let mut encoded: Vec<(String, String)> = merged
		.iter()
		.map(|(key, value)| (percent_encode(key), percent_encode(value)))
		.collect();

	encoded.sort();

	encoded
		.iter()
		.map(|(key, value)| format!("{key}={value}"))
		.collect::<Vec<_>>()
		.join("&")
}

fn hmac_sha1(base_string: &str, key: &str) -> Result<String, SignError> {
	let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes()).map_err(SignError::hash)?;

	mac.update(base_string.as_bytes());

	Ok(BASE64.encode(mac.finalize().into_bytes()))
}
