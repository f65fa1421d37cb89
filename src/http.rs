//! Transport primitives for dispatching signed requests.
//!
//! [`FlowHttpClient`] is the crate's only dependency on an HTTP stack. Implementations
//! must send [`HttpRequest::body`] byte-exact: a form payload has already been encoded
//! with the signer's percent-encoding, and any transport-level re-encoding would break
//! the signature. Timeouts and retries are the transport's concern; flows perform one
//! call per transition and surface the first failure.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// `Authorization` header name.
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// `Content-Type` header name.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// Content type of form payloads and token endpoint responses.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Outbound HTTP request with exact control over the body bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// HTTP method name.
	pub method: String,
	/// Target URL.
	pub url: Url,
	/// Header name/value pairs, already rendered.
	pub headers: Vec<(String, String)>,
	/// Optional body, sent verbatim.
	pub body: Option<String>,
}
impl HttpRequest {
	/// Creates a request without headers or body.
	pub fn new(method: impl Into<String>, url: Url) -> Self {
		Self { method: method.into(), url, headers: Vec::new(), body: None }
	}

	/// Appends a header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}

	/// Attaches a body to be sent byte-exact.
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());

		self
	}
}

/// Response surfaced back to flow callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}

/// Future resolved by [`FlowHttpClient`] implementations.
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of dispatching signed requests.
pub trait FlowHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes the request and resolves to the raw status and body.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl FlowHttpClient for ReqwestHttpClient {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = reqwest::Method::from_bytes(request.method.as_bytes())
				.map_err(TransportError::network)?;
			let mut builder = client.request(method, request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.text().await.map_err(TransportError::from)?;

			Ok(HttpResponse { status, body })
		})
	}
}
