//! Crate-level error types shared across signing, flows, and stores.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(#[from] crate::store::StoreError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Signature computation failure.
	#[error(transparent)]
	Sign(#[from] SignError),
	/// Token endpoint protocol violation.
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// An authenticated fetch was attempted without a stored access token.
	#[error("Service `{service}` is not authorized; no access token is stored.")]
	NotAuthorized {
		/// Service identifier the fetch was attempted against.
		service: String,
	},
}

/// Configuration and validation failures raised at construction time.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Consumer key was empty.
	#[error("Consumer key must not be empty.")]
	MissingConsumerKey,
	/// Consumer secret was empty.
	#[error("Consumer secret must not be empty.")]
	MissingConsumerSecret,
	/// Service descriptor failed validation.
	#[error(transparent)]
	Descriptor(#[from] crate::provider::ServiceDescriptorError),
	/// Service identifier failed validation.
	#[error(transparent)]
	ServiceId(#[from] crate::auth::ServiceIdError),
}

/// Failures raised while computing an OAuth signature.
#[derive(Debug, ThisError)]
pub enum SignError {
	/// The HMAC-SHA1 keyed hash could not be computed.
	#[error("Failed to compute the HMAC-SHA1 signature.")]
	Hash {
		/// Underlying digest failure.
		#[source]
		source: BoxError,
	},
}
impl SignError {
	/// Wraps a digest-layer failure inside [`SignError`].
	pub fn hash(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Hash { source: Box::new(src) }
	}
}

/// Protocol violations reported by OAuth token endpoints.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ProtocolError {
	/// Token endpoint answered with an error status.
	#[error("Token endpoint {endpoint} returned HTTP {status}: {body}")]
	Endpoint {
		/// Endpoint the request was sent to.
		endpoint: String,
		/// HTTP status code of the response.
		status: u16,
		/// Raw response body, kept for diagnostics.
		body: String,
	},
	/// Token endpoint response did not contain an `oauth_token` field.
	#[error("Token endpoint {endpoint} response is missing `oauth_token`: {body}")]
	MissingToken {
		/// Endpoint the response came from.
		endpoint: String,
		/// Raw response body, kept for diagnostics.
		body: String,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while dispatching the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
