//! Storage contracts and built-in store implementations for flow tokens.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	auth::{ServiceId, Token},
};

/// Future resolved by [`TokenStore`] implementations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Persistence contract for flow-issued tokens, keyed by service identifier.
///
/// Consistency is at most last-writer-wins per key; callers running concurrent flows
/// for the same service must serialize externally.
pub trait TokenStore
where
	Self: Send + Sync,
{
	/// Persists or replaces the token stored for the service.
	fn save<'a>(&'a self, service: &'a ServiceId, token: Token) -> StoreFuture<'a, ()>;

	/// Fetches the token stored for the service, if present.
	fn fetch<'a>(&'a self, service: &'a ServiceId) -> StoreFuture<'a, Option<Token>>;
}

/// Error type produced by [`TokenStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn store_error_converts_into_crate_error_with_source() {
		let store_error = StoreError::Backend { message: "file unreachable".into() };
		let crate_error: Error = store_error.clone().into();

		assert!(matches!(crate_error, Error::Storage(_)));
		assert!(crate_error.to_string().contains("file unreachable"));

		let source = StdError::source(&crate_error)
			.expect("Crate error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}
}
