//! Consumer (application) credential supplied once at construction.

// self
use crate::{auth::Secret, error::ConfigError};

/// Credential identifying the calling application; immutable per [`Signer`](crate::sign::Signer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consumer {
	/// Public consumer key sent as `oauth_consumer_key`.
	pub key: String,
	/// Consumer secret folded into signing keys; redacted in formatters.
	pub secret: Secret,
}
impl Consumer {
	/// Validates and builds the credential; both parts must be non-empty.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self, ConfigError> {
		let key = key.into();
		let secret = secret.into();

		if key.is_empty() {
			return Err(ConfigError::MissingConsumerKey);
		}
		if secret.is_empty() {
			return Err(ConfigError::MissingConsumerSecret);
		}

		Ok(Self { key, secret: Secret::new(secret) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn consumer_requires_both_parts() {
		assert!(matches!(Consumer::new("", "secret"), Err(ConfigError::MissingConsumerKey)));
		assert!(matches!(Consumer::new("key", ""), Err(ConfigError::MissingConsumerSecret)));

		let consumer = Consumer::new("key", "secret").expect("Consumer fixture should be valid.");

		assert_eq!(consumer.key, "key");
		assert_eq!(consumer.secret.expose(), "secret");
	}

	#[test]
	fn consumer_debug_redacts_the_secret() {
		let consumer = Consumer::new("key", "s3cr3t").expect("Consumer fixture should be valid.");
		let rendered = format!("{consumer:?}");

		assert!(rendered.contains("key"));
		assert!(!rendered.contains("s3cr3t"));
		assert!(rendered.contains("<redacted>"));
	}
}
